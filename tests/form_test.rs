//! Live recompute: every accepted edit of a field recomputes the recipe,
//! and nothing is recomputed while any field is invalid.

use levain_calc::app::field::{Form, InputField};
use levain_calc::core::Recipe;
use levain_calc::{Formulas, Rates, StarterRecipe};
use std::cell::RefCell;
use std::rc::Rc;

const WEIGHT: usize = 0;
const DOUGH: usize = 1;
const RATIO: usize = 3;

struct StarterForm {
    form: Form,
    result: Rc<RefCell<Option<StarterRecipe>>>,
    recomputes: Rc<RefCell<usize>>,
}

impl StarterForm {
    fn new(weight: f64, dough: f64, starter: f64, ratio: f64) -> Self {
        let result = Rc::new(RefCell::new(None));
        let recomputes = Rc::new(RefCell::new(0));
        let fields = vec![
            InputField::new("Starter weight", weight),
            InputField::percentage("Dough hydration", dough),
            InputField::percentage("Starter hydration", starter),
            InputField::percentage("Starter ratio", ratio),
        ];

        let form = {
            let result = Rc::clone(&result);
            let recomputes = Rc::clone(&recomputes);
            Form::new(fields, move |values| {
                *recomputes.borrow_mut() += 1;
                *result.borrow_mut() = Rates::from_percentages(values[1], values[2], values[3])
                    .ok()
                    .map(|rates| Formulas::default().compute_from_starter_weight(values[0], &rates))
                    .filter(|recipe| recipe.is_feasible());
            })
        };

        Self {
            form,
            result,
            recomputes,
        }
    }

    fn recomputes(&self) -> usize {
        *self.recomputes.borrow()
    }
}

#[test]
fn test_each_edit_recomputes() {
    let mut f = StarterForm::new(150.0, 60.0, 100.0, 30.0);

    f.form.set_text(WEIGHT, "2").unwrap();
    f.form.set_text(WEIGHT, "20").unwrap();
    f.form.set_text(WEIGHT, "200").unwrap();
    f.form.set_text(RATIO, "25").unwrap();
    assert_eq!(f.recomputes(), 4);
    assert_eq!(
        *f.result.borrow(),
        Some(StarterRecipe {
            flour: 400.0,
            water: 200.0,
            dough: 800.0,
            salt: 10.0,
        })
    );

    // A bad edit leaves the last result untouched.
    assert!(f.form.set_text(DOUGH, "6o").is_err());
    assert_eq!(f.recomputes(), 4);
    assert!(f.result.borrow().is_some());
}

#[test]
fn test_no_recompute_while_another_field_is_invalid() {
    let mut f = StarterForm::new(200.0, 60.0, 100.0, 25.0);
    f.form.set_text(WEIGHT, "200").unwrap();
    assert_eq!(f.recomputes(), 1);
    let before = *f.result.borrow();

    assert!(f.form.set_text(DOUGH, "abc").is_err());
    assert!(f.form.field(DOUGH).unwrap().has_error());

    // Valid edit elsewhere, but the dough hydration is still in error.
    f.form.set_text(WEIGHT, "300").unwrap();
    f.form.set_text(RATIO, "20").unwrap();
    assert_eq!(f.recomputes(), 1);
    assert_eq!(*f.result.borrow(), before);

    // Fixing the field brings the form back.
    f.form.set_text(DOUGH, "65").unwrap();
    assert_eq!(f.recomputes(), 2);
    assert_ne!(*f.result.borrow(), before);
}

#[test]
fn test_incompatible_edit_clears_result() {
    let mut f = StarterForm::new(200.0, 60.0, 100.0, 25.0);

    f.form.set_text(DOUGH, "60").unwrap();
    assert!(f.result.borrow().is_some());

    // (1/0.25 + 1) * 0.15 - 1.0 < 0
    f.form.set_text(DOUGH, "15").unwrap();
    assert!(f.result.borrow().is_none());
}
