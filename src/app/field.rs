//! Validated numeric input with change observers.
//!
//! A field keeps its last valid value. Every accepted edit notifies the
//! registered observers synchronously, so a form can recompute on each
//! keystroke; rejected edits flag the field and notify nobody.

use crate::utils::error::{LevainError, Result};
use std::fmt;

type Observer = Box<dyn FnMut(f64)>;

pub struct InputField {
    label: String,
    range: Option<(f64, f64)>,
    value: f64,
    error: bool,
    observers: Vec<Observer>,
}

impl InputField {
    pub fn new(label: impl Into<String>, initial: f64) -> Self {
        Self {
            label: label.into(),
            range: None,
            value: initial,
            error: false,
            observers: Vec::new(),
        }
    }

    /// Percent inputs accept (0, 100].
    pub fn percentage(label: impl Into<String>, initial: f64) -> Self {
        Self::new(label, initial).with_range(0.0, 100.0)
    }

    /// Inclusive bounds checked on top of the positivity rule.
    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.range = Some((min, max));
        self
    }

    pub fn on_change<F>(&mut self, observer: F)
    where
        F: FnMut(f64) + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn has_error(&self) -> bool {
        self.error
    }

    /// Last accepted value, `None` while the field holds an invalid edit.
    pub fn value(&self) -> Option<f64> {
        if self.error {
            None
        } else {
            Some(self.value)
        }
    }

    /// Parses user text. A decimal comma is accepted.
    pub fn set_text(&mut self, text: &str) -> Result<f64> {
        match text.trim().replace(',', ".").parse::<f64>() {
            Ok(value) => self.set_value(value),
            Err(_) => Err(self.reject()),
        }
    }

    pub fn set_value(&mut self, value: f64) -> Result<f64> {
        if !self.accepts(value) {
            return Err(self.reject());
        }

        self.value = value;
        self.error = false;
        for observer in self.observers.iter_mut() {
            observer(value);
        }
        Ok(value)
    }

    fn accepts(&self, value: f64) -> bool {
        if !value.is_finite() || value <= 0.0 {
            return false;
        }
        match self.range {
            Some((min, max)) => min <= value && value <= max,
            None => true,
        }
    }

    fn reject(&mut self) -> LevainError {
        self.error = true;
        LevainError::ValidationError {
            message: format!("{} incorrect", self.label),
        }
    }
}

impl fmt::Debug for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputField")
            .field("label", &self.label)
            .field("range", &self.range)
            .field("value", &self.value)
            .field("error", &self.error)
            .field("observers", &self.observers.len())
            .finish()
    }
}

/// Values of all fields, or `None` if any of them is in error.
pub fn form_values(fields: &[&InputField]) -> Option<Vec<f64>> {
    fields.iter().map(|field| field.value()).collect()
}

type Recompute = Box<dyn FnMut(&[f64])>;

/// A set of fields recomputed together. The callback runs after an
/// accepted edit, and only while every field holds a valid value.
pub struct Form {
    fields: Vec<InputField>,
    recompute: Recompute,
}

impl Form {
    pub fn new<F>(fields: Vec<InputField>, recompute: F) -> Self
    where
        F: FnMut(&[f64]) + 'static,
    {
        Self {
            fields,
            recompute: Box::new(recompute),
        }
    }

    pub fn field(&self, index: usize) -> Option<&InputField> {
        self.fields.get(index)
    }

    /// Edits one field, then recomputes if the whole form is valid.
    pub fn set_text(&mut self, index: usize, text: &str) -> Result<f64> {
        let field = self
            .fields
            .get_mut(index)
            .ok_or_else(|| LevainError::ValidationError {
                message: format!("no field at position {}", index),
            })?;
        let value = field.set_text(text)?;

        let fields: Vec<&InputField> = self.fields.iter().collect();
        match form_values(&fields) {
            Some(values) => (self.recompute)(&values),
            None => tracing::debug!("form has invalid fields, skipping recompute"),
        }
        Ok(value)
    }
}

impl fmt::Debug for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Form").field("fields", &self.fields).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_accepts_and_notifies() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut field = InputField::new("Starter weight", 150.0);
        let sink = Rc::clone(&seen);
        field.on_change(move |value| sink.borrow_mut().push(value));

        assert_eq!(field.set_text("200").unwrap(), 200.0);
        assert_eq!(field.set_text(" 212,5 ").unwrap(), 212.5);
        assert_eq!(*seen.borrow(), vec![200.0, 212.5]);
        assert_eq!(field.value(), Some(212.5));
    }

    #[test]
    fn test_rejects_without_notifying() {
        let calls = Rc::new(RefCell::new(0));
        let mut field = InputField::percentage("Dough hydration", 60.0);
        let counter = Rc::clone(&calls);
        field.on_change(move |_| *counter.borrow_mut() += 1);

        let err = field.set_text("abc").unwrap_err();
        assert_eq!(err.to_string(), "Validation error: Dough hydration incorrect");
        assert!(field.set_text("0").is_err());
        assert!(field.set_text("-10").is_err());
        assert!(field.set_text("120").is_err());

        assert!(field.has_error());
        assert_eq!(field.value(), None);
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn test_recovers_after_error() {
        let mut field = InputField::percentage("Starter ratio", 30.0);
        assert!(field.set_text("").is_err());
        assert!(field.has_error());

        field.set_text("25").unwrap();
        assert!(!field.has_error());
        assert_eq!(field.value(), Some(25.0));
    }

    #[test]
    fn test_form_values_require_every_field() {
        let weight = InputField::new("Starter weight", 150.0);
        let mut hydration = InputField::percentage("Dough hydration", 60.0);

        assert_eq!(form_values(&[&weight, &hydration]), Some(vec![150.0, 60.0]));

        let _ = hydration.set_text("x");
        assert_eq!(form_values(&[&weight, &hydration]), None);
    }
}
