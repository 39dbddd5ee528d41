use crate::app::field::InputField;
use crate::utils::error::{LevainError, Result};
use crate::utils::validation::validate_range;
use std::io::{BufRead, Write};

/// Line-oriented question/answer over any reader and writer.
///
/// End of input yields [`LevainError::Interrupted`]; invalid answers are asked
/// again without comment.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn read_answer(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            tracing::debug!("input closed while waiting for an answer");
            return Err(LevainError::Interrupted);
        }
        Ok(line.trim().to_string())
    }

    /// Asks until the field accepts the answer.
    pub fn ask_field(&mut self, field: &mut InputField) -> Result<f64> {
        let question = format!("{} : ", field.label());
        loop {
            let answer = self.read_answer(&question)?;
            match field.set_text(&answer) {
                Ok(value) => return Ok(value),
                Err(e) => tracing::warn!(answer = %answer, "{}", e),
            }
        }
    }

    /// Asks for a whole number in `min..=max`; an empty answer takes `default`.
    pub fn ask_count(&mut self, question: &str, default: u32, min: u32, max: u32) -> Result<u32> {
        loop {
            let answer = self.read_answer(question)?;
            if answer.is_empty() {
                return Ok(default);
            }
            match answer.parse::<u32>() {
                Ok(value) if validate_range(question.trim(), value, min, max).is_ok() => {
                    return Ok(value)
                }
                _ => tracing::warn!(answer = %answer, "expected a number between {} and {}", min, max),
            }
        }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
