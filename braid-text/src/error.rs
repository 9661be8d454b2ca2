use std::fmt::Display;

use thiserror::Error;

use crate::render;

/// An error carrying a message rendered from a template.
///
/// The message is rendered once, at construction, with [`render`]; what the
/// error displays is exactly that string.
///
/// # Example
///
/// ```
/// use braid_text::BraidError;
///
/// let error = BraidError::new("spool {} jammed at {}", &[&4, &"station B"]);
/// assert_eq!(error.to_string(), "spool 4 jammed at station B");
/// ```
#[derive(Debug, Error)]
#[error("{message}")]
pub struct BraidError {
    message: String,
}

impl BraidError {
    /// Creates an error whose message is `template` rendered against `args`.
    pub fn new(template: &str, args: &[&dyn Display]) -> Self {
        Self {
            message: render(template, args),
        }
    }

    /// The rendered message.
    pub fn message(&self) -> &str {
        &self.message
    }
}
