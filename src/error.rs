//! Validation error values and their combination.

use thiserror::Error;

/// A single named validation failure with a human-readable description.
///
/// Instances are immutable once built and cheap to clone; the coordinator
/// creates them fresh for every validation attempt via the delegate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{name}: {description}")]
pub struct ValidationError {
    name: String,
    description: String,
}

impl ValidationError {
    /// Build an error from a short failure title and an explanatory
    /// message. Inputs are taken as-is; empty strings are permitted.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    /// The short failure title.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The explanatory message.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Combine errors into one aggregate, joining names with `title_sep`
    /// and descriptions with `desc_sep`, in the given order.
    ///
    /// Combining an empty slice is a caller bug and is reported as
    /// [`CombineError::EmptyInput`] rather than producing an empty error.
    pub fn combine(
        errors: &[ValidationError],
        title_sep: &str,
        desc_sep: &str,
    ) -> Result<ValidationError, CombineError> {
        if errors.is_empty() {
            return Err(CombineError::EmptyInput);
        }

        let name = errors
            .iter()
            .map(|e| e.name.as_str())
            .collect::<Vec<_>>()
            .join(title_sep);
        let description = errors
            .iter()
            .map(|e| e.description.as_str())
            .collect::<Vec<_>>()
            .join(desc_sep);

        Ok(ValidationError { name, description })
    }
}

/// Error combining validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CombineError {
    /// `combine` was called with no errors to combine.
    #[error("cannot combine an empty list of validation errors")]
    EmptyInput,
}
