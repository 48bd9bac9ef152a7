//! Field-level validation for selection widgets.

use crate::value::Selection;

/// Message shown for an empty required field when no custom one is set.
pub const DEFAULT_REQUIRED_MESSAGE: &str = "This field is required";

/// Why a selection failed validation.
///
/// Validation failures are state, not control flow: widgets store the last
/// error and render it, and stay fully usable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The field is required and nothing is selected.
    #[error("{message}")]
    Required {
        /// Text shown to the user.
        message: String,
    },
}

/// Rules a selection is checked against.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rules {
    /// Empty selections fail.
    pub required: bool,
    /// Replaces [`DEFAULT_REQUIRED_MESSAGE`] when non-empty.
    pub error_message: String,
}

impl Rules {
    /// Check `selection` against these rules.
    pub fn check(&self, selection: &Selection) -> Result<(), ValidationError> {
        if self.required && selection.is_empty() {
            let message = if self.error_message.is_empty() {
                DEFAULT_REQUIRED_MESSAGE.to_string()
            } else {
                self.error_message.clone()
            };
            return Err(ValidationError::Required { message });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn required() -> Rules {
        Rules {
            required: true,
            ..Rules::default()
        }
    }

    #[test]
    fn optional_accepts_empty() {
        assert!(Rules::default().check(&Selection::empty(false)).is_ok());
        assert!(Rules::default().check(&Selection::empty(true)).is_ok());
    }

    #[test]
    fn required_rejects_every_empty_shape() {
        for empty in [
            Selection::Single(None),
            Selection::single(""),
            Selection::Multiple(vec![]),
        ] {
            let err = required().check(&empty).unwrap_err();
            assert_eq!(err.to_string(), DEFAULT_REQUIRED_MESSAGE);
        }
    }

    #[test]
    fn required_accepts_selection() {
        assert!(required().check(&Selection::single("a")).is_ok());
        assert!(required().check(&Selection::multiple(["a"])).is_ok());
    }

    #[test]
    fn custom_message_overrides_default() {
        let rules = Rules {
            required: true,
            error_message: "Pick a country".into(),
        };
        assert_eq!(
            rules.check(&Selection::empty(false)),
            Err(ValidationError::Required {
                message: "Pick a country".into()
            })
        );
    }
}
