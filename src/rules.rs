//! Built-in validation rules keyed by validation type.

use email_address::EmailAddress;

/// Minimum character count for name and last-name fields.
pub const MIN_NAME_LEN: usize = 2;

/// Which built-in rule applies to a field.
///
/// The tag is supplied per field by the [`CoordinatorDelegate`] and is
/// re-queried on every validation pass, so typing may change between
/// passes.
///
/// [`CoordinatorDelegate`]: crate::CoordinatorDelegate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ValidationType {
    /// The field is exempt from validation.
    #[default]
    None,
    /// First name: alphabetic, at least [`MIN_NAME_LEN`] characters.
    Name,
    /// Last name: same rule as [`ValidationType::Name`].
    LastName,
    /// Entire text consists of alphabetic characters.
    Letters,
    /// Entire text consists of numeric characters.
    Numbers,
    /// Every character is a letter or a digit.
    LettersAndNumbers,
    /// A syntactically valid email address.
    Email,
    /// Non-empty and equal to the text of the unique [`ValidationType::Email`]
    /// field in the same chain.
    EmailConfirmation,
}

impl ValidationType {
    /// Whether fields of this type skip validation entirely.
    pub fn is_exempt(self) -> bool {
        self == ValidationType::None
    }

    /// Check `text` against this type's built-in rule.
    ///
    /// `primary_email` is the current text of the chain's unique email
    /// field and is only consulted for `EmailConfirmation`; `None` means
    /// no unique email field exists, which fails the confirmation (there
    /// is nothing to confirm against).
    pub fn accepts(self, text: &str, primary_email: Option<&str>) -> bool {
        match self {
            ValidationType::None => true,
            ValidationType::Name | ValidationType::LastName => {
                text.chars().count() >= MIN_NAME_LEN && text.chars().all(char::is_alphabetic)
            }
            ValidationType::Letters => {
                !text.is_empty() && text.chars().all(char::is_alphabetic)
            }
            ValidationType::Numbers => !text.is_empty() && text.chars().all(char::is_numeric),
            ValidationType::LettersAndNumbers => {
                !text.is_empty() && text.chars().all(char::is_alphanumeric)
            }
            ValidationType::Email => EmailAddress::is_valid(text),
            ValidationType::EmailConfirmation => {
                !text.is_empty() && primary_email.is_some_and(|primary| primary == text)
            }
        }
    }
}
