//! Strongly-typed value objects used by the category entity.
//!
//! The entity carries these wrappers instead of raw primitives so that the
//! length and presence rules are enforced once, at the boundary. Every
//! wrapper re-validates on deserialization.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;
use uuid::Uuid;
use validator::ValidateLength;

/// Minimum number of characters in a category name.
pub const NAME_MIN_LENGTH: u64 = 3;
/// Maximum number of characters in a category name.
pub const NAME_MAX_LENGTH: u64 = 255;
/// Maximum number of characters in a category description.
pub const DESCRIPTION_MAX_LENGTH: u64 = 10_000;

/// Invariant violations detected while building or mutating a category.
///
/// The messages are part of the public contract and are matched verbatim by
/// consumers, including the "leats" spelling.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EntityValidationError {
    /// Name was missing, empty or whitespace-only.
    #[error("Name should not be empty or null")]
    EmptyName,
    /// Name shorter than [`NAME_MIN_LENGTH`].
    #[error("Name should be at leats 3 characters long")]
    NameTooShort,
    /// Name longer than [`NAME_MAX_LENGTH`].
    #[error("Name should be at less or equal 255 characters long")]
    NameTooLong,
    /// Description was missing.
    #[error("Description should not be null")]
    NullDescription,
    /// Description longer than [`DESCRIPTION_MAX_LENGTH`].
    #[error("Description should be at less or equal 10.000 characters long")]
    DescriptionTooLong,
    /// Identifier was the nil UUID.
    #[error("Id should not be empty")]
    NilId,
}

fn validate_name(value: String) -> Result<String, EntityValidationError> {
    if value.trim().is_empty() {
        return Err(EntityValidationError::EmptyName);
    }
    if !value.validate_length(Some(NAME_MIN_LENGTH), None, None) {
        return Err(EntityValidationError::NameTooShort);
    }
    if !value.validate_length(None, Some(NAME_MAX_LENGTH), None) {
        return Err(EntityValidationError::NameTooLong);
    }
    Ok(value)
}

fn validate_description(value: String) -> Result<String, EntityValidationError> {
    if !value.validate_length(None, Some(DESCRIPTION_MAX_LENGTH), None) {
        return Err(EntityValidationError::DescriptionTooLong);
    }
    Ok(value)
}

/// Unique identifier of a category. Never the nil UUID.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "Uuid", into = "Uuid")]
pub struct CategoryId(Uuid);

impl CategoryId {
    /// Wraps a UUID, rejecting the nil value.
    pub fn new(value: Uuid) -> Result<Self, EntityValidationError> {
        if value.is_nil() {
            Err(EntityValidationError::NilId)
        } else {
            Ok(Self(value))
        }
    }

    /// Returns the raw UUID.
    pub const fn get(self) -> Uuid {
        self.0
    }
}

impl Display for CategoryId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<Uuid> for CategoryId {
    type Error = EntityValidationError;

    fn try_from(value: Uuid) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CategoryId> for Uuid {
    fn from(value: CategoryId) -> Self {
        value.0
    }
}

/// Generates a string wrapper whose constructor runs `$validate` and whose
/// `from_optional` maps a missing value to `$missing`.
macro_rules! validated_string_newtype {
    ($name:ident, $doc:expr, $validate:path, $missing:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Validates and wraps the value.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, EntityValidationError> {
                $validate(value.into()).map(Self)
            }

            /// Same as [`Self::new`] for inputs that may be absent.
            pub fn from_optional(value: Option<String>) -> Result<Self, EntityValidationError> {
                match value {
                    Some(value) => Self::new(value),
                    None => Err($missing),
                }
            }

            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::ops::Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                self.as_str()
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl TryFrom<String> for $name {
            type Error = EntityValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = EntityValidationError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.as_str() == *other
            }
        }

        impl PartialEq<$name> for &str {
            fn eq(&self, other: &$name) -> bool {
                *self == other.as_str()
            }
        }
    };
}

validated_string_newtype!(
    CategoryName,
    "Category name of 3 to 255 characters that is not blank. Stored untrimmed.",
    validate_name,
    EntityValidationError::EmptyName
);
validated_string_newtype!(
    CategoryDescription,
    "Category description of at most 10 000 characters. May be empty.",
    validate_description,
    EntityValidationError::NullDescription
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_names() {
        for name in ["", " ", "\t\n"] {
            assert_eq!(
                CategoryName::new(name).unwrap_err(),
                EntityValidationError::EmptyName
            );
        }
        assert_eq!(
            CategoryName::from_optional(None).unwrap_err(),
            EntityValidationError::EmptyName
        );
    }

    #[test]
    fn name_length_bounds_are_inclusive() {
        assert_eq!(
            CategoryName::new("ab").unwrap_err(),
            EntityValidationError::NameTooShort
        );
        assert!(CategoryName::new("abc").is_ok());
        assert!(CategoryName::new("a".repeat(255)).is_ok());
        assert_eq!(
            CategoryName::new("a".repeat(256)).unwrap_err(),
            EntityValidationError::NameTooLong
        );
    }

    #[test]
    fn name_is_not_trimmed() {
        let name = CategoryName::new("  tea ").unwrap();
        assert_eq!(name.as_str(), "  tea ");
    }

    #[test]
    fn name_length_counts_characters_not_bytes() {
        // Three two-byte characters.
        assert!(CategoryName::new("éèê").is_ok());
        assert!(CategoryName::new("é".repeat(255)).is_ok());
    }

    #[test]
    fn description_allows_empty_and_caps_length() {
        assert_eq!(CategoryDescription::new("").unwrap(), "");
        assert!(CategoryDescription::new("a".repeat(10_000)).is_ok());
        assert_eq!(
            CategoryDescription::new("a".repeat(10_001)).unwrap_err(),
            EntityValidationError::DescriptionTooLong
        );
        assert_eq!(
            CategoryDescription::from_optional(None).unwrap_err(),
            EntityValidationError::NullDescription
        );
    }

    #[test]
    fn rejects_nil_ids() {
        assert_eq!(
            CategoryId::new(Uuid::nil()).unwrap_err(),
            EntityValidationError::NilId
        );
        let id = Uuid::new_v4();
        assert_eq!(CategoryId::new(id).unwrap().get(), id);
    }

    #[test]
    fn error_messages_match_contract() {
        assert_eq!(
            EntityValidationError::EmptyName.to_string(),
            "Name should not be empty or null"
        );
        assert_eq!(
            EntityValidationError::NameTooShort.to_string(),
            "Name should be at leats 3 characters long"
        );
        assert_eq!(
            EntityValidationError::NameTooLong.to_string(),
            "Name should be at less or equal 255 characters long"
        );
        assert_eq!(
            EntityValidationError::NullDescription.to_string(),
            "Description should not be null"
        );
        assert_eq!(
            EntityValidationError::DescriptionTooLong.to_string(),
            "Description should be at less or equal 10.000 characters long"
        );
    }
}
