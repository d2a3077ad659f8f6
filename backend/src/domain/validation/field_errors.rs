//! Field-keyed validation results.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use serde_json::Value;

/// Form field a validation message belongs to.
///
/// The serialised names form a fixed vocabulary shared with the UI layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Field {
    #[serde(rename = "email")]
    Email,
    #[serde(rename = "password")]
    Password,
    #[serde(rename = "nombre")]
    GivenName,
    #[serde(rename = "apellido")]
    FamilyName,
    #[serde(rename = "fechaNacimiento")]
    BirthDate,
    #[serde(rename = "sexo")]
    Sex,
    #[serde(rename = "terminos")]
    Terms,
}

impl Field {
    /// Every field, in form order.
    pub const ALL: [Self; 7] = [
        Self::Email,
        Self::Password,
        Self::GivenName,
        Self::FamilyName,
        Self::BirthDate,
        Self::Sex,
        Self::Terms,
    ];

    /// Stable key used by the UI layer.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Password => "password",
            Self::GivenName => "nombre",
            Self::FamilyName => "apellido",
            Self::BirthDate => "fechaNacimiento",
            Self::Sex => "sexo",
            Self::Terms => "terminos",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field-name to message mapping of validation violations.
///
/// ## Invariants
/// - At most one message per field.
/// - An empty mapping means the input is fully valid.
///
/// # Examples
/// ```
/// use sanjibook::domain::validation::{Field, FieldErrors};
///
/// let mut errors = FieldErrors::new();
/// assert!(errors.is_empty());
/// errors.insert(Field::Sex, "required");
/// assert_eq!(errors.get(Field::Sex), Some("required"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `message` for `field`, replacing any earlier message.
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    /// Message recorded for `field`, if any.
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    /// Return `true` when `field` has a violation.
    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    /// Return `true` when no field has a violation.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of fields with violations.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate violations in field order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    /// `Ok(())` when empty, otherwise the mapping itself as the error.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }

    /// JSON object suitable for [`crate::domain::Error::with_details`].
    pub fn to_details(&self) -> Value {
        Value::Object(
            self.iter()
                .map(|(field, message)| (field.as_str().to_owned(), Value::from(message)))
                .collect(),
        )
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}
