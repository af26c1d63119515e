use super::Field;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Ordered list of requested fields.
///
/// The position of a field in the list is its column index in every result row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Field>", into = "Vec<Field>")]
pub struct FieldMapping {
    fields: Vec<Field>,
}

impl Default for FieldMapping {
    fn default() -> Self {
        Self {
            fields: Field::DEFAULTS.to_vec(),
        }
    }
}

impl FieldMapping {
    /// Build a mapping from fields in column order.
    ///
    /// Empty names are dropped; a list left empty falls back to the default
    /// column set.
    pub fn new<I, F>(fields: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<Field>,
    {
        let fields: Vec<Field> = fields
            .into_iter()
            .map(Into::into)
            .filter(|field| !field.as_str().is_empty())
            .collect();
        if fields.is_empty() {
            Self::default()
        } else {
            Self { fields }
        }
    }

    /// Parse a comma-joined field list such as `"ip, domain"`.
    ///
    /// Blank input yields the default mapping.
    #[must_use]
    pub fn parse(list: &str) -> Self {
        if list.trim().is_empty() {
            return Self::default();
        }
        Self::new(list.split(',').map(Field::from))
    }

    /// Fields in column order
    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Number of columns
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Always false; [`FieldMapping::new`] never leaves a mapping without fields
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns true if each row carries a single bare value
    #[must_use]
    pub fn is_single(&self) -> bool {
        self.fields.len() == 1
    }

    /// Column index of `field`, if requested
    #[must_use]
    pub fn index_of(&self, field: &Field) -> Option<usize> {
        self.fields.iter().position(|f| f == field)
    }

    /// Comma-joined form for the `fields` query parameter
    #[must_use]
    pub fn to_query_value(&self) -> String {
        self.fields
            .iter()
            .map(Field::as_str)
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl FromStr for FieldMapping {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl std::fmt::Display for FieldMapping {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_query_value())
    }
}

impl From<&str> for FieldMapping {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<Vec<Field>> for FieldMapping {
    fn from(fields: Vec<Field>) -> Self {
        Self::new(fields)
    }
}

impl From<FieldMapping> for Vec<Field> {
    fn from(mapping: FieldMapping) -> Self {
        mapping.fields
    }
}
