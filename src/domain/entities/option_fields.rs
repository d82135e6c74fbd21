use serde::{Deserialize, Deserializer};

/// Tri-state field for partial updates.
///
/// - `Unchanged` → key absent from the request body
/// - `SetToNull` → key present with an explicit `null`
/// - `SetToValue` → key present with a value
///
/// Containers must mark these fields `#[serde(default)]` so an absent key
/// falls back to `Unchanged`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum OptionField<T> {
    #[default]
    Unchanged,
    SetToNull,
    SetToValue(T),
}

impl<'de, T> Deserialize<'de> for OptionField<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(value) => OptionField::SetToValue(value),
            None => OptionField::SetToNull,
        })
    }
}

impl<T> OptionField<T> {
    pub fn is_unchanged(&self) -> bool {
        matches!(self, Self::Unchanged)
    }

    pub fn is_set_to_null(&self) -> bool {
        matches!(self, Self::SetToNull)
    }

    /// Nested view used when binding a column:
    /// - `None` → leave the column alone
    /// - `Some(None)` → write NULL
    /// - `Some(Some(&T))` → write the value
    pub fn as_ref_option(&self) -> Option<Option<&T>> {
        match self {
            Self::Unchanged => None,
            Self::SetToNull => Some(None),
            Self::SetToValue(value) => Some(Some(value)),
        }
    }

    pub fn value_ref(&self) -> Option<&T> {
        if let Self::SetToValue(v) = self {
            Some(v)
        } else {
            None
        }
    }
}
