//! Ordered request parameters.
//!
//! Endpoint methods build a [`Params`] with every field they know about,
//! including unset ones. Unset entries are stripped by [`Params::compact`]
//! right before encoding.

use crate::error::BitstampError;

/// An ordered mapping of parameter names to optional values.
///
/// Insertion order is kept. Inserting an existing name replaces its value
/// in place, which is how caller parameters override the generated
/// authentication fields on private calls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    entries: Vec<(String, Option<String>)>,
}

impl Params {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter, builder style.
    pub fn with(mut self, name: impl Into<String>, value: Option<impl ToString>) -> Self {
        self.insert(name, value);
        self
    }

    /// Insert or replace a parameter.
    pub fn insert(&mut self, name: impl Into<String>, value: Option<impl ToString>) {
        let name = name.into();
        let value = value.map(|v| v.to_string());
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Merge `other` on top of `self`; entries of `other` win on collision.
    ///
    /// Unset values override too, so an unset entry in `other` removes the
    /// value once the result is compacted.
    pub fn merge(mut self, other: Params) -> Self {
        for (name, value) in other.entries {
            self.insert(name, value);
        }
        self
    }

    /// Get the value of a parameter, if present and set.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .and_then(|(_, value)| value.as_deref())
    }

    /// Drop every entry whose value is unset.
    pub fn compact(mut self) -> Self {
        self.entries.retain(|(_, value)| value.is_some());
        self
    }

    /// Compact and form-encode the parameters.
    pub fn encode(self) -> Result<String, BitstampError> {
        let pairs: Vec<(String, String)> = self
            .compact()
            .entries
            .into_iter()
            .filter_map(|(name, value)| value.map(|v| (name, v)))
            .collect();
        Ok(serde_urlencoded::to_string(pairs)?)
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (name, value) in iter {
            params.insert(name, Some(value));
        }
        params
    }
}
