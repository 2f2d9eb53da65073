//! Location suggestions returned by the lookup provider

use serde::Serialize;
use serde_json::Value;

use super::provider::LookupError;

/// One candidate location
///
/// Built only from a provider payload. The complete payload is kept in `raw`
/// and handed to the host untouched when the suggestion is picked.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestion {
    id: String,
    display_name: String,
    raw: Value,
}

impl Suggestion {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>, raw: Value) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            raw,
        }
    }

    /// Build a suggestion from one Nominatim result object
    ///
    /// Returns None when `place_id` or `display_name` is missing or has the
    /// wrong type.
    pub fn from_payload(raw: Value) -> Option<Self> {
        let id = match raw.get("place_id")? {
            Value::Number(n) => n.to_string(),
            Value::String(s) if !s.is_empty() => s.clone(),
            _ => return None,
        };
        let display_name = raw.get("display_name")?.as_str()?.to_string();

        Some(Self {
            id,
            display_name,
            raw,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// The provider payload exactly as received
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    /// Place classification such as `place/city` or `boundary/administrative`
    pub fn place_kind(&self) -> Option<String> {
        let class = self
            .raw
            .get("class")
            .or_else(|| self.raw.get("category"))?
            .as_str()?;
        match self.raw.get("type").and_then(Value::as_str) {
            Some(kind) => Some(format!("{}/{}", class, kind)),
            None => Some(class.to_string()),
        }
    }
}

/// Parse a provider response body into suggestions, keeping provider order
///
/// The body must be a JSON array. Entries that cannot be turned into a
/// suggestion are skipped.
pub fn parse_suggestions(body: &str) -> Result<Vec<Suggestion>, LookupError> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| LookupError::MalformedResponse(e.to_string()))?;

    let Value::Array(entries) = value else {
        return Err(LookupError::MalformedResponse(
            "expected a JSON array of places".to_string(),
        ));
    };

    let total = entries.len();
    let suggestions: Vec<Suggestion> = entries
        .into_iter()
        .filter_map(Suggestion::from_payload)
        .collect();

    if suggestions.len() < total {
        log::debug!(
            "Skipped {} of {} places without place_id/display_name",
            total - suggestions.len(),
            total
        );
    }

    Ok(suggestions)
}

#[cfg(test)]
#[path = "suggestion_tests.rs"]
mod suggestion_tests;
