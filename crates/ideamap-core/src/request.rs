use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::style::StyleConfig;

/// Everything one render needs, captured as a single immutable value.
///
/// The original tool rebuilt all of this from ambient widget state on every
/// interaction; hosts here construct a request explicitly (directly or from
/// JSON) and hand it to the pipeline.
///
/// Subtopic insertion order is preserved and only affects visual placement,
/// never correctness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapRequest {
    pub central_topic: String,
    #[serde(default)]
    pub subtopics: IndexMap<String, Vec<String>>,
    #[serde(default)]
    pub style: StyleConfig,
}

impl MapRequest {
    pub fn new(central_topic: impl Into<String>) -> Self {
        Self {
            central_topic: central_topic.into(),
            subtopics: IndexMap::new(),
            style: StyleConfig::default(),
        }
    }

    /// Appends a subtopic with its details, replacing the detail list if the
    /// subtopic label was already present.
    pub fn with_subtopic<I, S>(mut self, label: impl Into<String>, details: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.subtopics.insert(
            label.into(),
            details.into_iter().map(Into::into).collect(),
        );
        self
    }

    pub fn with_style(mut self, style: StyleConfig) -> Self {
        self.style = style;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::LayoutStyle;

    #[test]
    fn request_roundtrips_through_json() {
        let request = MapRequest::new("Project X")
            .with_subtopic("Design", ["UI", "API"])
            .with_subtopic("Testing", ["Unit", "Integration"]);
        let json = serde_json::to_string(&request).unwrap();
        let back: MapRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, request);
        // IndexMap keeps the declared subtopic order through serde.
        let order: Vec<&str> = back.subtopics.keys().map(String::as_str).collect();
        assert_eq!(order, ["Design", "Testing"]);
    }

    #[test]
    fn minimal_json_uses_defaults() {
        let request: MapRequest =
            serde_json::from_str(r#"{ "central_topic": "Central Idea" }"#).unwrap();
        assert!(request.subtopics.is_empty());
        assert_eq!(request.style.layout, LayoutStyle::Spring);
    }
}
