use serde_json::Value;

use super::Document;

/// A conjunction of field-equality conditions.
///
/// The empty filter matches every document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    clauses: Vec<(String, Value)>,
}

impl Filter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::all().and(field, value)
    }

    pub fn and(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.clauses.push((field.into(), value.into()));
        self
    }

    pub fn matches(&self, doc: &Document) -> bool {
        self.clauses
            .iter()
            .all(|(field, value)| doc.get(field) == Some(value))
    }

    /// Same conditions as a plain JSON object, e.g. `{"userID": "u1"}`.
    pub fn to_document(&self) -> Document {
        self.clauses.iter().cloned().collect()
    }
}

impl std::fmt::Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Value::Object(self.to_document()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: Value) -> Document {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected an object"),
        }
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        assert!(Filter::all().matches(&doc(json!({ "userID": "u1" }))));
        assert!(Filter::all().matches(&Document::new()));
    }

    #[test]
    fn test_equality_requires_every_clause() {
        let filter = Filter::eq("userID", "u1").and("completed", false);
        assert!(filter.matches(&doc(json!({ "userID": "u1", "completed": false }))));
        assert!(!filter.matches(&doc(json!({ "userID": "u1", "completed": true }))));
        assert!(!filter.matches(&doc(json!({ "userID": "u2", "completed": false }))));
    }

    #[test]
    fn test_missing_field_does_not_match() {
        let filter = Filter::eq("id", "t1");
        assert!(!filter.matches(&doc(json!({ "userID": "u1" }))));
    }

    #[test]
    fn test_display_renders_json() {
        assert_eq!(Filter::eq("userID", "u1").to_string(), r#"{"userID":"u1"}"#);
    }
}
