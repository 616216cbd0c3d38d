use serde_json::{Value, json};

/// Multi-select filter matching pages tagged with a given sprint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SprintFilter {
    pub property: &'static str,
    pub match_value: String,
}

impl SprintFilter {
    pub const PROPERTY: &'static str = "Sprint";

    /// Filter for the tag `Sprint {number}`.
    pub fn sprint(number: u32) -> Self {
        Self {
            property: Self::PROPERTY,
            match_value: format!("Sprint {number}"),
        }
    }

    /// Body for a database query restricted to this sprint.
    pub fn to_query_body(&self) -> Value {
        json!({
            "filter": {
                "property": self.property,
                "multi_select": { "contains": self.match_value }
            }
        })
    }
}
