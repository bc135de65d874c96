use serde::{Deserialize, Serialize};

/// One referenced row of a link-row field, reduced to its display text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkedRow {
    pub display_value: String,
}

impl LinkedRow {
    pub fn new(display_value: &str) -> Self {
        Self {
            display_value: display_value.to_string(),
        }
    }
}
