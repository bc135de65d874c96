use serde::{Deserialize, Serialize};

/// One chosen option of a single/multiple select field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub id: i64,
    pub label: String,
    pub color: String,
}

impl SelectOption {
    pub fn new(id: i64, label: &str, color: &str) -> Self {
        Self {
            id,
            label: label.to_string(),
            color: color.to_string(),
        }
    }
}
