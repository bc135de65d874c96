use serde::{Deserialize, Serialize};

/// One attachment of a file field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRef {
    pub name: String,
    pub is_image: bool,
}

impl FileRef {
    pub fn new(name: &str, is_image: bool) -> Self {
        Self {
            name: name.to_string(),
            is_image,
        }
    }
}
