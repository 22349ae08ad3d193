// src/entity/course.rs
use serde::{Deserialize, Serialize};

/// A course as the backend reports it. Read-only on the client side; only
/// used to label and filter notes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub name: String,
}

impl Course {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
