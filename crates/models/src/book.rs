use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// A catalog entry as the gateway exposes it. Public JSON uses camelCase for
/// the owner field, matching what the composed frontend expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRecord {
    pub id: i64,
    pub title: String,
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
    #[serde(rename = "userId")]
    pub user_id: i64,
}

/// Create/update payload accepted on the public surface. Fields are optional
/// at the serde level so validation can report what is missing instead of a
/// bare deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBook {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub isbn: Option<String>,
    #[serde(default)]
    pub user_id: Option<i64>,
}

impl NewBook {
    /// Title, author and owning user are required; isbn is not.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.title.trim().is_empty() || self.author.trim().is_empty() || self.user_id.is_none()
        {
            return Err(ModelError::Validation(
                "title, author, and userId are required".into(),
            ));
        }
        Ok(())
    }
}
