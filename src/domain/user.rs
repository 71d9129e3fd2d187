use serde::{Deserialize, Serialize};

/// A tenant. Owns zero or more campaigns and, transitively, their leads.
///
/// Authentication lives with the external identity provider; this record only
/// anchors ownership for the foreign keys.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub name: Option<String>,
    pub email: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewUser {
    pub id: String,
    pub name: Option<String>,
    pub email: String,
}

impl NewUser {
    #[must_use]
    pub fn new(id: impl Into<String>, name: Option<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()),
            email: email.into().trim().to_lowercase(),
        }
    }
}
