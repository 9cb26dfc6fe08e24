use serde::{Deserialize, Serialize};

/// Doctor directory entry, keyed by email
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Doctor {
    /// Unique key
    pub email: String,

    pub name: String,

    pub specialty: String,

    /// Portrait for the public site
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}
