use serde::{Deserialize, Serialize};

/// One portfolio project as the frontend consumes it. Field names stay
/// camelCase on the wire to match the existing project-grid contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub id: String,
    pub title: String,
    pub tagline: String,
    pub category: String,
    pub year: String,
    pub technologies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    pub image: String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub has_chat: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}
