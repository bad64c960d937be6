use serde::{Deserialize, Serialize};

#[derive(Deserialize, Debug)]
pub struct StatusQuery {
    #[serde(default)]
    pub monitor: Option<String>,
}

/// Body shape for every non-payload response (errors, not-found, health).
#[derive(Serialize, Debug, Clone)]
pub struct MessageResponse {
    pub message: String,
}
