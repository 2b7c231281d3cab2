use serde::{Deserialize, Serialize};

/// Lifecycle of a feed fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum RequestStatus {
    #[default]
    Idle,
    Pending,
    Successful,
    Failed,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Idle => "Idle",
            RequestStatus::Pending => "Pending",
            RequestStatus::Successful => "Successful",
            RequestStatus::Failed => "Failed",
        }
    }
}
