//! Status of the stack as reported by the runtime's JSON listings.

use crate::errors::{PodError, PodResult};
use serde::{Deserialize, Serialize};

/// One row of `pod ps --format json`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PodRow {
    #[serde(rename = "Id", default)]
    pub id: String,
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "Status", default)]
    pub status: String,
}

/// One row of `ps --all --format json`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ContainerRow {
    #[serde(rename = "Names", default)]
    pub names: Vec<String>,
    #[serde(rename = "Image", default)]
    pub image: String,
    #[serde(rename = "State", default)]
    pub state: String,
    #[serde(rename = "Status", default)]
    pub status: String,
}

impl ContainerRow {
    /// First name the runtime lists for the container.
    pub fn name(&self) -> &str {
        self.names.first().map(String::as_str).unwrap_or("")
    }
}

/// Combined view of the pod and its containers. Read-only; nothing is
/// derived or cached beyond what the runtime reported.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct StackStatus {
    pub pod: Option<PodRow>,
    pub containers: Vec<ContainerRow>,
}

pub(crate) fn parse_pod_rows(json: &str) -> PodResult<Vec<PodRow>> {
    parse_rows(json).map_err(|e| PodError::Status(format!("pod listing: {e}")))
}

pub(crate) fn parse_container_rows(json: &str) -> PodResult<Vec<ContainerRow>> {
    parse_rows(json).map_err(|e| PodError::Status(format!("container listing: {e}")))
}

// Older podman prints nothing at all for an empty listing.
fn parse_rows<T: serde::de::DeserializeOwned>(json: &str) -> serde_json::Result<Vec<T>> {
    if json.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(json)
}
