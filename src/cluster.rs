//! Cluster creation form state.
//!
//! The landing page collects three values: topology, name, and node
//! count. The draft lives in memory only; submitting serializes it and
//! records it to the console log. Nothing is sent anywhere and nothing is
//! reset afterwards.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::utils::error::AppError;

/// Topology of the requested cluster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClusterType {
    Standalone,
    ReplicaSet,
    Sharded,
}

impl ClusterType {
    pub const ALL: [ClusterType; 3] = [
        ClusterType::Standalone,
        ClusterType::ReplicaSet,
        ClusterType::Sharded,
    ];

    /// Stable value used in the select control and the submit record.
    pub fn value(&self) -> &'static str {
        match self {
            ClusterType::Standalone => "standalone",
            ClusterType::ReplicaSet => "replicaset",
            ClusterType::Sharded => "sharded",
        }
    }

    /// Human-readable option label.
    pub fn label(&self) -> &'static str {
        match self {
            ClusterType::Standalone => "Standalone",
            ClusterType::ReplicaSet => "Replica Set",
            ClusterType::Sharded => "Sharded Cluster",
        }
    }
}

impl FromStr for ClusterType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ClusterType::ALL
            .into_iter()
            .find(|ct| ct.value() == s)
            .ok_or_else(|| AppError::UnrecognizedValue(s.to_string()))
    }
}

impl fmt::Display for ClusterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

/// Number of nodes offered by the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(into = "u8")]
pub enum NodeCount {
    One = 1,
    Three = 3,
    Five = 5,
    Seven = 7,
}

impl NodeCount {
    pub const ALL: [NodeCount; 4] = [
        NodeCount::One,
        NodeCount::Three,
        NodeCount::Five,
        NodeCount::Seven,
    ];

    pub fn as_u8(&self) -> u8 {
        *self as u8
    }

    pub fn label(&self) -> &'static str {
        match self {
            NodeCount::One => "1 node",
            NodeCount::Three => "3 nodes",
            NodeCount::Five => "5 nodes",
            NodeCount::Seven => "7 nodes",
        }
    }
}

impl From<NodeCount> for u8 {
    fn from(count: NodeCount) -> Self {
        count.as_u8()
    }
}

impl FromStr for NodeCount {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NodeCount::ALL
            .into_iter()
            .find(|count| count.as_u8().to_string() == s)
            .ok_or_else(|| AppError::UnrecognizedValue(s.to_string()))
    }
}

impl fmt::Display for NodeCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

/// In-memory draft of the creation form. `None` and the empty string model
/// fields the visitor has not filled in yet.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClusterDraft {
    cluster_type: Option<ClusterType>,
    name: String,
    node_count: Option<NodeCount>,
}

impl ClusterDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cluster_type(&self) -> Option<ClusterType> {
        self.cluster_type
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn node_count(&self) -> Option<NodeCount> {
        self.node_count
    }

    pub fn set_cluster_type(&mut self, cluster_type: Option<ClusterType>) {
        self.cluster_type = cluster_type;
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_node_count(&mut self, node_count: Option<NodeCount>) {
        self.node_count = node_count;
    }

    /// The submit control is enabled iff every field is filled in.
    pub fn is_complete(&self) -> bool {
        self.request().is_some()
    }

    /// Snapshot of a completed draft, `None` while any field is unset.
    pub fn request(&self) -> Option<ClusterRequest<'_>> {
        match (self.cluster_type, self.node_count) {
            (Some(cluster_type), Some(node_count)) if !self.name.is_empty() => {
                Some(ClusterRequest {
                    cluster_type,
                    name: &self.name,
                    node_count,
                })
            }
            _ => None,
        }
    }

    /// Terminal action of the form: record the draft to the console log.
    /// No request leaves the page and the draft is left untouched.
    pub fn submit(&self) {
        match self.request() {
            Some(request) => match serde_json::to_string(&request) {
                Ok(json) => log::info!("creating cluster: {json}"),
                Err(err) => log::error!("failed to encode cluster request: {err}"),
            },
            None => log::warn!("ignoring submit on incomplete cluster draft"),
        }
    }
}

/// Completed draft shaped like the payload a provisioning API would take.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ClusterRequest<'a> {
    #[serde(rename = "type")]
    pub cluster_type: ClusterType,
    pub name: &'a str,
    pub node_count: NodeCount,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_values_parse() {
        assert_eq!("standalone".parse(), Ok(ClusterType::Standalone));
        assert_eq!("replicaset".parse(), Ok(ClusterType::ReplicaSet));
        assert_eq!("sharded".parse(), Ok(ClusterType::Sharded));
        assert!("".parse::<ClusterType>().is_err());
        assert!("Sharded".parse::<ClusterType>().is_err());

        assert_eq!("1".parse(), Ok(NodeCount::One));
        assert_eq!("7".parse(), Ok(NodeCount::Seven));
        assert!("".parse::<NodeCount>().is_err());
        assert!("2".parse::<NodeCount>().is_err());
    }

    #[test]
    fn test_submit_enabled_requires_every_field() {
        for with_type in [false, true] {
            for with_name in [false, true] {
                for with_count in [false, true] {
                    let mut draft = ClusterDraft::new();
                    if with_type {
                        draft.set_cluster_type(Some(ClusterType::ReplicaSet));
                    }
                    if with_name {
                        draft.set_name("my-cluster");
                    }
                    if with_count {
                        draft.set_node_count(Some(NodeCount::Three));
                    }
                    assert_eq!(
                        draft.is_complete(),
                        with_type && with_name && with_count,
                        "type={with_type} name={with_name} count={with_count}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_filling_the_missing_field_enables_submit() {
        let mut draft = ClusterDraft::new();
        draft.set_cluster_type(Some(ClusterType::ReplicaSet));
        draft.set_node_count(Some(NodeCount::Three));
        assert!(!draft.is_complete());

        draft.set_name("my-cluster");
        assert!(draft.is_complete());
    }

    #[test]
    fn test_fields_update_independently() {
        let mut draft = ClusterDraft::new();
        draft.set_node_count(Some(NodeCount::Five));
        assert_eq!(draft.cluster_type(), None);
        assert_eq!(draft.name(), "");
        assert_eq!(draft.node_count(), Some(NodeCount::Five));

        draft.set_name("analytics");
        draft.set_node_count(None);
        assert_eq!(draft.name(), "analytics");
        assert_eq!(draft.node_count(), None);
    }

    #[test]
    fn test_completed_request_serializes() {
        let mut draft = ClusterDraft::new();
        draft.set_cluster_type(Some(ClusterType::ReplicaSet));
        draft.set_name("my-cluster");
        draft.set_node_count(Some(NodeCount::Three));

        let json = serde_json::to_string(&draft.request().unwrap()).unwrap();
        assert_eq!(
            json,
            r#"{"type":"replicaset","name":"my-cluster","node_count":3}"#
        );
    }

    #[test]
    fn test_incomplete_draft_has_no_request() {
        let mut draft = ClusterDraft::new();
        draft.set_cluster_type(Some(ClusterType::Sharded));
        draft.set_node_count(Some(NodeCount::Seven));
        assert_eq!(draft.request(), None);
    }

    #[test]
    fn test_submit_leaves_draft_untouched() {
        let mut draft = ClusterDraft::new();
        draft.set_cluster_type(Some(ClusterType::ReplicaSet));
        draft.set_name("my-cluster");
        draft.set_node_count(Some(NodeCount::Three));

        let before = draft.clone();
        draft.submit();
        assert_eq!(draft, before);

        // Submitting an incomplete draft is a no-op as well.
        let incomplete = ClusterDraft::new();
        incomplete.submit();
        assert_eq!(incomplete, ClusterDraft::new());
    }
}
