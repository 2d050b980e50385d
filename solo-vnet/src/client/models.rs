use std::fmt;
use std::fmt::Formatter;
use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Terminal state reported by the controller once every entity of a network is provisioned
pub const STATE_CREATED: &str = "CREATED";

/// Body of `GET .../vnet/state/network/{name}`
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct VNetState {
    #[serde(rename = "State")]
    pub state: String,
}

impl VNetState {
    pub fn is_created(&self) -> bool {
        self.state == STATE_CREATED
    }
}

/// Body of `GET .../vnet`, only the fields needed to resolve names and ids are kept
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct VNetList {
    #[serde(rename = "vNets", default)]
    pub vnets: Vec<VNetSummary>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct VNetSummary {
    #[serde(rename = "vNetworkName")]
    pub name: String,
    #[serde(rename = "vNetworkId", default)]
    pub id: Option<VNetId>,
}

/// The controller may hand out numeric or textual ids. Two ids are equal when they print the
/// same, so an id typed on the command line matches a numeric one from the controller.
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(untagged)]
pub enum VNetId {
    Number(Number),
    Text(String),
}

impl fmt::Display for VNetId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            VNetId::Number(n) => write!(f, "{n}"),
            VNetId::Text(s) => f.write_str(s),
        }
    }
}

impl PartialEq for VNetId {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}

impl Eq for VNetId {}

impl From<String> for VNetId {
    fn from(value: String) -> Self {
        VNetId::Text(value)
    }
}

impl From<&str> for VNetId {
    fn from(value: &str) -> Self {
        VNetId::Text(value.to_string())
    }
}

impl VNetSummary {
    pub fn new(name: &str, id: Option<VNetId>) -> Self {
        Self { name: name.to_string(), id }
    }
}

impl VNetList {
    pub fn find_by_name(&self, network_name: &str) -> Option<&VNetSummary> {
        self.vnets.iter().find(|vnet| vnet.name == network_name)
    }

    pub fn find_by_id(&self, network_id: &VNetId) -> Option<&VNetSummary> {
        self.vnets.iter().find(|vnet| vnet.id.as_ref() == Some(network_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_created() {
        let state: VNetState = serde_json::from_str(r#"{"State": "CREATED"}"#).unwrap();
        assert!(state.is_created());
        let state: VNetState = serde_json::from_str(r#"{"State": "PENDING", "extra": 1}"#).unwrap();
        assert!(!state.is_created());
    }

    #[test]
    fn test_list_lookup_mixed_ids() {
        let list: VNetList = serde_json::from_str(
            r#"{"vNets": [
                {"vNetworkName": "vnet1", "vNetworkId": 7},
                {"vNetworkName": "vnet2", "vNetworkId": "b-2"},
                {"vNetworkName": "vnet3"}
            ]}"#,
        ).unwrap();
        assert_eq!(list.find_by_name("vnet1").unwrap().id, Some(VNetId::Number(7u64.into())));
        assert_eq!(list.find_by_id(&VNetId::from("7")).unwrap().name, "vnet1");
        assert_eq!(list.find_by_id(&VNetId::from("b-2")).unwrap().name, "vnet2");
        assert_eq!(list.find_by_name("vnet3").unwrap().id, None);
        assert!(list.find_by_name("vnet4").is_none());
    }

    #[test]
    fn test_list_any_numeric_id() {
        let list: VNetList = serde_json::from_str(
            r#"{"vNets": [
                {"vNetworkName": "a", "vNetworkId": -1},
                {"vNetworkName": "b", "vNetworkId": 2.5},
                {"vNetworkName": "vnet1", "vNetworkId": 7}
            ]}"#,
        ).unwrap();
        assert_eq!(list.find_by_name("vnet1").unwrap().id, Some(VNetId::from("7")));
        assert_eq!(list.find_by_id(&VNetId::from("-1")).unwrap().name, "a");
        assert_eq!(list.find_by_id(&VNetId::from("2.5")).unwrap().name, "b");
    }
}
