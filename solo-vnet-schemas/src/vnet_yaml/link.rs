use serde::{Deserialize, Serialize};
use validator::Validate;

/// A link between two virtual switches. The source and destination ends are described by their
/// datapath, virtual port number and the physical port carrying the link.
#[derive(Deserialize, Serialize, Debug, Validate, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct VLinkProperties {
    #[validate(length(min = 1))]
    pub datapath_src: String,
    #[validate(length(min = 1))]
    pub datapath_dst: String,
    #[validate(length(min = 1))]
    pub virtual_port_number_src: String,
    #[validate(length(min = 1))]
    pub virtual_port_number_dst: String,
    #[validate(length(min = 1))]
    pub physical_port_name_src: String,
    #[validate(length(min = 1))]
    pub physical_port_name_dst: String,
    #[validate(length(min = 1))]
    pub link_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1))]
    pub vlan: Option<String>,
    /// Bandwidth reservation, only meaningful for the NSI link type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1))]
    pub nsi_bandwidth: Option<String>,
}
