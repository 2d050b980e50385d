use serde::{Deserialize, Serialize};
use validator::Validate;

/// A virtual host attached to a switch port. Unlike ports and links, the vlan is required here.
#[derive(Deserialize, Serialize, Debug, Validate, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct VHostProperties {
    #[validate(length(min = 1))]
    pub hostname: String,
    #[validate(length(min = 1))]
    pub endpoint_name: String,
    #[validate(length(min = 1))]
    pub template_name: String,
    #[validate(length(min = 1))]
    pub datapath: String,
    #[validate(length(min = 1))]
    pub virtual_port_number: String,
    #[validate(length(min = 1))]
    pub vlan: String,
    #[validate(length(min = 1))]
    pub dataplane_ip: String,
    #[validate(length(min = 1))]
    pub dataplane_subnet: String,
    #[validate(length(min = 1))]
    pub dataplane_gateway: String,
}
