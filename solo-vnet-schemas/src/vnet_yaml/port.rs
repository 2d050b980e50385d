use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Deserialize, Serialize, Debug, Validate, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct VPortProperties {
    #[validate(length(min = 1))]
    pub datapath: String,
    #[validate(length(min = 1))]
    pub virtual_port_number: String,
    #[validate(length(min = 1))]
    pub physical_port_name: String,
    /// Binding type between the virtual and the physical port
    #[validate(length(min = 1))]
    pub binding_type: String,
    /// Only used by the VLAN binding type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1))]
    pub vlan: Option<String>,
}
