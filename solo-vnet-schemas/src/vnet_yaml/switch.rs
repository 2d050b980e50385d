use serde::{Deserialize, Serialize};
use validator::Validate;

/// An OpenFlow virtual switch. Every field is required and there are no defaults, the controller
/// rejects switches that are not fully described.
#[derive(Deserialize, Serialize, Debug, Validate, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct VSwitchProperties {
    /// OpenFlow datapath ID of the virtual switch
    #[validate(length(min = 1))]
    pub datapath: String,
    #[validate(length(min = 1))]
    pub controller_ip: String,
    /// TCP port of the OpenFlow controller, kept as a string as the controller expects
    #[validate(length(min = 1))]
    pub controller_port: String,
    /// e.g. `OF_13`
    #[validate(length(min = 1))]
    pub openflow_version: String,
    #[validate(length(min = 1))]
    pub physical_device: String,
}
