use std::collections::BTreeMap;
use strum_macros::Display;
use solo_vnet_schemas::vnet_yaml::VirtualNetworkProperties;
use solo_vnet_schemas::RESOURCE_TYPE;
use crate::resource::virtual_network::VirtualNetwork;
use crate::SoloError;

pub mod virtual_network;

/// The plugin contract the orchestration engine drives. The engine calls a `handle_*` hook once
/// and then polls the matching `check_*_complete` hook with the handle it returned, so none of
/// these block beyond a single controller request.
pub trait Resource {
    fn resource_type(&self) -> &'static str;

    fn support_status(&self) -> SupportStatus;

    fn resource_id(&self) -> Option<&str>;

    fn resource_id_set(&mut self, resource_id: Option<String>);

    fn handle_create(&mut self) -> Result<String, SoloError>;

    fn check_create_complete(&self, handle: &str) -> Result<bool, SoloError>;

    /// `Ok(None)` when there was nothing to delete
    fn handle_delete(&mut self) -> Result<Option<String>, SoloError>;

    fn check_delete_complete(&self, handle: &str) -> Result<bool, SoloError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum SupportLevel {
    Supported,
    Unsupported,
    Deprecated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SupportStatus {
    pub level: SupportLevel,
    pub message: Option<&'static str>,
}

pub type ResourceConstructor = fn(VirtualNetworkProperties) -> Result<Box<dyn Resource>, SoloError>;

fn new_virtual_network(properties: VirtualNetworkProperties) -> Result<Box<dyn Resource>, SoloError> {
    Ok(Box::new(VirtualNetwork::new(properties)?))
}

/// Resource types provided by this plugin
pub fn resource_mapping() -> BTreeMap<&'static str, ResourceConstructor> {
    let mut mapping: BTreeMap<&'static str, ResourceConstructor> = BTreeMap::new();
    mapping.insert(RESOURCE_TYPE, new_virtual_network);
    mapping
}
