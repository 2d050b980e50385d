pub mod cli_models;
pub mod property_schema;
pub mod settings;
pub mod vnet_yaml;

/// Resource type name the templates refer to
pub const RESOURCE_TYPE: &str = "RNP::SOLO::VirtualNetwork";
