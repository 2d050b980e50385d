pub mod host;
pub mod link;
pub mod port;
pub mod switch;

use crate::vnet_yaml::host::VHostProperties;
use crate::vnet_yaml::link::VLinkProperties;
use crate::vnet_yaml::port::VPortProperties;
use crate::vnet_yaml::switch::VSwitchProperties;
use crate::RESOURCE_TYPE;
use anyhow::{bail, Context};
use serde::{Deserialize, Deserializer, Serialize};
use serde_yaml::Value;
use std::fmt;
use std::fmt::Formatter;
use std::path::Path;
use validator::Validate;

/// A single resource definition as written in a template:
///
/// ```yaml
/// type: RNP::SOLO::VirtualNetwork
/// properties:
///   rest_address: http://172.25.0.2:8181
///   network_name: vnet1
///   switches: [...]
/// ```
#[derive(Deserialize, Serialize, Debug, Validate, Clone)]
#[serde(deny_unknown_fields)]
pub struct ResourceTemplate {
    #[serde(rename = "type")]
    pub resource_type: String,
    #[validate]
    pub properties: VirtualNetworkProperties,
}

impl ResourceTemplate {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        tracing::trace!("reading template from {:?}", path);
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Reading template file {}", path.display()))?;
        string_to_template(&text)
    }
}

/// The property tree of a `RNP::SOLO::VirtualNetwork`. The four entity lists are optional in the
/// template and treated as empty when left out or set to null.
#[derive(Deserialize, Serialize, Debug, Validate, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct VirtualNetworkProperties {
    /// REST API address of the overlay controller, e.g. `http://172.25.0.2:8181`
    #[validate(url)]
    pub rest_address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1))]
    pub rest_user: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rest_password: Option<String>,
    #[validate(length(min = 1))]
    pub network_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate]
    pub switches: Vec<VSwitchProperties>,
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate]
    pub ports: Vec<VPortProperties>,
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate]
    pub links: Vec<VLinkProperties>,
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate]
    pub hosts: Vec<VHostProperties>,
}

impl VirtualNetworkProperties {
    /// Properties for a network with no entities yet, mostly useful for building trees in code
    pub fn new(rest_address: impl Into<String>, network_name: impl Into<String>) -> Self {
        Self {
            rest_address: rest_address.into(),
            rest_user: None,
            rest_password: None,
            network_name: network_name.into(),
            switches: vec![],
            ports: vec![],
            links: vec![],
            hosts: vec![],
        }
    }
}

// the password is left out so properties can be logged
impl fmt::Display for VirtualNetworkProperties {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut redacted = self.clone();
        if redacted.rest_password.is_some() {
            redacted.rest_password = Some("********".to_string());
        }
        let text = serde_json::to_string_pretty(&redacted).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Parse and validate a template. The raw structure is checked first so that a template for some
/// other resource type is reported as such, rather than as a list of unknown properties.
pub fn string_to_template(body: &str) -> anyhow::Result<ResourceTemplate> {
    let yaml_value: Value = serde_yaml::from_str(body).with_context(|| "Parsing raw YAML")?;
    validate_resource_type(&yaml_value)?;

    let value: ResourceTemplate =
        serde_yaml::from_str(body).with_context(|| "Parsing VirtualNetwork template")?;
    value
        .validate()
        .with_context(|| "Validating VirtualNetwork properties")?;
    Ok(value)
}

fn validate_resource_type(yaml_value: &Value) -> anyhow::Result<()> {
    let Value::Mapping(mapping) = yaml_value else {
        bail!("template must be a mapping with `type` and `properties` keys");
    };
    match mapping.get(&Value::String("type".to_string())) {
        Some(Value::String(resource_type)) if resource_type == RESOURCE_TYPE => {}
        Some(Value::String(resource_type)) => {
            bail!("unsupported resource type {resource_type}, expected {RESOURCE_TYPE}")
        }
        Some(_) => bail!("resource type must be a string"),
        None => bail!("template is missing the resource `type`"),
    }
    match mapping.get(&Value::String("properties".to_string())) {
        Some(Value::Mapping(_)) => Ok(()),
        Some(_) => bail!("resource `properties` must be a mapping"),
        None => bail!("template is missing the resource `properties`"),
    }
}
