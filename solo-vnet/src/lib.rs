use std::path::Path;
use anyhow::Context;
use solo_vnet_schemas::settings::SoloSettings;
use solo_vnet_schemas::vnet_yaml::ResourceTemplate;

pub mod client;
pub mod document;
pub mod lifecycle;
pub mod resource;
mod error;

pub use error::SoloError;

/// Load a VirtualNetwork template and complete it with the local settings. Everything that can be
/// checked without the controller is checked here.
pub fn parse_template<P: AsRef<Path>>(
    path: P,
    settings: &SoloSettings,
) -> anyhow::Result<ResourceTemplate> {
    let mut template = ResourceTemplate::load_from_file(path)
        .context("loading VirtualNetwork template")?;
    settings.fill_credentials(&mut template.properties);
    tracing::trace!("template properties: {}", &template.properties);
    Ok(template)
}
