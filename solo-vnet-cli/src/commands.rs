use anyhow::{bail, Context};
use solo_vnet_lib::client::models::VNetId;
use solo_vnet_lib::client::{OverlayApi, SoloClient};
use solo_vnet_lib::document::VNetDocument;
use solo_vnet_lib::lifecycle::{create_and_wait, delete_and_wait, PollPolicy};
use solo_vnet_lib::parse_template;
use solo_vnet_lib::resource::{resource_mapping, Resource, SupportLevel};
use solo_vnet_schemas::cli_models::{LookupCmd, Opts, SubCommand};
use solo_vnet_schemas::property_schema::properties_schema;
use solo_vnet_schemas::settings::SoloSettings;
use solo_vnet_schemas::vnet_yaml::{ResourceTemplate, VirtualNetworkProperties};

/// This is the entrypoint for all commands. Only `schema` runs without a template, everything
/// else loads and validates the template before any request goes to the controller.
pub fn parse_command(opts: Opts) -> anyhow::Result<()> {
    let cmd_name = opts.sub_command.name();
    tracing::debug!("running {cmd_name} command");

    let load = || -> anyhow::Result<(SoloSettings, ResourceTemplate)> {
        let settings = SoloSettings::read(&opts.config).context("reading settings")?;
        let template = parse_template(&opts.input, &settings)?;
        Ok((settings, template))
    };

    let result = match &opts.sub_command {
        SubCommand::Schema => schema_action(),
        SubCommand::Validate => {
            let (_, template) = load()?;
            tracing::info!("{} is a valid {} template", &opts.input, &template.resource_type);
            Ok(())
        }
        SubCommand::Render => {
            let (_, template) = load()?;
            println!("{}", VNetDocument::from_properties(&template.properties));
            Ok(())
        }
        SubCommand::Create => {
            let (settings, template) = load()?;
            create_action(template, &PollPolicy::from_settings(&settings))
        }
        SubCommand::Delete => {
            let (settings, template) = load()?;
            delete_action(template, &PollPolicy::from_settings(&settings))
        }
        SubCommand::State => {
            let (_, template) = load()?;
            state_action(&template.properties)
        }
        SubCommand::Lookup(lookup_cmd) => {
            let (_, template) = load()?;
            lookup_action(&template.properties, lookup_cmd)
        }
        SubCommand::Show => {
            let (_, template) = load()?;
            show_action(&template.properties)
        }
        SubCommand::Backup => {
            let (_, template) = load()?;
            backup_action(&template.properties)
        }
    };
    result.with_context(|| format!("running {cmd_name} command"))
}

fn schema_action() -> anyhow::Result<()> {
    let schema = serde_yaml::to_string(&properties_schema())
        .context("serialising property schema")?;
    println!("{schema}");
    Ok(())
}

/// Build the resource registered for the template's type
fn build_resource(template: ResourceTemplate) -> anyhow::Result<Box<dyn Resource>> {
    let mapping = resource_mapping();
    let constructor = mapping
        .get(template.resource_type.as_str())
        .with_context(|| format!("no resource registered for {}", &template.resource_type))?;
    let resource = constructor(template.properties).context("building resource")?;
    let status = resource.support_status();
    if status.level != SupportLevel::Supported {
        tracing::warn!(
            "{} is {}: {}",
            resource.resource_type(),
            status.level,
            status.message.unwrap_or_default()
        );
    }
    Ok(resource)
}

fn create_action(template: ResourceTemplate, policy: &PollPolicy) -> anyhow::Result<()> {
    let mut resource = build_resource(template)?;
    let network_name = create_and_wait(resource.as_mut(), policy)?;
    tracing::info!("virtual network {network_name} created");
    Ok(())
}

fn delete_action(template: ResourceTemplate, policy: &PollPolicy) -> anyhow::Result<()> {
    // the network name is the resource id handed out on create
    let network_name = template.properties.network_name.clone();
    let mut resource = build_resource(template)?;
    resource.resource_id_set(Some(network_name));
    match delete_and_wait(resource.as_mut(), policy)? {
        Some(network_name) => tracing::info!("virtual network {network_name} deleted"),
        None => tracing::info!("nothing to delete"),
    }
    Ok(())
}

fn state_action(properties: &VirtualNetworkProperties) -> anyhow::Result<()> {
    let client = SoloClient::from_properties(properties)?;
    match client.vnet_state(&properties.network_name)? {
        Some(state) => println!("{}", state.state),
        None => bail!("virtual network {} not found on controller", &properties.network_name),
    }
    Ok(())
}

fn lookup_action(properties: &VirtualNetworkProperties, lookup_cmd: &LookupCmd) -> anyhow::Result<()> {
    let client = SoloClient::from_properties(properties)?;
    match (&lookup_cmd.name, &lookup_cmd.id) {
        (Some(name), _) => match client.get_vnet_id(name)? {
            Some(id) => println!("{id}"),
            None => bail!("no virtual network named {name}"),
        },
        (None, Some(id)) => match client.get_vnet_name(&VNetId::from(id.as_str()))? {
            Some(name) => println!("{name}"),
            None => bail!("no virtual network with id {id}"),
        },
        (None, None) => bail!("either --name or --id is needed"),
    }
    Ok(())
}

fn show_action(properties: &VirtualNetworkProperties) -> anyhow::Result<()> {
    let client = SoloClient::from_properties(properties)?;
    let Some(vnet) = client.get_vnet(&properties.network_name)? else {
        bail!("virtual network {} not found on controller", &properties.network_name);
    };
    println!("{}", serde_json::to_string_pretty(&vnet)?);
    Ok(())
}

fn backup_action(properties: &VirtualNetworkProperties) -> anyhow::Result<()> {
    let client = SoloClient::from_properties(properties)?;
    let Some(backup) = client.backup()? else {
        bail!("controller did not return a backup");
    };
    println!("{}", serde_json::to_string_pretty(&backup)?);
    Ok(())
}
