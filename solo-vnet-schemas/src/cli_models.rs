use clap::{Args, Parser, Subcommand};
use crate::settings::DEFAULT_SETTINGS_PATH;

#[derive(Parser)]
#[command(version = "1.0", about = "Drive RNP::SOLO::VirtualNetwork resources against an overlay controller")]
pub struct Opts {
    #[arg(long, default_value = "vnet.yaml", help = "VirtualNetwork template file")]
    pub input: String,
    #[arg(short, long)]
    pub verbosity: Option<String>,
    #[arg(long, default_value = DEFAULT_SETTINGS_PATH, help = "Settings json file")]
    pub config: String,
    #[command(subcommand)]
    pub sub_command: SubCommand,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum SubCommand {
    #[command(about = "Validate the template without contacting the controller")]
    Validate,
    #[command(about = "Print the JSON document that would be sent to the controller")]
    Render,
    #[command(about = "Print the property schema of the resource")]
    Schema,
    #[command(about = "Create the virtual network and wait until it is CREATED")]
    Create,
    #[command(about = "Delete the virtual network and wait until it is gone")]
    Delete,
    #[command(about = "Show the controller state of the virtual network")]
    State,
    #[command(about = "Resolve a virtual network id from its name or the other way round")]
    Lookup(LookupCmd),
    #[command(about = "Dump the controller's view of the virtual network")]
    Show,
    #[command(about = "Dump the controller's backup of all virtual networks")]
    Backup,
}

impl SubCommand {
    pub fn name(&self) -> String {
        match &self {
            SubCommand::Validate => "validate".into(),
            SubCommand::Render => "render".into(),
            SubCommand::Schema => "schema".into(),
            SubCommand::Create => "create".into(),
            SubCommand::Delete => "delete".into(),
            SubCommand::State => "state".into(),
            SubCommand::Lookup(_) => "lookup".into(),
            SubCommand::Show => "show".into(),
            SubCommand::Backup => "backup".into(),
        }
    }
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
#[group(required = true, multiple = false)]
pub struct LookupCmd {
    #[arg(long, help = "Virtual network name to resolve to an id")]
    pub name: Option<String>,
    #[arg(long, help = "Virtual network id to resolve to a name")]
    pub id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lookup() {
        let opts = Opts::try_parse_from(["solo-vnet", "--input", "net.yaml", "lookup", "--id", "7"]).unwrap();
        assert_eq!(opts.input, "net.yaml");
        assert_eq!(opts.config, DEFAULT_SETTINGS_PATH);
        assert_eq!(
            opts.sub_command,
            SubCommand::Lookup(LookupCmd { name: None, id: Some("7".into()) })
        );
    }

    #[test]
    fn test_lookup_needs_exactly_one_key() {
        assert!(Opts::try_parse_from(["solo-vnet", "lookup"]).is_err());
        assert!(Opts::try_parse_from(["solo-vnet", "lookup", "--id", "7", "--name", "vnet1"]).is_err());
    }

    #[test]
    fn test_parse_schema() {
        let opts = Opts::try_parse_from(["solo-vnet", "-v", "debug", "schema"]).unwrap();
        assert_eq!(opts.sub_command, SubCommand::Schema);
        assert_eq!(opts.verbosity.as_deref(), Some("debug"));
    }
}
