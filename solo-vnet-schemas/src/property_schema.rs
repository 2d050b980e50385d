use serde::Serialize;
use strum_macros::Display;

/// Value types accepted by the resource. Only strings appear as leaf values.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PropertyType {
    String,
    List,
    Map,
}

/// Name given to the element schema of a list
pub const LIST_ELEMENT: &str = "element";

/// Declarative description of one property, used to document what a template may contain. The
/// typed models in `vnet_yaml` enforce the same rules when parsing.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct PropertySchema {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub description: &'static str,
    pub required: bool,
    pub update_allowed: bool,
    /// For lists the single element schema, for maps the schema of each key
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub schema: Vec<PropertySchema>,
}

impl PropertySchema {
    fn string(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            property_type: PropertyType::String,
            description,
            required: false,
            update_allowed: false,
            schema: vec![],
        }
    }

    fn map(name: &'static str, description: &'static str, schema: Vec<PropertySchema>) -> Self {
        Self {
            name,
            property_type: PropertyType::Map,
            description,
            required: false,
            update_allowed: false,
            schema,
        }
    }

    fn list_of_maps(name: &'static str, description: &'static str, schema: Vec<PropertySchema>) -> Self {
        Self {
            name,
            property_type: PropertyType::List,
            description,
            required: false,
            update_allowed: true,
            schema: vec![Self::map(LIST_ELEMENT, "One list element.", schema)],
        }
    }

    /// Schema of each element, for lists
    pub fn element(&self) -> Option<&PropertySchema> {
        match self.property_type {
            PropertyType::List => self.schema.first(),
            _ => None,
        }
    }

    fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

pub fn vswitch_schema() -> Vec<PropertySchema> {
    vec![
        PropertySchema::string("datapath", "Openflow datapath ID of the virtual switch.").required(),
        PropertySchema::string("controller_ip", "Openflow controller IP address.").required(),
        PropertySchema::string("controller_port", "Openflow controller TCP port.").required(),
        PropertySchema::string("openflow_version", "Openflow version.").required(),
        PropertySchema::string("physical_device", "Physical device name.").required(),
    ]
}

pub fn vport_schema() -> Vec<PropertySchema> {
    vec![
        PropertySchema::string("datapath", "Openflow datapath ID of the virtual switch.").required(),
        PropertySchema::string("virtual_port_number", "Openflow virtual port number.").required(),
        PropertySchema::string("physical_port_name", "Physical port name.").required(),
        PropertySchema::string("binding_type", "Binding type between virtual and physical ports.").required(),
        PropertySchema::string("vlan", "VLAN identifier for VLAN binding type."),
    ]
}

pub fn vlink_schema() -> Vec<PropertySchema> {
    vec![
        PropertySchema::string("datapath_src", "Openflow datapath ID of the source virtual switch.").required(),
        PropertySchema::string("datapath_dst", "Openflow datapath ID of the destination virtual switch.").required(),
        PropertySchema::string("virtual_port_number_src", "Virtual port number on the source switch.").required(),
        PropertySchema::string("virtual_port_number_dst", "Virtual port number on the destination switch.").required(),
        PropertySchema::string("physical_port_name_src", "Physical port name on the source switch.").required(),
        PropertySchema::string("physical_port_name_dst", "Physical port name on the destination switch.").required(),
        PropertySchema::string("link_type", "Type of tunnel used by the link.").required(),
        PropertySchema::string("vlan", "VLAN identifier for VLAN links."),
        PropertySchema::string("nsi_bandwidth", "Bandwidth reservation for NSI links."),
    ]
}

pub fn vhost_schema() -> Vec<PropertySchema> {
    vec![
        PropertySchema::string("hostname", "Host name of the virtual host.").required(),
        PropertySchema::string("endpoint_name", "Endpoint the host is instantiated on.").required(),
        PropertySchema::string("template_name", "Template used to instantiate the host.").required(),
        PropertySchema::string("datapath", "Openflow datapath ID of the switch the host attaches to.").required(),
        PropertySchema::string("virtual_port_number", "Virtual port number the host attaches to.").required(),
        PropertySchema::string("vlan", "VLAN identifier of the attachment.").required(),
        PropertySchema::string("dataplane_ip", "Dataplane IP address of the host.").required(),
        PropertySchema::string("dataplane_subnet", "Dataplane subnet of the host.").required(),
        PropertySchema::string("dataplane_gateway", "Dataplane gateway of the host.").required(),
    ]
}

/// Top level properties of `RNP::SOLO::VirtualNetwork`
pub fn properties_schema() -> Vec<PropertySchema> {
    vec![
        PropertySchema::string(
            "rest_address",
            "The REST API IP address and TCP port used to send requests to the SDNOverlay service. Ex.: http://172.25.0.2:8181",
        )
        .required(),
        PropertySchema::string("rest_user", "User for HTTP basic authentication against the REST API."),
        PropertySchema::string("rest_password", "Password for HTTP basic authentication against the REST API."),
        PropertySchema::string("network_name", "The Virtual Network name. Ex.: vnet").required(),
        PropertySchema::list_of_maps(
            "switches",
            "List with 0 or more map elements containing virtual switch details.",
            vswitch_schema(),
        ),
        PropertySchema::list_of_maps(
            "ports",
            "List with 0 or more map elements containing virtual port details.",
            vport_schema(),
        ),
        PropertySchema::list_of_maps(
            "links",
            "List with 0 or more map elements containing virtual link details.",
            vlink_schema(),
        ),
        PropertySchema::list_of_maps(
            "hosts",
            "List with 0 or more map elements containing virtual host details.",
            vhost_schema(),
        ),
    ]
}
