use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use solo_vnet_schemas::vnet_yaml::host::VHostProperties;
use solo_vnet_schemas::vnet_yaml::link::VLinkProperties;
use solo_vnet_schemas::vnet_yaml::port::VPortProperties;
use solo_vnet_schemas::vnet_yaml::switch::VSwitchProperties;
use solo_vnet_schemas::vnet_yaml::VirtualNetworkProperties;
use std::fmt;
use std::fmt::Formatter;

/// The JSON document accepted by the controller's vnet collection endpoint. The controller takes
/// a list of networks, but a resource only ever describes one, so the document holds a single
/// network and wraps it in `vNets` when serialised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VNetDocument {
    network: VNetwork,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct VNetwork {
    #[serde(rename = "vNetworkName")]
    pub network_name: String,
    #[serde(rename = "vSwitches")]
    pub switches: Vec<VSwitch>,
    #[serde(rename = "vPorts")]
    pub ports: Vec<VPort>,
    #[serde(rename = "vLinks")]
    pub links: Vec<VLink>,
    #[serde(rename = "vHosts")]
    pub hosts: Vec<VHost>,
}

// every child repeats the parent network name, the controller api is flat

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VSwitch {
    pub datapath_id: String,
    pub controller_ip: String,
    pub controller_port: String,
    pub openflow_version: String,
    pub physical_device: String,
    #[serde(rename = "vNetworkName")]
    pub network_name: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VPort {
    pub datapath_id: String,
    pub virtual_port_number: String,
    pub physical_port_name: String,
    pub binding_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vlan_id: Option<String>,
    #[serde(rename = "vNetworkName")]
    pub network_name: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VLink {
    pub src_datapath_id: String,
    pub dst_datapath_id: String,
    pub src_virtual_port_number: String,
    pub dst_virtual_port_number: String,
    pub src_physical_port: String,
    pub dst_physical_port: String,
    pub link_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vlan_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nsi_bandwidth: Option<String>,
    #[serde(rename = "vNetworkName")]
    pub network_name: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VHost {
    pub hostname: String,
    pub endpoint_name: String,
    pub template_name: String,
    pub datapath_id: String,
    pub virtual_port_number: String,
    pub vlan_id: String,
    pub dataplane_ip: String,
    pub dataplane_subnet: String,
    pub dataplane_gateway: String,
    #[serde(rename = "vNetworkName")]
    pub network_name: String,
}

impl VNetDocument {
    pub fn new(network_name: impl Into<String>) -> Self {
        Self {
            network: VNetwork {
                network_name: network_name.into(),
                switches: vec![],
                ports: vec![],
                links: vec![],
                hosts: vec![],
            },
        }
    }

    /// Translate a whole property tree, keeping the order of every list
    pub fn from_properties(properties: &VirtualNetworkProperties) -> Self {
        let mut document = Self::new(properties.network_name.clone());
        properties.switches.iter().for_each(|s| document.add_vswitch(s));
        properties.ports.iter().for_each(|p| document.add_vport(p));
        properties.links.iter().for_each(|l| document.add_vlink(l));
        properties.hosts.iter().for_each(|h| document.add_vhost(h));
        tracing::debug!(
            "vnet {} document has {} switches, {} ports, {} links, {} hosts",
            document.network_name(),
            document.network.switches.len(),
            document.network.ports.len(),
            document.network.links.len(),
            document.network.hosts.len(),
        );
        document
    }

    pub fn network_name(&self) -> &str {
        &self.network.network_name
    }

    pub fn network(&self) -> &VNetwork {
        &self.network
    }

    pub fn add_vswitch(&mut self, vswitch: &VSwitchProperties) {
        let network_name = self.network.network_name.clone();
        self.network.switches.push(VSwitch {
            datapath_id: vswitch.datapath.clone(),
            controller_ip: vswitch.controller_ip.clone(),
            controller_port: vswitch.controller_port.clone(),
            openflow_version: vswitch.openflow_version.clone(),
            physical_device: vswitch.physical_device.clone(),
            network_name,
        });
    }

    pub fn add_vport(&mut self, vport: &VPortProperties) {
        let network_name = self.network.network_name.clone();
        self.network.ports.push(VPort {
            datapath_id: vport.datapath.clone(),
            virtual_port_number: vport.virtual_port_number.clone(),
            physical_port_name: vport.physical_port_name.clone(),
            binding_type: vport.binding_type.clone(),
            vlan_id: vport.vlan.clone(),
            network_name,
        });
    }

    pub fn add_vlink(&mut self, vlink: &VLinkProperties) {
        let network_name = self.network.network_name.clone();
        self.network.links.push(VLink {
            src_datapath_id: vlink.datapath_src.clone(),
            dst_datapath_id: vlink.datapath_dst.clone(),
            src_virtual_port_number: vlink.virtual_port_number_src.clone(),
            dst_virtual_port_number: vlink.virtual_port_number_dst.clone(),
            src_physical_port: vlink.physical_port_name_src.clone(),
            dst_physical_port: vlink.physical_port_name_dst.clone(),
            link_type: vlink.link_type.clone(),
            vlan_id: vlink.vlan.clone(),
            nsi_bandwidth: vlink.nsi_bandwidth.clone(),
            network_name,
        });
    }

    pub fn add_vhost(&mut self, vhost: &VHostProperties) {
        let network_name = self.network.network_name.clone();
        self.network.hosts.push(VHost {
            hostname: vhost.hostname.clone(),
            endpoint_name: vhost.endpoint_name.clone(),
            template_name: vhost.template_name.clone(),
            datapath_id: vhost.datapath.clone(),
            virtual_port_number: vhost.virtual_port_number.clone(),
            vlan_id: vhost.vlan.clone(),
            dataplane_ip: vhost.dataplane_ip.clone(),
            dataplane_subnet: vhost.dataplane_subnet.clone(),
            dataplane_gateway: vhost.dataplane_gateway.clone(),
            network_name,
        });
    }
}

impl Serialize for VNetDocument {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
    {
        let mut state = serializer.serialize_struct("VNetDocument", 1)?;
        state.serialize_field("vNets", std::slice::from_ref(&self.network))?;
        state.end()
    }
}

impl fmt::Display for VNetDocument {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let text = serde_json::to_string_pretty(&self).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}
