use validator::Validate;
use solo_vnet_schemas::vnet_yaml::VirtualNetworkProperties;
use solo_vnet_schemas::RESOURCE_TYPE;
use crate::client::{OverlayApi, SoloClient};
use crate::document::VNetDocument;
use crate::lifecycle::LifecycleAction;
use crate::resource::{Resource, SupportLevel, SupportStatus};
use crate::SoloError;

/// `RNP::SOLO::VirtualNetwork`: one overlay network on the controller, identified by its name.
/// Properties are validated when the resource is built, so a bad template fails before any
/// request is made.
#[derive(Debug)]
pub struct VirtualNetwork<C: OverlayApi = SoloClient> {
    properties: VirtualNetworkProperties,
    client: C,
    resource_id: Option<String>,
}

impl VirtualNetwork<SoloClient> {
    pub fn new(properties: VirtualNetworkProperties) -> Result<Self, SoloError> {
        let client = SoloClient::from_properties(&properties)?;
        Self::with_client(properties, client)
    }
}

impl<C: OverlayApi> VirtualNetwork<C> {
    pub fn with_client(properties: VirtualNetworkProperties, client: C) -> Result<Self, SoloError> {
        properties.validate()?;
        Ok(Self {
            properties,
            client,
            resource_id: None,
        })
    }

    pub fn properties(&self) -> &VirtualNetworkProperties {
        &self.properties
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn document(&self) -> VNetDocument {
        VNetDocument::from_properties(&self.properties)
    }
}

impl<C: OverlayApi> Resource for VirtualNetwork<C> {
    fn resource_type(&self) -> &'static str {
        RESOURCE_TYPE
    }

    fn support_status(&self) -> SupportStatus {
        SupportStatus {
            level: SupportLevel::Unsupported,
            message: Some("This resource is not supported, use at your own risk."),
        }
    }

    fn resource_id(&self) -> Option<&str> {
        self.resource_id.as_deref()
    }

    fn resource_id_set(&mut self, resource_id: Option<String>) {
        self.resource_id = resource_id;
    }

    fn handle_create(&mut self) -> Result<String, SoloError> {
        let document = self.document();
        match self.client.create_vnet(&document)? {
            Some(network_name) => {
                self.resource_id_set(Some(network_name.clone()));
                Ok(network_name)
            }
            None => Err(SoloError::ResourceFailure {
                action: LifecycleAction::Create,
                network_name: document.network_name().to_string(),
            }),
        }
    }

    fn check_create_complete(&self, handle: &str) -> Result<bool, SoloError> {
        self.client.inspect_vnet(handle)
    }

    fn handle_delete(&mut self) -> Result<Option<String>, SoloError> {
        let Some(resource_id) = self.resource_id.clone() else {
            tracing::debug!("vnet {} has no resource id, nothing to delete", &self.properties.network_name);
            return Ok(None);
        };
        if !self.client.remove_vnet(&resource_id)? {
            return Err(SoloError::ResourceFailure {
                action: LifecycleAction::Delete,
                network_name: resource_id,
            });
        }
        Ok(Some(resource_id))
    }

    fn check_delete_complete(&self, handle: &str) -> Result<bool, SoloError> {
        Ok(self.client.lookup_vnet(handle)?.is_none())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fake::FakeOverlay;
    use crate::client::models::{VNetId, VNetSummary};
    use solo_vnet_schemas::vnet_yaml::port::VPortProperties;
    use solo_vnet_schemas::vnet_yaml::switch::VSwitchProperties;

    fn properties() -> VirtualNetworkProperties {
        let mut properties = VirtualNetworkProperties::new("http://172.25.0.2:8181", "vnet1");
        properties.switches.push(VSwitchProperties {
            datapath: "1".into(),
            controller_ip: "10.0.0.1".into(),
            controller_port: "6633".into(),
            openflow_version: "OF_13".into(),
            physical_device: "eth0".into(),
        });
        properties
    }

    #[test]
    fn test_handle_create_sets_resource_id() {
        let mut vnet = VirtualNetwork::with_client(properties(), FakeOverlay::accepting()).unwrap();
        assert_eq!(vnet.handle_create().unwrap(), "vnet1");
        assert_eq!(vnet.resource_id(), Some("vnet1"));

        let document = vnet.client().last_document().unwrap();
        assert_eq!(document.network().switches.len(), 1);
        assert_eq!(document.network().switches[0].network_name, "vnet1");
        assert!(document.network().ports.is_empty());
    }

    #[test]
    fn test_handle_create_not_accepted() {
        let mut vnet = VirtualNetwork::with_client(properties(), FakeOverlay::default()).unwrap();
        let err = vnet.handle_create().unwrap_err();
        assert!(matches!(
            err,
            SoloError::ResourceFailure { action: LifecycleAction::Create, .. }
        ));
        assert_eq!(vnet.resource_id(), None);
    }

    #[test]
    fn test_invalid_properties_make_no_call() {
        let mut properties = properties();
        properties.ports.push(VPortProperties {
            datapath: "1".into(),
            virtual_port_number: "".into(),
            physical_port_name: "eth1".into(),
            binding_type: "PORT".into(),
            vlan: None,
        });
        let result = VirtualNetwork::with_client(properties, FakeOverlay::accepting());
        assert!(matches!(result, Err(SoloError::Validation(_))));
    }

    #[test]
    fn test_check_create_complete() {
        let fake = FakeOverlay::accepting().with_states([Some(false), Some(true)]);
        let vnet = VirtualNetwork::with_client(properties(), fake).unwrap();
        assert!(!vnet.check_create_complete("vnet1").unwrap());
        assert!(vnet.check_create_complete("vnet1").unwrap());
    }

    #[test]
    fn test_handle_delete_without_resource_id() {
        let mut vnet = VirtualNetwork::with_client(properties(), FakeOverlay::accepting()).unwrap();
        assert_eq!(vnet.handle_delete().unwrap(), None);
        assert!(vnet.client().calls().is_empty());
    }

    #[test]
    fn test_handle_delete() {
        let mut vnet = VirtualNetwork::with_client(properties(), FakeOverlay::accepting()).unwrap();
        vnet.resource_id_set(Some("vnet1".into()));
        assert_eq!(vnet.handle_delete().unwrap().as_deref(), Some("vnet1"));
        assert_eq!(vnet.client().calls(), vec!["remove vnet1"]);
    }

    #[test]
    fn test_handle_delete_not_accepted() {
        let mut vnet = VirtualNetwork::with_client(properties(), FakeOverlay::default()).unwrap();
        vnet.resource_id_set(Some("vnet1".into()));
        let err = vnet.handle_delete().unwrap_err();
        assert!(matches!(
            err,
            SoloError::ResourceFailure { action: LifecycleAction::Delete, .. }
        ));
    }

    #[test]
    fn test_check_delete_complete() {
        let fake = FakeOverlay::accepting().with_lookups([
            Some(VNetSummary::new("vnet1", Some(VNetId::Number(3u64.into())))),
            None,
        ]);
        let vnet = VirtualNetwork::with_client(properties(), fake).unwrap();
        assert!(!vnet.check_delete_complete("vnet1").unwrap());
        assert!(vnet.check_delete_complete("vnet1").unwrap());
    }

    #[test]
    fn test_listed_without_id_is_not_deleted() {
        let fake = FakeOverlay::accepting().with_lookups([Some(VNetSummary::new("vnet1", None)), None]);
        let vnet = VirtualNetwork::with_client(properties(), fake).unwrap();
        assert!(!vnet.check_delete_complete("vnet1").unwrap());
        assert!(vnet.check_delete_complete("vnet1").unwrap());
    }
}
