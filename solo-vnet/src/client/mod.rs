use crate::document::VNetDocument;
use crate::client::models::{VNetId, VNetSummary};
use crate::SoloError;

pub mod models;
pub mod solo_client;
#[cfg(test)]
pub mod fake;

pub use solo_client::{Credentials, SoloClient};

pub const VNET_API_PATH: &str = "/overlay/orchestrator/v1/vnet";

/// The controller operations the resource depends on. `SoloClient` talks to the real REST api,
/// tests drive the resource with an in-memory implementation instead.
pub trait OverlayApi {
    /// Submit a network, returns its name if the controller accepted it
    fn create_vnet(&self, document: &VNetDocument) -> Result<Option<String>, SoloError>;

    /// Ask the controller to remove a network, true when it did
    fn remove_vnet(&self, network_name: &str) -> Result<bool, SoloError>;

    /// True once the network is in the CREATED state, false while it is unknown or pending
    fn inspect_vnet(&self, network_name: &str) -> Result<bool, SoloError>;

    /// The controller's listing entry for a network, `None` when the network is not listed
    fn lookup_vnet(&self, network_name: &str) -> Result<Option<VNetSummary>, SoloError>;

    /// Id of a listed network. A network listed without an id also gives `None`, use
    /// `lookup_vnet` to tell whether it still exists.
    fn get_vnet_id(&self, network_name: &str) -> Result<Option<VNetId>, SoloError> {
        Ok(self.lookup_vnet(network_name)?.and_then(|vnet| vnet.id))
    }

    fn get_vnet_name(&self, network_id: &VNetId) -> Result<Option<String>, SoloError>;
}
