use std::cell::RefCell;
use std::collections::VecDeque;
use crate::client::models::{VNetId, VNetSummary};
use crate::client::OverlayApi;
use crate::document::VNetDocument;
use crate::SoloError;

/// In-memory controller used in tests instead of `SoloClient`. It records every call and answers
/// inspections and lookups from queues, an empty queue answers "not created" and "not listed".
#[derive(Default)]
pub struct FakeOverlay {
    pub accept_create: bool,
    pub accept_remove: bool,
    /// `None` entries answer with a controller error
    states: RefCell<VecDeque<Option<bool>>>,
    lookups: RefCell<VecDeque<Option<VNetSummary>>>,
    calls: RefCell<Vec<String>>,
    last_document: RefCell<Option<VNetDocument>>,
}

impl FakeOverlay {
    pub fn accepting() -> Self {
        Self {
            accept_create: true,
            accept_remove: true,
            ..Default::default()
        }
    }

    pub fn with_states(self, states: impl IntoIterator<Item = Option<bool>>) -> Self {
        self.states.borrow_mut().extend(states);
        self
    }

    pub fn with_lookups(self, lookups: impl IntoIterator<Item = Option<VNetSummary>>) -> Self {
        self.lookups.borrow_mut().extend(lookups);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn last_document(&self) -> Option<VNetDocument> {
        self.last_document.borrow().clone()
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }
}

impl OverlayApi for FakeOverlay {
    fn create_vnet(&self, document: &VNetDocument) -> Result<Option<String>, SoloError> {
        self.record(format!("create {}", document.network_name()));
        *self.last_document.borrow_mut() = Some(document.clone());
        Ok(self.accept_create.then(|| document.network_name().to_string()))
    }

    fn remove_vnet(&self, network_name: &str) -> Result<bool, SoloError> {
        self.record(format!("remove {network_name}"));
        Ok(self.accept_remove)
    }

    fn inspect_vnet(&self, network_name: &str) -> Result<bool, SoloError> {
        self.record(format!("inspect {network_name}"));
        match self.states.borrow_mut().pop_front() {
            Some(Some(created)) => Ok(created),
            Some(None) => Err(SoloError::ControllerError {
                status: 500,
                network_name: network_name.to_string(),
            }),
            None => Ok(false),
        }
    }

    fn lookup_vnet(&self, network_name: &str) -> Result<Option<VNetSummary>, SoloError> {
        self.record(format!("lookup {network_name}"));
        Ok(self.lookups.borrow_mut().pop_front().flatten())
    }

    fn get_vnet_name(&self, network_id: &VNetId) -> Result<Option<String>, SoloError> {
        self.record(format!("lookup id {network_id}"));
        Ok(None)
    }
}
