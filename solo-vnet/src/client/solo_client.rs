use std::fmt;
use std::fmt::Formatter;
use std::time::Duration;
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::{StatusCode, Url};
use serde_json::Value;
use solo_vnet_schemas::vnet_yaml::VirtualNetworkProperties;
use crate::client::models::{VNetId, VNetList, VNetState, VNetSummary};
use crate::client::{OverlayApi, VNET_API_PATH};
use crate::document::VNetDocument;
use crate::SoloError;

/// HTTP basic auth credentials for the controller
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub user: String,
    pub password: Option<String>,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "********"))
            .finish()
    }
}

/// Blocking client for the overlay controller REST api. Every call is a single request with no
/// retry and no timeout, the caller decides how often to come back.
#[derive(Debug, Clone)]
pub struct SoloClient {
    client: Client,
    credentials: Option<Credentials>,
    /// endpoint joined with the vnet api path, network names are appended as single segments
    api_url: Url,
}

impl SoloClient {
    pub fn new(endpoint: &str, credentials: Option<Credentials>) -> Result<Self, SoloError> {
        let mut api_url = Url::parse(endpoint)
            .map_err(|e| SoloError::InvalidEndpoint(format!("{endpoint}: {e}")))?;
        api_url
            .path_segments_mut()
            .map_err(|_| SoloError::InvalidEndpoint(endpoint.to_string()))?
            .pop_if_empty()
            .extend(VNET_API_PATH.split('/').filter(|segment| !segment.is_empty()));
        let client = Client::builder()
            .timeout(None::<Duration>)
            // connections are not kept between calls
            .pool_max_idle_per_host(0)
            .build()?;
        Ok(Self {
            client,
            credentials,
            api_url,
        })
    }

    /// Api url with `segments` appended, each one percent-encoded so a network name can never
    /// change the path, query or fragment of the request
    fn url_for(&self, segments: &[&str]) -> Result<Url, SoloError> {
        let mut url = self.api_url.clone();
        url.path_segments_mut()
            .map_err(|_| SoloError::InvalidEndpoint(self.api_url.to_string()))?
            .extend(segments);
        tracing::trace!("api url used = {:?}", url.as_str());
        Ok(url)
    }

    pub fn from_properties(properties: &VirtualNetworkProperties) -> Result<Self, SoloError> {
        let credentials = properties.rest_user.clone().map(|user| Credentials {
            user,
            password: properties.rest_password.clone(),
        });
        if credentials.is_none() {
            tracing::warn!(
                "no REST credentials for vnet {}, requests are sent without authentication",
                &properties.network_name
            );
        }
        Self::new(&properties.rest_address, credentials)
    }

    fn authenticated(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.credentials {
            Some(credentials) => builder.basic_auth(&credentials.user, credentials.password.as_ref()),
            None => builder,
        }
    }

    /// Current controller state of a network. A 500 from the controller is fatal, a 404 means
    /// the network is not (or no longer) known.
    pub fn vnet_state(&self, network_name: &str) -> Result<Option<VNetState>, SoloError> {
        let url = self.url_for(&["state", "network", network_name])?;
        let resp = self.authenticated(self.client.get(url)).send()?;
        match resp.status() {
            StatusCode::INTERNAL_SERVER_ERROR => {
                tracing::error!("controller failed while inspecting vnet {network_name}");
                Err(SoloError::ControllerError {
                    status: resp.status().as_u16(),
                    network_name: network_name.to_string(),
                })
            }
            StatusCode::NOT_FOUND => {
                tracing::debug!("vnet {network_name} not found on controller");
                Ok(None)
            }
            _ => {
                let state: VNetState = serde_json::from_str(&resp.text()?)?;
                tracing::debug!("vnet {network_name} is in state {}", &state.state);
                Ok(Some(state))
            }
        }
    }

    /// All networks known by the controller, `None` if the listing was refused
    pub fn list_vnets(&self) -> Result<Option<VNetList>, SoloError> {
        let url = self.url_for(&[])?;
        let resp = self.authenticated(self.client.get(url)).send()?;
        if resp.status() != StatusCode::OK {
            tracing::warn!("listing vnets was not successful with code {}", resp.status());
            return Ok(None);
        }
        let list: VNetList = serde_json::from_str(&resp.text()?)?;
        Ok(Some(list))
    }

    /// The controller's full description of one network
    pub fn get_vnet(&self, network_name: &str) -> Result<Option<Value>, SoloError> {
        let url = self.url_for(&["network", network_name])?;
        let resp = self.authenticated(self.client.get(url)).send()?;
        parse_json_response(resp, "get vnet")
    }

    /// The controller's backup of every network it holds
    pub fn backup(&self) -> Result<Option<Value>, SoloError> {
        let url = self.url_for(&["backup"])?;
        let resp = self.authenticated(self.client.get(url)).send()?;
        parse_json_response(resp, "backup")
    }
}

/// Reusable helper for read-only calls where anything but 200 just means there is nothing to show
fn parse_json_response(resp: Response, command_name: &str) -> Result<Option<Value>, SoloError> {
    let http_code = resp.status();
    if http_code != StatusCode::OK {
        tracing::warn!("{command_name} was not successful with code {http_code}");
        return Ok(None);
    }
    let value: Value = serde_json::from_str(&resp.text()?)?;
    Ok(Some(value))
}

impl OverlayApi for SoloClient {
    fn create_vnet(&self, document: &VNetDocument) -> Result<Option<String>, SoloError> {
        tracing::info!("creating vnet {}", document.network_name());
        let url = self.url_for(&[])?;
        let resp = self
            .authenticated(self.client.post(url))
            .json(document)
            .send()?;
        if resp.status() == StatusCode::ACCEPTED {
            Ok(Some(document.network_name().to_string()))
        } else {
            tracing::warn!(
                "create vnet {} was not accepted, controller answered {}",
                document.network_name(),
                resp.status()
            );
            Ok(None)
        }
    }

    fn remove_vnet(&self, network_name: &str) -> Result<bool, SoloError> {
        tracing::info!("removing vnet {network_name}");
        let url = self.url_for(&["network", network_name])?;
        let resp = self.authenticated(self.client.delete(url)).send()?;
        if resp.status() == StatusCode::NO_CONTENT {
            Ok(true)
        } else {
            tracing::warn!("remove vnet {network_name} was not accepted, controller answered {}", resp.status());
            Ok(false)
        }
    }

    fn inspect_vnet(&self, network_name: &str) -> Result<bool, SoloError> {
        Ok(self
            .vnet_state(network_name)?
            .map(|state| state.is_created())
            .unwrap_or(false))
    }

    fn lookup_vnet(&self, network_name: &str) -> Result<Option<VNetSummary>, SoloError> {
        Ok(self
            .list_vnets()?
            .and_then(|list| list.find_by_name(network_name).cloned()))
    }

    fn get_vnet_name(&self, network_id: &VNetId) -> Result<Option<String>, SoloError> {
        Ok(self
            .list_vnets()?
            .and_then(|list| list.find_by_id(network_id).map(|vnet| vnet.name.clone())))
    }
}
