use thiserror::Error;
use crate::lifecycle::LifecycleAction;

/// Errors raised by the resource and its REST client. Controller answers that only mean "not
/// accepted" are not errors at the client level, the resource turns them into `ResourceFailure`.
#[derive(Debug, Error)]
pub enum SoloError {
    #[error("invalid VirtualNetwork properties")]
    Validation(#[from] validator::ValidationErrors),
    #[error("invalid overlay controller address {0}")]
    InvalidEndpoint(String),
    #[error("request to the overlay controller failed")]
    Transport(#[from] reqwest::Error),
    #[error("overlay controller answered {status} while inspecting {network_name}")]
    ControllerError {
        status: u16,
        network_name: String,
    },
    #[error("could not decode overlay controller response")]
    Decode(#[from] serde_json::Error),
    #[error("{action} of virtual network {network_name} was not accepted by the controller")]
    ResourceFailure {
        action: LifecycleAction,
        network_name: String,
    },
    #[error("{action} of virtual network {network_name} did not complete after {polls} checks")]
    PollTimeout {
        action: LifecycleAction,
        network_name: String,
        polls: u32,
    },
}
