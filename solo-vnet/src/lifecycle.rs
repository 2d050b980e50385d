use std::time::Duration;
use strum_macros::Display;
use solo_vnet_schemas::settings::SoloSettings;
use crate::resource::Resource;
use crate::SoloError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum LifecycleAction {
    Create,
    Delete,
}

/// How often and how long to check a resource for completion. This is the engine side of the
/// contract, the resource itself never waits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    pub interval: Duration,
    pub max_polls: u32,
}

impl PollPolicy {
    pub fn from_settings(settings: &SoloSettings) -> Self {
        Self {
            interval: settings.poll_interval(),
            max_polls: settings.max_polls,
        }
    }
}

/// Create the resource and check it until it reports completion
pub fn create_and_wait(
    resource: &mut dyn Resource,
    policy: &PollPolicy,
) -> Result<String, SoloError> {
    let handle = resource.handle_create()?;
    wait_for(LifecycleAction::Create, &handle, policy, |h| resource.check_create_complete(h))?;
    Ok(handle)
}

/// Delete the resource and check it until it is gone. A resource that was never created returns
/// `None` straight away.
pub fn delete_and_wait(
    resource: &mut dyn Resource,
    policy: &PollPolicy,
) -> Result<Option<String>, SoloError> {
    let Some(handle) = resource.handle_delete()? else {
        return Ok(None);
    };
    wait_for(LifecycleAction::Delete, &handle, policy, |h| resource.check_delete_complete(h))?;
    Ok(Some(handle))
}

fn wait_for(
    action: LifecycleAction,
    handle: &str,
    policy: &PollPolicy,
    mut check: impl FnMut(&str) -> Result<bool, SoloError>,
) -> Result<(), SoloError> {
    // always check at least once
    let max_polls = policy.max_polls.max(1);
    for attempt in 1..=max_polls {
        if check(handle)? {
            tracing::info!("{action} of vnet {handle} complete");
            return Ok(());
        }
        tracing::debug!("{action} of vnet {handle} not complete ({attempt}/{max_polls})");
        if attempt < max_polls {
            std::thread::sleep(policy.interval);
        }
    }
    tracing::error!("gave up waiting on {action} of vnet {handle}");
    Err(SoloError::PollTimeout {
        action,
        network_name: handle.to_string(),
        polls: max_polls,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fake::FakeOverlay;
    use crate::client::models::VNetSummary;
    use crate::resource::virtual_network::VirtualNetwork;
    use solo_vnet_schemas::vnet_yaml::VirtualNetworkProperties;

    fn policy(max_polls: u32) -> PollPolicy {
        PollPolicy { interval: Duration::ZERO, max_polls }
    }

    fn resource(fake: FakeOverlay) -> VirtualNetwork<FakeOverlay> {
        let properties = VirtualNetworkProperties::new("http://localhost:8181", "vnet1");
        VirtualNetwork::with_client(properties, fake).unwrap()
    }

    #[test]
    fn test_create_polls_until_created() {
        let mut vnet = resource(FakeOverlay::accepting().with_states([Some(false), Some(false), Some(true)]));
        let handle = create_and_wait(&mut vnet, &policy(5)).unwrap();
        assert_eq!(handle, "vnet1");
        assert_eq!(
            vnet.client().calls(),
            vec!["create vnet1", "inspect vnet1", "inspect vnet1", "inspect vnet1"]
        );
    }

    #[test]
    fn test_create_times_out() {
        let mut vnet = resource(FakeOverlay::accepting());
        let err = create_and_wait(&mut vnet, &policy(3)).unwrap_err();
        assert!(matches!(
            err,
            SoloError::PollTimeout { action: LifecycleAction::Create, polls: 3, .. }
        ));
        assert_eq!(vnet.client().calls().len(), 4);
    }

    #[test]
    fn test_zero_max_polls_still_checks_once() {
        let mut vnet = resource(FakeOverlay::accepting().with_states([Some(true)]));
        assert_eq!(create_and_wait(&mut vnet, &policy(0)).unwrap(), "vnet1");
        assert_eq!(vnet.client().calls(), vec!["create vnet1", "inspect vnet1"]);

        let mut vnet = resource(FakeOverlay::accepting());
        let err = create_and_wait(&mut vnet, &policy(0)).unwrap_err();
        assert!(matches!(err, SoloError::PollTimeout { polls: 1, .. }));
    }

    #[test]
    fn test_create_stops_on_controller_error() {
        let mut vnet = resource(FakeOverlay::accepting().with_states([Some(false), None]));
        let err = create_and_wait(&mut vnet, &policy(10)).unwrap_err();
        assert!(matches!(err, SoloError::ControllerError { .. }));
        assert_eq!(vnet.client().calls().len(), 3);
    }

    #[test]
    fn test_delete_polls_until_gone() {
        let fake = FakeOverlay::accepting().with_lookups([Some(VNetSummary::new("vnet1", None)), None]);
        let mut vnet = resource(fake);
        vnet.resource_id_set(Some("vnet1".into()));
        let handle = delete_and_wait(&mut vnet, &policy(5)).unwrap();
        assert_eq!(handle.as_deref(), Some("vnet1"));
        assert_eq!(vnet.client().calls(), vec!["remove vnet1", "lookup vnet1", "lookup vnet1"]);
    }

    #[test]
    fn test_delete_without_resource_id() {
        let mut vnet = resource(FakeOverlay::accepting());
        assert_eq!(delete_and_wait(&mut vnet, &policy(5)).unwrap(), None);
        assert!(vnet.client().calls().is_empty());
    }
}
