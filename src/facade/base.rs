//! Base façade: one container, one management client, one running flag.

use log::{info, warn};

use super::FacadeError;
use crate::container::MessagingContainer;

/// Binds a messaging container and a management client and gates
/// operational calls on the running state.
///
/// Not synchronized: `start`/`stop` take `&mut self`, so sharing a façade
/// across threads means wrapping it in the caller's own lock.
pub struct PubSubFacade<C, M> {
    container: C,
    client: M,
    running: bool,
}

impl<C: MessagingContainer, M> PubSubFacade<C, M> {
    pub fn new(container: C, client: M) -> Self {
        Self {
            container,
            client,
            running: false,
        }
    }

    pub fn container(&self) -> &C {
        &self.container
    }

    pub fn client(&self) -> &M {
        &self.client
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Start the container and open the façade for operational calls.
    pub fn start(&mut self) -> Result<(), FacadeError> {
        if self.running {
            return Ok(());
        }
        self.container.start()?;
        self.running = true;
        info!("pubsub facade started");
        Ok(())
    }

    /// Close the façade and stop the container.
    ///
    /// The flag is cleared first, so a failing container stop still leaves
    /// the façade closed.
    pub fn stop(&mut self) -> Result<(), FacadeError> {
        if !self.running {
            return Ok(());
        }
        self.running = false;
        self.container.stop()?;
        info!("pubsub facade stopped");
        Ok(())
    }

    /// Fail with [`FacadeError::NotRunning`] unless started.
    pub fn require_running(&self, operation: &str) -> Result<(), FacadeError> {
        if self.running {
            Ok(())
        } else {
            warn!("{} rejected: facade is not running", operation);
            Err(FacadeError::NotRunning)
        }
    }

    /// Run an operational body only while started.
    ///
    /// When not running the body is never invoked, so no collaborator sees
    /// a call. Otherwise its result is returned as is.
    pub fn guarded<T, F>(&self, operation: &str, body: F) -> Result<T, FacadeError>
    where
        F: FnOnce(&C, &M) -> Result<T, FacadeError>,
    {
        self.require_running(operation)?;
        body(&self.container, &self.client)
    }
}

/// Lifecycle shared by every façade.
pub trait Facade {
    type Container: MessagingContainer;
    type Client;

    fn base(&self) -> &PubSubFacade<Self::Container, Self::Client>;

    fn base_mut(&mut self) -> &mut PubSubFacade<Self::Container, Self::Client>;

    fn start(&mut self) -> Result<(), FacadeError> {
        self.base_mut().start()
    }

    fn stop(&mut self) -> Result<(), FacadeError> {
        self.base_mut().stop()
    }

    fn is_running(&self) -> bool {
        self.base().is_running()
    }

    fn container(&self) -> &Self::Container {
        self.base().container()
    }

    fn client(&self) -> &Self::Client {
        self.base().client()
    }
}
