use std::rc::Rc;

use futures::future::LocalBoxFuture;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::timing;

/// What the form hands to a transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum SendError {
    #[error("contact message rejected: {0}")]
    Rejected(String),

    #[error("contact transport unavailable")]
    Unavailable,
}

/// Delivers a contact message somewhere. Resolves `Ok` once delivered.
pub trait ContactTransport {
    fn send(&self, message: ContactMessage) -> LocalBoxFuture<'static, Result<(), SendError>>;
}

/// Waits a fixed delay and reports success. Stands in until a real transport exists.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedTransport {
    pub delay_ms: u64,
}

impl SimulatedTransport {
    pub fn new(delay_ms: u64) -> Self {
        Self { delay_ms }
    }
}

impl ContactTransport for SimulatedTransport {
    fn send(&self, message: ContactMessage) -> LocalBoxFuture<'static, Result<(), SendError>> {
        let delay_ms = self.delay_ms;
        Box::pin(async move {
            tracing::debug!(chars = message.message.chars().count(), delay_ms, "simulating contact send");
            timing::sleep_ms(delay_ms).await;
            Ok(())
        })
    }
}

/// Context wrapper so launchers can swap the transport.
#[derive(Clone)]
pub struct ContactService(pub Rc<dyn ContactTransport>);

impl ContactService {
    pub fn new(transport: impl ContactTransport + 'static) -> Self {
        Self(Rc::new(transport))
    }

    pub fn send(&self, message: ContactMessage) -> LocalBoxFuture<'static, Result<(), SendError>> {
        self.0.send(message)
    }
}

impl Default for ContactService {
    fn default() -> Self {
        Self::new(SimulatedTransport::new(
            crate::content::profile::SITE.contact_send_delay_ms,
        ))
    }
}
