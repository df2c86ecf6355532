//! Notification relay — the one transformation this service performs.
//!
//! Flow:
//! 1. Take the first record of the SNS envelope
//! 2. Decode the embedded SMS notification
//! 3. Publish it as a domain event on the bus
//!
//! Stateless across invocations; any failure propagates to the runtime
//! as an invocation fault.

use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use crate::bus::EventBus;
use crate::envelope::SnsEnvelope;
use crate::error::Result;
use crate::event::DomainEvent;

/// Invocation result reported back to the platform.
#[derive(Debug, Clone, Serialize)]
pub struct RelayOutcome {
    result: RelayStatus,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
enum RelayStatus {
    Succeeded,
}

impl RelayOutcome {
    fn succeeded() -> Self {
        Self {
            result: RelayStatus::Succeeded,
        }
    }
}

/// Relays one inbound SMS notification per invocation to the event bus.
#[derive(Clone)]
pub struct NotificationRelay {
    bus: Arc<dyn EventBus>,
}

impl NotificationRelay {
    pub fn new(bus: Arc<dyn EventBus>) -> Self {
        Self { bus }
    }

    /// Handle one invocation: decode, transform, publish.
    pub async fn handle(&self, envelope: SnsEnvelope) -> Result<RelayOutcome> {
        let notification = envelope.first_notification()?;
        let event = DomainEvent::from(notification);

        info!(phone_number = %event.phone_number, "Relaying SMS response");
        self.bus.publish(&event).await?;

        Ok(RelayOutcome::succeeded())
    }
}
