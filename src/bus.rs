//! Event bus abstraction and the EventBridge implementation.
//!
//! The relay takes the bus as an injected `Arc<dyn EventBus>`, so the
//! transformation logic stays testable without live network access.

use async_trait::async_trait;
use aws_sdk_eventbridge::types::PutEventsRequestEntry;
use tracing::debug;

use crate::error::PublishError;
use crate::event::{DETAIL_TYPE, DomainEvent, EVENT_SOURCE};

/// Outbound event bus seam.
#[async_trait]
pub trait EventBus: Send + Sync {
    /// Publish a single domain event. Exactly one outbound call per invocation.
    async fn publish(&self, event: &DomainEvent) -> Result<(), PublishError>;
}

/// EventBridge-backed bus.
///
/// Credentials and region come from the ambient AWS environment; the only
/// setting owned here is the optional bus name (`None` publishes to the
/// account's default bus).
pub struct EventBridgeBus {
    client: aws_sdk_eventbridge::Client,
    bus_name: Option<String>,
}

impl EventBridgeBus {
    pub fn new(client: aws_sdk_eventbridge::Client, bus_name: Option<String>) -> Self {
        Self { client, bus_name }
    }
}

#[async_trait]
impl EventBus for EventBridgeBus {
    async fn publish(&self, event: &DomainEvent) -> Result<(), PublishError> {
        let entry = PutEventsRequestEntry::builder()
            .detail(event.detail_json()?)
            .detail_type(DETAIL_TYPE)
            .source(EVENT_SOURCE)
            .set_event_bus_name(self.bus_name.clone())
            .build();

        let output = self
            .client
            .put_events()
            .entries(entry)
            .send()
            .await
            .map_err(|e| PublishError::RequestFailed {
                reason: e.to_string(),
            })?;

        // put_events can report per-entry failures on an otherwise
        // successful request.
        if output.failed_entry_count() > 0 {
            let rejected = output.entries().first();
            return Err(PublishError::EntryRejected {
                code: rejected
                    .and_then(|e| e.error_code())
                    .unwrap_or("unknown")
                    .to_string(),
                message: rejected
                    .and_then(|e| e.error_message())
                    .unwrap_or_default()
                    .to_string(),
            });
        }

        debug!(
            event_id = output
                .entries()
                .first()
                .and_then(|e| e.event_id())
                .unwrap_or_default(),
            "Event accepted by EventBridge"
        );
        Ok(())
    }
}
