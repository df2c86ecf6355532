//! Outbound domain event published to the event bus.

use serde::{Deserialize, Serialize};

use crate::envelope::SmsNotification;

/// Detail type attached to every published event.
pub const DETAIL_TYPE: &str = "smsResponse";

/// Source identifier attached to every published event.
pub const EVENT_SOURCE: &str = "com.salesforce.sms";

/// Normalized SMS response event.
///
/// Field values are copied verbatim from the inbound notification; no
/// timestamp or identifier is injected, so identical inputs always
/// produce identical events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainEvent {
    #[serde(rename = "PhoneNumber__c")]
    pub phone_number: String,
    #[serde(rename = "Message__c")]
    pub message: String,
}

impl DomainEvent {
    /// Encode the event as the JSON detail string the bus expects.
    pub fn detail_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl From<SmsNotification> for DomainEvent {
    fn from(notification: SmsNotification) -> Self {
        Self {
            phone_number: notification.origination_number,
            message: notification.message_body,
        }
    }
}
