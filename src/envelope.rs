//! Inbound SNS envelope types.
//!
//! SNS delivers the SMS notification as a JSON string nested inside the
//! record's `Sns.Message` field, so extraction is a two-stage decode:
//! the envelope itself, then the embedded notification.

use serde::Deserialize;

use crate::error::EnvelopeError;

/// Top-level notification payload delivered to the invocation.
#[derive(Debug, Clone, Deserialize)]
pub struct SnsEnvelope {
    #[serde(rename = "Records")]
    pub records: Vec<SnsRecord>,
}

/// One entry within the envelope's list of notifications.
#[derive(Debug, Clone, Deserialize)]
pub struct SnsRecord {
    #[serde(rename = "Sns")]
    pub sns: SnsMessage,
}

/// The SNS payload carried by a record. `message` is a JSON-encoded string.
#[derive(Debug, Clone, Deserialize)]
pub struct SnsMessage {
    #[serde(rename = "Message")]
    pub message: String,
}

/// The SMS notification embedded in a record's message field.
///
/// Both fields are required; a message missing either fails the decode.
#[derive(Debug, Clone, Deserialize)]
pub struct SmsNotification {
    #[serde(rename = "originationNumber")]
    pub origination_number: String,
    #[serde(rename = "messageBody")]
    pub message_body: String,
}

impl SnsEnvelope {
    /// Decode the SMS notification from the first record.
    ///
    /// Multi-record envelopes are possible in principle; only the first
    /// record is used and the rest are ignored.
    pub fn first_notification(&self) -> Result<SmsNotification, EnvelopeError> {
        let record = self.records.first().ok_or(EnvelopeError::NoRecords)?;
        let notification = serde_json::from_str(&record.sns.message)?;
        Ok(notification)
    }
}
