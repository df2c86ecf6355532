//! End-to-end test of the relay against a realistic SNS delivery payload.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use sms_response_relay::bus::EventBus;
use sms_response_relay::envelope::SnsEnvelope;
use sms_response_relay::error::PublishError;
use sms_response_relay::event::DomainEvent;
use sms_response_relay::relay::NotificationRelay;

#[derive(Default)]
struct RecordingBus {
    published: Mutex<Vec<DomainEvent>>,
}

#[async_trait]
impl EventBus for RecordingBus {
    async fn publish(&self, event: &DomainEvent) -> Result<(), PublishError> {
        self.published.lock().unwrap().push(event.clone());
        Ok(())
    }
}

/// The full payload SNS actually delivers, extra fields and all.
const SNS_DELIVERY: &str = r#"{
  "Records": [
    {
      "EventSource": "aws:sns",
      "EventVersion": "1.0",
      "EventSubscriptionArn": "arn:aws:sns:us-east-1:123456789012:sms-inbound:deadbeef",
      "Sns": {
        "Type": "Notification",
        "MessageId": "95df01b4-ee98-5cb9-9903-4c221d41eb5e",
        "TopicArn": "arn:aws:sns:us-east-1:123456789012:sms-inbound",
        "Subject": null,
        "Message": "{\"originationNumber\":\"+15551234567\",\"destinationNumber\":\"+15557654321\",\"messageKeyword\":\"keyword_stop\",\"messageBody\":\"STOP\",\"inboundMessageId\":\"cae173d2-66b9-564c-8309-21f858e9fb84\",\"previousPublishedMessageId\":\"wJalrXUtnFEMI\"}",
        "Timestamp": "2020-01-02T12:45:07.000Z",
        "SignatureVersion": "1",
        "Signature": "tcc6faL2yUC6dgZdmrwh1Y4cGa/ebXEkAi6RibDsvpi+tE/1+82j...",
        "SigningCertUrl": "https://sns.us-east-1.amazonaws.com/SimpleNotificationService.pem",
        "UnsubscribeUrl": "https://sns.us-east-1.amazonaws.com/?Action=Unsubscribe"
      }
    }
  ]
}"#;

#[tokio::test]
async fn relays_a_real_sns_delivery() {
    let envelope: SnsEnvelope = serde_json::from_str(SNS_DELIVERY).unwrap();
    let bus = Arc::new(RecordingBus::default());
    let relay = NotificationRelay::new(bus.clone());

    let outcome = relay.handle(envelope).await.unwrap();

    let published = bus.published.lock().unwrap();
    assert_eq!(published.len(), 1);
    assert_eq!(
        serde_json::from_str::<serde_json::Value>(&published[0].detail_json().unwrap()).unwrap(),
        serde_json::json!({
            "PhoneNumber__c": "+15551234567",
            "Message__c": "STOP",
        })
    );
    assert_eq!(
        serde_json::to_value(&outcome).unwrap(),
        serde_json::json!({ "result": "SUCCEEDED" })
    );
}
