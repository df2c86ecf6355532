use std::sync::Arc;

use lambda_runtime::{LambdaEvent, run, service_fn};
use sms_response_relay::bus::EventBridgeBus;
use sms_response_relay::config::RelayConfig;
use sms_response_relay::envelope::SnsEnvelope;
use sms_response_relay::relay::NotificationRelay;

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .without_time()
        .init();

    let config = RelayConfig::from_env();

    // Credentials and region resolve from the ambient Lambda environment.
    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let client = aws_sdk_eventbridge::Client::new(&aws_config);

    let relay = NotificationRelay::new(Arc::new(EventBridgeBus::new(
        client,
        config.event_bus_name,
    )));

    run(service_fn(move |event: LambdaEvent<SnsEnvelope>| {
        let relay = relay.clone();
        async move {
            let outcome = relay.handle(event.payload).await?;
            Ok::<_, lambda_runtime::Error>(outcome)
        }
    }))
    .await
}
