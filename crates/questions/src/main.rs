mod config;
mod handlers;
mod state;
mod storage;

use lambda_runtime::{service_fn, Error, LambdaEvent};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::handlers::event::ApiGatewayEvent;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hexpolls_questions=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    let config = Config::from_env();

    // Wiring happens once, before the runtime polls for events; a missing
    // binding fails the process here instead of on first resolution.
    let state = AppState::from_config(&config).await?;

    tracing::info!(
        table = %config.table_name,
        region = %config.region,
        endpoint = config.endpoint_url.as_deref().unwrap_or("default"),
        "questions service wired"
    );

    lambda_runtime::run(service_fn(move |event: LambdaEvent<ApiGatewayEvent>| {
        let state = state.clone();
        async move { Ok::<_, Error>(handlers::dispatch(&state, event.payload).await) }
    }))
    .await
}
