/// Quick connectivity check against the Relayo API
///
/// Lists the applications and WhatsApp instances visible to a token and,
/// when an instance id is given, reads that instance back.
///
/// To run this demo:
/// ```bash
/// cargo run -p quick-test -- <token> [instance_id]
/// ```
/// The token and instance id may also come from `RELAYO_TOKEN` and
/// `RELAYO_INSTANCE_ID`.
use relayo_client::prelude::*;
use serde_json::json;
use std::env;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    setup_logger();

    let mut args = env::args().skip(1);
    let token = args.next().or_else(|| get_env_or_none("RELAYO_TOKEN"));
    let instance_id = args
        .next()
        .or_else(|| get_env_or_none("RELAYO_INSTANCE_ID"));

    let Some(token) = token else {
        error!("Usage: quick-test <token> [instance_id] (or set RELAYO_TOKEN)");
        std::process::exit(1);
    };

    let client = match RelayoClient::from_env() {
        Ok(client) => client,
        Err(e) => {
            error!("Could not build client: {}", e);
            std::process::exit(1);
        }
    };
    client.set_token(token);
    info!("Using {}", client.config().base_url());

    match client.applications().list_paginated(1, 5).await {
        Ok(apps) => info!("Applications: {}", apps),
        Err(e) => report(&e),
    }

    match client.whatsapp().list(&json!({})).await {
        Ok(instances) => info!("WhatsApp instances: {}", instances),
        Err(e) => report(&e),
    }

    if let Some(id) = instance_id {
        match client.whatsapp().get(&id).await {
            Ok(instance) => info!("Instance {}: {}", id, instance),
            Err(e) => report(&e),
        }
    }
}

fn report(e: &AppError) {
    match e {
        AppError::Authentication { .. } => error!("Token rejected: {}", e),
        AppError::RateLimitExceeded { .. } => warn!("Slow down: {}", e),
        AppError::Api { code: 0, .. } => error!("API unreachable: {}", e),
        _ => error!("Request failed: {}", e),
    }
}
