//! Mock image endpoint for exercising the status waiter by hand.
//!
//! Serves `GET /v2/images/<id>` and walks each image through the lifecycle
//! `queued` -> `saving` -> `active`, advancing one step per poll. Pass
//! `?active_after=N` to change how many polls it takes to go active.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use serde_json::json;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use warp::Filter;

/// Polls before an image goes active unless overridden per request.
const DEFAULT_ACTIVE_AFTER: usize = 3;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let port = 3030;
    let poll_counts: Arc<Mutex<HashMap<String, usize>>> = Arc::new(Mutex::new(HashMap::new()));

    let images = warp::path!("v2" / "images" / String)
        .and(warp::query::<HashMap<String, String>>())
        .map(move |image_id: String, params: HashMap<String, String>| {
            let polls = {
                let mut counts = poll_counts.lock().expect("poll counter lock");
                let seen = counts.entry(image_id.clone()).or_insert(0);
                *seen += 1;
                *seen
            };

            let active_after = params
                .get("active_after")
                .and_then(|raw| raw.parse::<usize>().ok())
                .unwrap_or(DEFAULT_ACTIVE_AFTER);

            let status = if polls >= active_after {
                "active"
            } else if polls > 1 {
                "saving"
            } else {
                "queued"
            };

            info!(target: "mock_server", image_id = %image_id, polls, status, "serving status");
            warp::reply::json(&json!({ "id": image_id, "status": status }))
        });

    let (addr, server) =
        warp::serve(images).bind_with_graceful_shutdown(([127, 0, 0, 1], port), async {
            signal::ctrl_c().await.expect("install ctrl-c handler");
            info!(target: "mock_server", "shutdown signal received");
        });

    info!(target: "mock_server", "listening on http://{}", addr);
    server.await;

    Ok(())
}

fn init_tracing() {
    let fmt_layer = fmt::layer().with_target(true).with_level(true);
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}
