//! Static host for the built page. Serves the trunk output directory and
//! falls back to the entry document so anchor links always resolve.

use std::time::{SystemTime, UNIX_EPOCH};

use axum::Router;
use tower_http::services::{ServeDir, ServeFile};

use crate::content::{CONTACTS, PROJECTS, SKILLS};

const DEFAULT_PORT: u16 = 8080;
const DIST_DIR: &str = "dist";

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let port = std::env::var("PORT")
        .ok()
        .and_then(|value| value.trim().parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT);
    let bind_address = format!("0.0.0.0:{port}");

    let static_service = ServeDir::new(DIST_DIR)
        .not_found_service(ServeFile::new(format!("{DIST_DIR}/index.html")));
    let app = Router::new().fallback_service(static_service);

    log_event(
        "server_start",
        serde_json::json!({
            "port": port,
            "dist_dir": DIST_DIR,
            "projects": PROJECTS.len(),
            "skills": SKILLS.len(),
            "contacts": CONTACTS.len(),
        }),
    );

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    log_event(
        "server_listening",
        serde_json::json!({ "address": bind_address }),
    );
    axum::serve(listener, app).await?;
    Ok(())
}

fn log_event(event: &str, fields: serde_json::Value) {
    let mut payload = serde_json::Map::new();
    payload.insert(
        "ts".to_string(),
        serde_json::Value::Number(serde_json::Number::from(now_unix_seconds())),
    );
    payload.insert(
        "event".to_string(),
        serde_json::Value::String(event.to_string()),
    );

    if let serde_json::Value::Object(extra) = fields {
        for (key, value) in extra {
            payload.insert(key, value);
        }
    }

    println!("{}", serde_json::Value::Object(payload));
}

fn now_unix_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_secs())
        .unwrap_or(0)
}
