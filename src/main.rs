//! Quarto agent service
//!
//! Resolves the agent configuration from the environment, constructs the
//! configured agent, and serves it over HTTP.

use std::sync::{Arc, Mutex};

use log::{error, info};

use quarto::agent::build_agent;
use quarto::config::AgentConfig;
use quarto::server;

#[tokio::main]
async fn main() {
    env_logger::init();

    let config = match AgentConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    let agent = build_agent(&config);
    info!(
        "serving {} agent on port {}",
        config.kind.as_str(),
        config.port
    );

    let app = server::router(Arc::new(Mutex::new(agent)));

    axum::Server::bind(&format!("0.0.0.0:{}", config.port).parse().expect("valid bind address"))
        .serve(app.into_make_service())
        .await
        .expect("server failed");
}
