//! EagleWings server binary.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use eaglewings::adapters::drone::{driver_from_config, SimulatedDrone};
use eaglewings::adapters::http::{build_router, ChatHandlers};
use eaglewings::adapters::memory::InMemoryIdentityStore;
use eaglewings::adapters::postgres::PostgresIdentityStore;
use eaglewings::adapters::process::{CommandAttackLauncher, CommandDetectionLauncher};
use eaglewings::adapters::responder::PatternResponder;
use eaglewings::application::handlers::{
    ActionDispatcher, ConversationEngine, ConversationPorts, DroneLink,
};
use eaglewings::config::{AppConfig, ServerConfig, SubsystemsConfig};
use eaglewings::ports::{AttackResultStore, DetectionStore, UserDirectory};

type Stores = (
    Arc<dyn DetectionStore>,
    Arc<dyn UserDirectory>,
    Arc<dyn AttackResultStore>,
);

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);
    config.validate()?;

    let (detections, users, attack_results) = match &config.database {
        Some(database) => {
            tracing::info!("using PostgreSQL store");
            shared(PostgresIdentityStore::connect(database).await?)
        }
        None => {
            tracing::info!("no database configured; using in-memory store");
            shared(InMemoryIdentityStore::new())
        }
    };

    let responder = Arc::new(match &config.responder.rules_path {
        Some(path) => PatternResponder::from_path(path).await?,
        None => PatternResponder::empty(),
    });
    tracing::info!(categories = responder.category_count(), "responder rules loaded");

    let driver = driver_from_config(&config.drone)?;
    let link = Arc::new(DroneLink::new(driver, Arc::new(SimulatedDrone::new())));
    if config.drone.connect_on_startup {
        link.connect().await;
    }
    let connected = link.is_connected().await;
    tracing::info!(driver = link.driver_name(), connected, "drone link ready");

    let (attack, detection) = launchers(&config.subsystems);
    let ports = ConversationPorts {
        detections,
        users,
        attack_results,
        responder: responder.clone(),
        predicates: responder,
        attack: Arc::new(attack),
    };
    let engine = Arc::new(ConversationEngine::new(ports, ActionDispatcher::new(link)));

    let app = build_router(ChatHandlers::new(engine, Arc::new(detection)), &config.server);
    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

fn init_tracing(server: &ServerConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&server.log_level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if server.is_production() {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn shared<S>(store: S) -> Stores
where
    S: DetectionStore + UserDirectory + AttackResultStore + 'static,
{
    let store = Arc::new(store);
    (store.clone(), store.clone(), store)
}

fn launchers(config: &SubsystemsConfig) -> (CommandAttackLauncher, CommandDetectionLauncher) {
    let attack = CommandAttackLauncher::new(&config.attack_command);
    let detection =
        CommandDetectionLauncher::new(&config.detection_command, config.detection_timeout());
    match &config.working_dir {
        Some(dir) => (attack.with_working_dir(dir), detection.with_working_dir(dir)),
        None => (attack, detection),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        return;
    }
    tracing::info!("shutting down");
}
