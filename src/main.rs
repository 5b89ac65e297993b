mod backend;
mod cart;
mod common;
mod config;
mod error;
mod session;
mod sim;
mod storage;
mod ui;

use clap::Parser;
use dotenvy::dotenv;
use tokio::sync::mpsc;

use backend::{BackendClient, DeliveryApi};
use session::StoredIdentityProvider;
use storage::{Database, DocumentStore};
use ui::SuperApp;

#[derive(Parser)]
#[command(name = "superapp", version, about = "Multi-service consumer app client")]
struct Cli {
    /// Path to JSON config file
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH, value_name = "FILE")]
    config: String,
}

#[tokio::main]
async fn main() -> Result<(), eframe::Error> {
    dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();
    let mut app_config = config::load_config(&cli.config);
    app_config.apply_env();

    let database = match Database::open(app_config.db_path.as_deref()) {
        Ok(db) => db,
        Err(err) => {
            log::error!("Failed to open database ({err}); falling back to in-memory storage");
            match Database::in_memory() {
                Ok(db) => db,
                Err(err) => {
                    log::error!("In-memory database unavailable: {err}");
                    return Ok(());
                }
            }
        }
    };

    // Identity resolves exactly once, before any screen exists.
    let session = {
        let provider = StoredIdentityProvider::new(&database);
        session::bootstrap(&provider, app_config.auth_token.as_deref())
    };
    log::info!("Session ready: user {} ({:?})", session.user_id, session.tier);

    // UI -> backend
    let (cmd_tx, cmd_rx) = mpsc::channel(100);
    // backend -> UI
    let (event_tx, event_rx) = mpsc::channel(100);

    let client = BackendClient::new(
        DocumentStore::new(database),
        DeliveryApi::new(app_config.delivery_host.clone()),
        session.clone(),
        app_config.app_id.clone(),
        event_tx,
        cmd_rx,
    );
    tokio::spawn(client.run());

    let options = eframe::NativeOptions::default();
    let mut event_rx = Some(event_rx);
    let cliente_id = app_config.cliente_id;

    eframe::run_native(
        "SuperApp",
        options,
        Box::new(move |cc| {
            let event_receiver = event_rx
                .take()
                .expect("SuperApp should only be initialized once");
            Ok(Box::new(SuperApp::new(
                cc,
                session.clone(),
                cliente_id,
                cmd_tx.clone(),
                event_receiver,
            )))
        }),
    )
}
