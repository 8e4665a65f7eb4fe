//! media-island - now-playing overlay entry point
//!
//! `run` (the default) starts the polling service and the foreground loop
//! with a headless window backend, reading gestures from stdin. The other
//! subcommands inspect or edit configuration and query the player once.

use std::{error::Error, process, sync::Arc};

use clap::Parser;
use media_island::{
    app::{AppCommand, IslandApp},
    cli::{self, Cli, Commands, ConfigCommand, formatting::format_error},
    config_store::ConfigStore,
    overlay::HeadlessWindow,
    services::media::{AppleScriptBridge, MediaPollingService, PlayerBridge, TransportControl},
    tracing_config,
};
use tokio::{
    io::{AsyncBufReadExt, BufReader},
    sync::mpsc,
};
use tracing::{Instrument, debug, info, info_span, warn};

const COMMAND_BUFFER: usize = 32;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let config_store = match &cli.config {
        Some(path) => ConfigStore::load_from(path)?,
        None => ConfigStore::load()?,
    };
    let log_level = config_store.get_current().general.log_level;

    match cli.command.unwrap_or(Commands::Run { log_file: false }) {
        Commands::Run { log_file } => {
            let _guard = if log_file {
                Some(tracing_config::init_with_file(log_level)?)
            } else {
                tracing_config::init(log_level)?;
                None
            };
            run_island(config_store)
                .instrument(info_span!("media_island"))
                .await?;
        }
        Commands::Config { action } => {
            tracing_config::init(log_level)?;
            let result = match action {
                ConfigCommand::Get { path } => cli::config::get(&config_store, &path),
                ConfigCommand::Set { path, value } => {
                    cli::config::set(&config_store, &path, &value)
                }
                ConfigCommand::Schema => cli::config::schema(),
            };
            finish(result);
        }
        Commands::PollOnce => {
            tracing_config::init(log_level)?;
            poll_once(config_store).await;
        }
    }

    Ok(())
}

fn finish(result: cli::CommandResult) {
    match result {
        Ok(output) => {
            if !output.trim().is_empty() {
                println!("{output}");
            }
        }
        Err(e) => {
            eprintln!("{}", format_error(&e.to_string()));
            process::exit(1);
        }
    }
}

async fn run_island(config_store: ConfigStore) -> Result<(), Box<dyn Error>> {
    info!("Starting media island");

    let polling_config = config_store.polling();
    let bridge: Arc<dyn PlayerBridge> = Arc::new(AppleScriptBridge::new(&polling_config));
    let polling = MediaPollingService::new(Arc::clone(&bridge), polling_config);
    let transport = TransportControl::new(bridge);

    if let Err(e) = config_store.start_file_watching() {
        warn!(error = %e, "Configuration changes will not be picked up live");
    }

    let mut app = IslandApp::new(config_store, HeadlessWindow::default(), &polling, transport)?;

    let (commands, receiver) = mpsc::channel(COMMAND_BUFFER);
    spawn_gesture_reader(commands.clone());
    spawn_shutdown_listener(commands);

    polling.start();
    app.run(receiver).await?;

    Ok(())
}

fn spawn_gesture_reader(commands: mpsc::Sender<AppCommand>) {
    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        loop {
            let line = match lines.next_line().await {
                Ok(Some(line)) => line,
                Ok(None) => {
                    debug!("Gesture input closed");
                    return;
                }
                Err(e) => {
                    warn!(error = %e, "Failed to read gesture input");
                    return;
                }
            };

            match cli::parse_gesture(&line) {
                Ok(Some(command)) => {
                    if commands.send(command).await.is_err() {
                        return;
                    }
                }
                Ok(None) => {}
                Err(e) => eprintln!("{}", format_error(&e.to_string())),
            }
        }
    });
}

fn spawn_shutdown_listener(commands: mpsc::Sender<AppCommand>) {
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl-C");
            return;
        }
        info!("Interrupted, shutting down");
        let _ = commands.send(AppCommand::Quit).await;
    });
}

async fn poll_once(config_store: ConfigStore) {
    let polling_config = config_store.polling();
    let bridge = Arc::new(AppleScriptBridge::new(&polling_config));
    let polling = MediaPollingService::new(bridge, polling_config);

    let result = match polling.poll_once().await.emission {
        Some(snapshot) => serde_json::to_string_pretty(&snapshot)
            .map_err(|e| cli::CliError::Output(e.to_string())),
        None => Err(cli::CliError::Output(
            "player query failed, see log output for details".to_string(),
        )),
    };
    finish(result);
}
