use std::process::exit;
use std::sync::Arc;
use std::time::Duration;
use clap::Parser;
use log::{error, info, warn};
use tokio::runtime::Builder;
use cluster_sync::client::enums::cluster_event::ClusterEvent;
use cluster_sync::client::structs::cluster_client::ClusterClient;
use cluster_sync::common::common::{report_deadlocks, setup_logging};
use cluster_sync::config::enums::configuration_error::ConfigurationError;
use cluster_sync::config::structs::configuration::Configuration;
use cluster_sync::host::structs::headless_host::HeadlessHost;
use cluster_sync::structs::Cli;

fn load_config(args: &Cli) -> Result<Configuration, ConfigurationError> {
    let mut config = Configuration::load_from_file(&args.config, args.create_config)?;
    if let Some(name) = &args.cluster_name {
        config.cluster.name = name.clone();
    }
    if let Some(port) = args.udp_port {
        config.cluster.udp_port = port;
    }
    if let Some(address) = &args.echo_address {
        config.cluster.udp_echo_broadcast_address = address.clone();
    }
    if let Some(node_name) = &args.node_name {
        config.cluster.node_name = node_name.clone();
    }
    config.validate()?;
    Ok(config)
}

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(ConfigurationError::Created { .. }) => exit(0),
        Err(e) => {
            eprintln!("[ERROR] {}", e);
            exit(101)
        }
    };

    if let Err(e) = setup_logging(&config) {
        eprintln!("Failed to initialize logging: {}", e);
        exit(101)
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let host = Arc::new(HeadlessHost::new());
            let (client, mut events) = match ClusterClient::start(config.cluster.clone(), host).await {
                Ok(started) => started,
                Err(e) => {
                    error!("[BOOT] Unable to start the cluster client: {}", e);
                    exit(1)
                }
            };

            if let Some(server) = &args.server
                && let Err(e) = client.connect(server)
            {
                error!("[BOOT] Unable to connect to {}: {}", server, e);
            }

            let mut deadlocks = tokio::time::interval(Duration::from_secs(30));
            loop {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {
                        info!("Shutdown request received, shutting down...");
                        break;
                    }
                    _ = deadlocks.tick(), if args.deadlock_check => {
                        report_deadlocks();
                    }
                    event = events.recv() => match event {
                        Some(ClusterEvent::ShutdownRequested { cluster }) => {
                            info!("[BOOT] Cluster \"{}\" asked to shut down", cluster);
                            break;
                        }
                        Some(event) => info!("[BOOT] {:?}", event),
                        None => {
                            warn!("[BOOT] Event stream ended");
                            break;
                        }
                    }
                }
            }

            client.shutdown().await;
            info!("Server shutting down completed");
            Ok(())
        })
}
