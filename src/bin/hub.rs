use std::net::SocketAddr;

use clap::Parser;
use status_board::{
    actors::{refresher::SchedulerHandle, registry::RegistryHandle},
    api::{ApiConfig, ApiState, spawn_api_server},
    config::{Config, read_config_file},
    simulator::MonitoringSimulator,
    storage::Store,
};
use tracing::{debug, info, level_filters::LevelFilter, trace};
use tracing_subscriber::{filter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Clone, Parser)]
struct Args {
    /// Config file (JSON)
    #[arg(short)]
    file: Option<String>,

    /// Port to listen on (overrides config and PORT)
    #[arg(short, long)]
    port: Option<u16>,

    /// Log level for the board and hub targets
    #[arg(long, default_value_t = LevelFilter::DEBUG)]
    log_level: LevelFilter,
}

fn init(level: LevelFilter) {
    let filter = filter::Targets::new().with_targets(vec![
        ("status_board", level),
        ("status_hub", level),
        ("tower_http", level),
    ]);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .compact()
                .with_ansi(false),
        )
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let args = Args::parse();
    init(args.log_level);
    trace!("started with args: {args:?}");

    let config = match &args.file {
        Some(path) => read_config_file(path)?,
        None => Config::default(),
    };

    let storage = config.storage();
    debug!("storage: {storage:?}");
    let store = Store::new(storage.into_backend());

    // seed on startup so a broken data file fails fast
    let document = store.load().await?;
    info!("loaded {} services", document.services.len());

    let simulation = config.simulation();
    let registry = RegistryHandle::spawn(
        store,
        MonitoringSimulator::new(simulation.change_probability),
    );

    let scheduler = simulation.refresh_interval_secs.map(|secs| {
        info!("automatic refresh every {secs}s");
        SchedulerHandle::spawn(registry.clone(), secs)
    });

    let api_config = ApiConfig {
        bind_addr: SocketAddr::new(
            config.bind_addr(),
            args.port.unwrap_or_else(|| config.port()),
        ),
        enable_cors: config.api().enable_cors,
    };
    let addr = spawn_api_server(api_config, ApiState::new(registry.clone())).await?;
    info!("health check at http://{addr}/health");

    tokio::signal::ctrl_c().await?;
    info!("shutting down");

    if let Some(scheduler) = scheduler {
        scheduler.shutdown().await;
    }
    if let Some(stats) = registry.get_stats().await {
        info!("registry stats: {stats:?}");
    }
    registry.shutdown().await;

    Ok(())
}
