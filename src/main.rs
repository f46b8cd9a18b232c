use clap::Parser;
use timeip_ws::{app::App, init::settings::Settings};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Reports the current UTC time and the caller's IP address
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// HTTP port, overrides the PORT environment variable
    #[arg(short, long)]
    port: Option<u16>,
    /// Config file path
    #[arg(short, long)]
    config_file: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "timeip_ws=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = Settings::from_env(args.config_file, args.port)?;
    settings.print();

    if let Err(e) = App::new(settings).serve().await {
        tracing::error!(%e, "Server exited with error");
        return Err(e.into());
    }

    tracing::info!("Server exited");
    Ok(())
}
