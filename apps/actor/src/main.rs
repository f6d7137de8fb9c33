//! Command-line entry point: run a player actor against a game server.

use clap::Parser;
use splendor_actor::{create_actor, ClientConfig, ClientError, WebSocketActorClient};
use tracing::{error, info};

mod telemetry;

#[derive(Parser)]
#[command(name = "splendor-actor")]
#[command(about = "WebSocket player actor for a Splendor game server")]
struct Args {
    /// Server URL; falls back to the RPC_URL environment variable
    #[arg(long)]
    url: Option<String>,

    /// Authentication secret; falls back to the file named by the
    /// CLIENT_SECRET environment variable
    #[arg(long)]
    secret: Option<String>,

    /// Actor strategy
    #[arg(long, default_value = "random")]
    actor: String,

    /// RNG seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,
}

async fn run(args: Args) -> Result<(), ClientError> {
    let Some(actor) = create_actor(&args.actor, args.seed) else {
        return Err(ClientError::config(format!(
            "unknown actor kind: {}",
            args.actor
        )));
    };
    let config = ClientConfig::resolve(args.url, args.secret)?;
    let mut client = WebSocketActorClient::connect(config, actor).await?;
    client.run().await
}

#[tokio::main]
async fn main() {
    telemetry::init_tracing();
    let args = Args::parse();

    match run(args).await {
        Ok(()) => info!("session finished"),
        Err(err) => {
            error!(%err, "session failed");
            std::process::exit(1);
        }
    }
}
