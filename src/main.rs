use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use env_logger::Env;

use lexis::banner::{print_client_banner, print_server_banner};
use lexis::client::{self, HttpProcessor, Operation, Session};
use lexis::config::{Overrides, Settings};
use lexis::server::run_server;

#[derive(Parser)]
#[command(
    name = "lexis",
    version,
    about = "Side-by-side English text preprocessing."
)]
struct Cli {
    /// Settings file (TOML or YAML); defaults to ./lexis.{toml,yaml} if present
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP service
    Serve(ServeArgs),
    /// Talk to a running service
    Client(ClientArgs),
}

#[derive(Args)]
struct ServeArgs {
    /// Address to bind
    #[arg(long)]
    host: Option<String>,

    /// Port to bind
    #[arg(short, long)]
    port: Option<u16>,

    /// Directory holding downloaded resources
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

#[derive(Args)]
struct ClientArgs {
    /// Service base URL
    #[arg(short, long)]
    url: Option<String>,

    /// Run a single operation and exit (non-interactive)
    #[arg(short, long, value_enum)]
    op: Option<Operation>,

    /// Text for --op; defaults to the sample paragraph
    #[arg(short, long, requires = "op")]
    text: Option<String>,

    /// Print the raw JSON response instead of tables
    #[arg(long, default_value_t = false, requires = "op")]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref())?;

    match cli.command {
        Command::Serve(args) => {
            let settings = settings.apply(Overrides {
                host: args.host,
                port: args.port,
                data_dir: args.data_dir,
                ..Overrides::default()
            });
            print_server_banner(&settings);
            run_server(settings).await
        }
        Command::Client(args) => {
            let settings = settings.apply(Overrides {
                url: args.url,
                ..Overrides::default()
            });
            let processor = HttpProcessor::new(&settings.client)?;

            // Single operation mode
            if let Some(op) = args.op {
                return client::one_shot(&processor, op, args.text.as_deref(), args.json).await;
            }

            print_client_banner(&settings);
            client::interactive(Session::new(Box::new(processor))).await
        }
    }
}
