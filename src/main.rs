//! apigw-audit - audit how API Gateway REST APIs secure their resources

use clap::{CommandFactory, Parser};
use clap_complete::CompleteEnv;
use log::LevelFilter;

mod audit;
mod cli;
mod client;
mod config;
mod error;
mod output;

use cli::{Cli, Commands, GlobalOptions};
use error::Result;

#[tokio::main]
async fn main() {
    CompleteEnv::with_factory(Cli::command).complete();

    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Audit(args) => cli::audit::run(&opts, &args).await,
        Commands::Init => cli::init::run(&opts),
        Commands::Status => cli::status::run(&opts),
        Commands::Version => {
            println!("apigw-audit version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Completion { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "apigw-audit",
                &mut std::io::stdout(),
            );
            Ok(())
        }
    }
}

/// Errors only by default, everything with `--debug`; `RUST_LOG` refines either.
fn init_logging(debug: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("error"));
    if debug {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}
