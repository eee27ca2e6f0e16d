mod cli;

use clap::Parser;

use tripnest::{App, AppConfig};

#[tokio::main]
async fn main() {
    let args = cli::Cli::parse();

    if let Err(error) = run(args).await {
        eprintln!("error: {error:#}");
        std::process::exit(1);
    }
}

async fn run(args: cli::Cli) -> anyhow::Result<()> {
    let config_path = match &args.config {
        Some(path) => path.clone(),
        None => AppConfig::default_path()?,
    };
    let config = AppConfig::load(&config_path).await?;

    cli::init_tracing(&config);

    let app = App::init(&config).await?;
    cli::dispatch(&app, args).await
}
