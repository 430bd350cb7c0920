use clap::Parser;
use tarotbot::adapter::inbound::cli::{check, output, run, Cli, Commands};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    output::configure(cli.json, cli.color);

    let result = match &cli.command {
        Commands::Run(args) => run::execute(args).await,
        Commands::Check(arg) => check::execute(&arg.config),
    };

    if let Err(e) = result {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
