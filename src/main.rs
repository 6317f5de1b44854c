use clap::Parser;
use bearer_auth::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Serve(args) => cli::serve::run(args).await,
        Command::Issue(args) => cli::token::issue(args),
        Command::Verify(args) => cli::token::verify(args),
    }
}
