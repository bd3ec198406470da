use binmark::{cmd, Args, Config, Credentials, Logger, Subcommands};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let args = Args::parse();
    // Credentials may be kept in a `.env` file in the working directory.
    dotenvy::dotenv().ok();
    Logger::init(args.verbose);
    let config = Config::init(args.config.as_deref())?;

    run_app(args.subcommands, config).await?;

    Ok(())
}

async fn run_app(subcommands: Subcommands, config: Config) -> Result<(), anyhow::Error> {
    match subcommands {
        Subcommands::Inspect(args) => cmd::inspect(&config, &args).await?,
        Subcommands::List(args) => cmd::list(&config, Credentials::from_env()?, &args).await?,
        Subcommands::Show(args) => cmd::show(&config, Credentials::from_env()?, &args).await?,
        Subcommands::Add(args) => cmd::add(&config, Credentials::from_env()?, &args).await?,
        Subcommands::Delete(args) => cmd::delete(&config, Credentials::from_env()?, &args).await?,
    }

    Ok(())
}
