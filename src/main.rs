use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use cli::Cli;
use tokio::io::BufReader;

mod app;
mod check;
mod cli;
mod logger;
mod lookup;
mod nick;
mod presenter;
mod status;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Initiate logger
    logger::setup(cli.log, logger::level_for(cli.debug)).context("failed to setup logger")?;

    // Initiate lookup client and the app around it
    let lookup = lookup::HttpLookup::new(&cli.endpoint)?;
    let app = app::App::new(lookup, std::io::stdout());

    // One-shot modes
    if cli.generate {
        let (_, result) = app.generate(&mut rand::thread_rng()).await;
        return Ok(ExitCode::from(app::exit_status(&result)));
    }
    if let Some(name) = cli.name {
        let result = app.check(&name).await;
        return Ok(ExitCode::from(app::exit_status(&result)));
    }

    // Interactive prompt
    app.run(BufReader::new(tokio::io::stdin())).await?;
    Ok(ExitCode::SUCCESS)
}
