use anyhow::Result;
use clap::Parser;
use listo::cli::Cli;
use listo::tui::state::AppState;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    listo::logging::init()?;

    let config = cli.load_config()?;
    let store = cli.initial_store(&config, AppState::today());
    listo::tui::run(store, config).await
}
