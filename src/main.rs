use anyhow::Result;
use tabia_cli::Console;
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    info!("tabia starting");

    Console::new().run()?;

    Ok(())
}
