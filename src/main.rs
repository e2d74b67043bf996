use anyhow::{Context, Result};
use clap::Parser;

use ascii_cat_client::{Animator, CatAnimation, TerminalSurface};
use ascii_cat_utils::cli::CliArgs;
use ascii_cat_utils::CancellationToken;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let _args = CliArgs::parse();

    if let Err(err) = run() {
        log::error!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cancel = CancellationToken::new();
    cancel
        .install_signal_handlers()
        .context("failed to listen for Ctrl-C")?;

    let cat = CatAnimation::default_cat().context("failed to load cat frames")?;
    let surface = TerminalSurface::stdout();
    log::debug!("Clearing with {:?}", surface.clear_strategy());

    let mut animator = Animator::new(cat, surface, cancel);
    animator.run().context("animation stopped unexpectedly")?;
    Ok(())
}
