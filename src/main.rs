mod cli;
mod codec;
mod config;
mod display;
mod lifetime;
mod window;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("layershell_demo=info,warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<(), iced_layershell::Error> {
    let args = cli::Args::parse();
    setup_tracing();

    let display = display::Display::query();
    let mut options = config::load_config(&display);
    config::apply_cli_overrides(&mut options, &args);

    info!(
        width = ?options.width,
        height = options.height,
        layer = codec::layer_to_name(options.layer),
        anchors = %codec::mask_to_names(options.anchors),
        margins = options.margins,
        scope = %options.scope,
        lifetime = ?options.lifetime,
        "starting layershell-demo"
    );

    window::run(options)
}
