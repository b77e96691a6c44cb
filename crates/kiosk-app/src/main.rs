mod cli;
mod shell;

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

fn main() {
    kiosk_platform::install_panic_hook();

    let args = cli::parse();

    // Config is read before logging so its level can seed the filter.
    let loaded = kiosk_config::load_config(args.config.as_deref());

    let directive = args.log_directive(loaded.as_ref().ok());
    let filter = EnvFilter::from_default_env();
    let filter = match directive.parse() {
        Ok(d) => filter.add_directive(d),
        Err(e) => {
            eprintln!("Ignoring invalid log level {directive:?}: {e}");
            filter.add_directive(LevelFilter::INFO.into())
        }
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("kiosk v{} starting...", env!("CARGO_PKG_VERSION"));

    let mut config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        kiosk_config::KioskConfig::default()
    });
    args.apply_overrides(&mut config);
    if args.print_config {
        println!("{}", kiosk_config::config_to_json(&config));
        return;
    }
    tracing::info!(
        url = %config.main_view.start_url,
        width = config.main_view.width,
        height = config.main_view.height,
        "Config loaded"
    );

    if let Err(e) = kiosk_platform::ensure_dirs() {
        tracing::warn!("Failed to create directories: {e}");
    }

    #[cfg(target_os = "linux")]
    if let Err(e) = gtk::init() {
        tracing::error!("Failed to initialize GTK: {e}");
        return;
    }

    let event_loop = match EventLoop::new() {
        Ok(el) => el,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            return;
        }
    };
    let mut shell = shell::KioskShell::new(config);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut shell) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}
