use std::panic;

use strain_collector::{app::App, cleanup::cleanup, logging, settings};

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    // Restore the terminal before the panic report is printed.
    let report_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        cleanup();
        if let Some(location) = panic_info.location() {
            log::error!(
                "Panic occurred in file '{}' at line {}",
                location.file(),
                location.line(),
            );
        }
        report_hook(panic_info);
    }));

    let data_dir = settings::data_dir()?;
    logging::init(&data_dir)?;
    log::info!("Strain Collector start: {}", chrono::Local::now());

    let settings = settings::Settings::load_or_default(&data_dir.join(settings::SETTINGS_FILE));
    let mut app = App::new(settings)?;
    app.run().await
}
