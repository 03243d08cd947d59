use lottoview::application::controller::DashboardController;
use lottoview::application::fetcher::DataFetcher;
use lottoview::config::Config;
use lottoview::infrastructure::factory::ServiceFactory;
use lottoview::interfaces::ui::{DashboardApp, configure_fonts};

use std::sync::Arc;
use tracing::{Level, info};
use tracing_subscriber::prelude::*;

fn main() -> anyhow::Result<()> {
    // 0. Load Env (before starting anything)
    dotenvy::dotenv().ok();

    // 1. Setup Logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    info!("Initializing Lotto Prediction Dashboard...");

    // 2. Load Config
    let config = Config::from_env()?;

    // 3. Create Tokio Runtime in a background thread
    let (handle_tx, handle_rx) = crossbeam_channel::bounded(1);

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .expect("Failed to build Tokio runtime");

        let _ = handle_tx.send(rt.handle().clone());
        info!("Background Runtime Started.");

        // Keep the runtime alive for the lifetime of the process.
        rt.block_on(std::future::pending::<()>());
    });

    let handle = handle_rx
        .recv()
        .map_err(|_| anyhow::anyhow!("Background runtime exited before start"))?;

    // 4. Wire the controller
    let source = ServiceFactory::create_data_source(&config);
    let fetcher = Arc::new(DataFetcher::new(source));
    let controller = DashboardController::new(fetcher, handle, &config.display);
    let font_path = config.display.font_path.clone();

    // 5. Run UI (Blocks Main Thread)
    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 900.0])
            .with_title("Lotto Prediction Dashboard"),
        ..Default::default()
    };

    eframe::run_native(
        "Lotto Prediction Dashboard",
        native_options,
        Box::new(move |cc| {
            configure_fonts(&cc.egui_ctx, font_path.as_deref());
            Ok(Box::new(DashboardApp::new(controller)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Eframe error: {}", e))?;

    Ok(())
}
