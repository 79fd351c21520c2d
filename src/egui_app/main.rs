/**
 * egui Native Desktop App - Main Entry Point
 *
 * Loads the configuration, then runs the picker app: landing screen, counterparty
 * search, login on 403, and the selected-counterparty screen.
 */
use counterparty::egui_app::theme::styles;
use counterparty::egui_app::{views, AppState, Config};
use eframe::egui;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = Config::load()?;
    tracing::info!("Directory server: {}", config.server_url());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 800.0])
            .with_min_inner_size([360.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Marché - Proposition",
        options,
        Box::new(|cc| {
            styles::apply_global_theme(&cc.egui_ctx);
            Ok(Box::new(PickerApp {
                state: AppState::new(config),
            }))
        }),
    )?;

    Ok(())
}

/// Main application state
struct PickerApp {
    state: AppState,
}

impl eframe::App for PickerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.tick();

        views::render_top_bar(ctx, &mut self.state);
        views::render_main_panel(ctx, &mut self.state);

        if self.state.is_busy() {
            ctx.request_repaint();
        }
    }
}
