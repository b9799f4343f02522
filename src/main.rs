mod config;
mod controller;
mod logging;
mod model;
mod view;

#[cfg(test)]
mod test_utils;

use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::Mutex;

use config::Config;
use controller::AppController;
use model::{AppModel, Catalog};
use view::AppView;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::load()?;

    if let Err(e) = logging::init_logging(&config.log_dir) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::info!("=== Rhythmic Music Starting ===");

    let catalog = match &config.catalog_path {
        Some(path) => Catalog::load(path)?,
        None => Catalog::embedded().context("built-in catalog is invalid")?,
    };
    tracing::info!(songs = catalog.len(), "Catalog ready");

    let model = Arc::new(Mutex::new(AppModel::new(Arc::new(catalog), config.storefront)));
    let controller = AppController::new(model.clone());

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, model, controller, config.tick_rate()).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        tracing::error!(error = ?err, "Application error");
    }

    tracing::info!("Rhythmic Music shutting down");
    res
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    model: Arc<Mutex<AppModel>>,
    controller: AppController,
    tick_rate: Duration,
) -> Result<()> {
    loop {
        let should_quit = {
            let model_guard = model.lock().await;
            let sections = model_guard.sections();
            let trending = model_guard.trending();
            let playback = model_guard.get_playback_info();

            terminal.draw(|f| {
                AppView::render(f, &playback, model_guard.get_ui_state(), &sections, &trending);
            })?;

            model_guard.should_quit()
        };

        if should_quit {
            break;
        }

        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                controller.handle_key_event(key).await?;
            }
        }
    }

    Ok(())
}
