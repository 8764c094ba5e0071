mod config;
mod controller;
mod error;
mod logging;
mod model;
mod view;

use std::io;
use std::path::Path;
use std::sync::Arc;
use anyhow::Result;
use tokio::sync::Mutex;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};

use config::{AppConfig, INPUT_POLL_INTERVAL, LOG_DIR};
use controller::AppController;
use model::{AppModel, CatalogClient};
use view::AppView;

#[tokio::main]
async fn main() -> Result<()> {
    // Dropping the guard flushes buffered log lines
    let _log_guard = match logging::init_logging(Path::new(LOG_DIR)) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: Failed to initialize logging: {}", e);
            None
        }
    };

    tracing::info!("=== Product Gallery Starting ===");

    let config = AppConfig::default();
    let catalog = CatalogClient::new(config.catalog_url.clone());

    let mut app_model = AppModel::new(config)?;
    app_model.set_catalog_client(catalog);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let model = Arc::new(Mutex::new(app_model));
    let controller = AppController::new(model.clone());

    let res = run_app(&mut terminal, model, controller).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = ?err, "Application error");
    }

    // A fetch still in flight is dropped with the runtime
    tracing::info!("Product Gallery shutting down");
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    model: Arc<Mutex<AppModel>>,
    controller: AppController,
) -> io::Result<()> {
    loop {
        let (screen, ui_state, page_size, should_quit) = {
            let model_guard = model.lock().await;
            (
                model_guard.get_screen().await,
                model_guard.get_ui_state().await,
                model_guard.page_size(),
                model_guard.should_quit().await,
            )
        };

        if should_quit {
            break;
        }

        let mut frame_area = Rect::default();
        terminal.draw(|f| {
            frame_area = f.area();
            AppView::render(f, &screen, &ui_state, page_size);
        })?;

        if frame_area != ui_state.viewport {
            model.lock().await.set_viewport(frame_area).await;
        }

        if event::poll(INPUT_POLL_INTERVAL)? {
            let result = match event::read()? {
                Event::Key(key) => controller.handle_key_event(key).await,
                Event::Mouse(mouse) => controller.handle_mouse_event(mouse).await,
                _ => Ok(()),
            };
            if let Err(e) = result {
                tracing::warn!(error = %e, "Event handling failed");
            }
        }
    }

    Ok(())
}
