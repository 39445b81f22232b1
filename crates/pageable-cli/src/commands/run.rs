use std::io;
use std::path::Path;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use tracing::info;

use pageable_core::{AppConfig, Container, Pager};
use pageable_tui::{
    event::{AppEvent, EventHandler},
    input::handle_key_event,
    load_theme, ui, App, CellMetrics, TitleLocation, TracingHooks,
};

pub fn run(config: AppConfig, deck: &Path, page: Option<String>) -> Result<()> {
    let container = super::load_deck(deck)?;
    let title = super::deck_title(deck);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle(&title))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, config, container, title, page);

    // Restore terminal, also when the deck failed to mount
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: AppConfig,
    container: Container,
    title: String,
    page: Option<String>,
) -> Result<()> {
    let theme = load_theme(&config.ui.theme);
    let metrics = CellMetrics::default();

    let size = terminal.size()?;
    let regions = ui::regions(
        Rect::new(0, 0, size.width, size.height),
        ui::shows_controls(&config.pager),
        config.ui.show_status_bar,
    );

    let pager = Pager::builder(config.pager.clone())
        .with_hooks(TracingHooks)
        .with_location(TitleLocation::new(title, page.as_deref()))
        .mount(Some(container), metrics.viewport(regions.pages))?;

    let mut app = App::new(pager, config.ui.clone(), theme);
    app.metrics = metrics;

    let event_handler =
        EventHandler::with_animation_fps(config.ui.tick_rate_ms, config.ui.animation_fps);

    // checked at the end of each iteration to pick the next poll rate
    let mut needs_fast_update = false;

    loop {
        app.tick();
        terminal.draw(|frame| ui::draw(frame, &mut app))?;

        let event = if needs_fast_update {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };

        if let Some(event) = event {
            match event {
                AppEvent::Key(key) => {
                    app.status_message = None;
                    app.handle_action(handle_key_event(key));
                }
                AppEvent::Mouse(mouse) => app.handle_mouse(mouse),
                // the next draw picks up the new viewport
                AppEvent::Resize(_, _) | AppEvent::Tick => {}
            }
        }

        needs_fast_update = app.needs_fast_update();

        if app.should_quit {
            break;
        }
    }

    info!("Presentation closed");
    Ok(())
}
