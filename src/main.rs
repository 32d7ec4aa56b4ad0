use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event as CEvent, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    io,
    time::{Duration, Instant},
};
use tokio::sync::mpsc;
use yuris::{
    config::{get_config, initialize_config},
    errors::YurisResult,
    key_handlers,
    logging::init_logging,
    playback::PlaybackEvent,
    splash_screen::SplashScreenAction,
    ui, App, AppScreen,
};

enum Event {
    Input(CEvent),
    Tick,
}

#[tokio::main]
async fn main() -> YurisResult<()> {
    initialize_config()?;
    let _logger = init_logging(&get_config().log_level)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("{:?}", err);
    }

    Ok(())
}

/// Main loop of the application.
async fn run_app<B: Backend>(terminal: &mut Terminal<B>) -> YurisResult<()> {
    let (playback_tx, mut playback_rx) = mpsc::channel::<PlaybackEvent>(100);
    let mut app = App::new(playback_tx);
    app.logs.add("Yuris started");

    // Spawn a task to read user input and emit ticks
    let (tx, mut rx) = mpsc::channel::<Event>(100);
    let tick_rate = Duration::from_millis(get_config().tick_rate_ms);
    tokio::spawn(async move {
        let mut last_tick = Instant::now();
        loop {
            let timeout = Duration::from_millis(100);
            if event::poll(timeout).unwrap_or(false) {
                if let Ok(ev) = event::read() {
                    if tx.send(Event::Input(ev)).await.is_err() {
                        return;
                    }
                }
            }

            if last_tick.elapsed() >= tick_rate {
                if tx.send(Event::Tick).await.is_err() {
                    return;
                }
                last_tick = Instant::now();
            }
        }
    });

    loop {
        terminal.draw(|f| ui::draw(f, &mut app))?;

        tokio::select! {
            Some(event) = rx.recv() => {
                match event {
                    Event::Input(CEvent::Key(key)) => handle_key(key, &mut app),
                    Event::Input(_) => {}
                    // A tick only forces a redraw; the spinner advances there.
                    Event::Tick => {}
                }
            }
            Some(event) = playback_rx.recv() => {
                app.session.apply(event);
                app.refresh_status();
            }
            else => {
                break;
            }
        }

        if app.screen == AppScreen::Quit {
            break;
        }
    }

    Ok(())
}

fn handle_key(key: KeyEvent, app: &mut App) {
    if key.kind != KeyEventKind::Press {
        return;
    }
    match app.screen {
        AppScreen::Splash => {
            if let Some(action) = app.splash_screen.handle_input(key) {
                match action {
                    SplashScreenAction::StartChat(model) => {
                        app.session.select_model(model);
                        app.screen = AppScreen::Chat;
                    }
                    SplashScreenAction::Quit => app.screen = AppScreen::Quit,
                }
            }
        }
        AppScreen::Chat => key_handlers::handle_chat_input(key, app),
        AppScreen::QuitConfirm => key_handlers::handle_quit_confirm_input(key, app),
        AppScreen::Quit => {}
    }
}
