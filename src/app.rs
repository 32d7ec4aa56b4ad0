use crate::config::get_config;
use crate::log_view::LogView;
use crate::models::ModelId;
use crate::playback::PlaybackEvent;
use crate::session::ChatSession;
use crate::splash_screen::SplashScreen;
use crate::status_indicator::{Activity, StatusIndicator};
use tokio::sync::mpsc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppScreen {
    Splash,
    Chat,
    QuitConfirm,
    Quit,
}

pub struct App {
    pub screen: AppScreen,
    pub session: ChatSession,
    pub input: String,
    pub chat_scroll: u16,
    pub logs_scroll: u16,
    pub logs: LogView,
    pub status_indicator: StatusIndicator,
    pub splash_screen: SplashScreen,
    pub thinking_expanded: bool,
    pub playback_tx: mpsc::Sender<PlaybackEvent>,
}

impl App {
    pub fn new(playback_tx: mpsc::Sender<PlaybackEvent>) -> App {
        let config = get_config();
        App {
            screen: AppScreen::Splash,
            session: ChatSession::new(ModelId::Qwen, &config),
            input: String::new(),
            chat_scroll: 0,
            logs_scroll: 0,
            logs: LogView::new(),
            status_indicator: StatusIndicator::new(),
            splash_screen: SplashScreen::new(),
            thinking_expanded: false,
            playback_tx,
        }
    }

    // Scroll offsets count lines up from the newest output; the view follows
    // the bottom at offset 0.
    pub fn scroll_up(&mut self) {
        self.chat_scroll = self.chat_scroll.saturating_add(1);
    }

    pub fn scroll_down(&mut self) {
        self.chat_scroll = self.chat_scroll.saturating_sub(1);
    }

    pub fn logs_scroll_up(&mut self) {
        self.logs_scroll = self.logs_scroll.saturating_add(1);
    }

    pub fn logs_scroll_down(&mut self) {
        self.logs_scroll = self.logs_scroll.saturating_sub(1);
    }

    /// Keeps the spinner/status line in step with the session after each
    /// playback event.
    pub fn refresh_status(&mut self) {
        let activity = if self.session.is_thinking() {
            Activity::Thinking
        } else if self.session.is_typing() {
            Activity::Typing
        } else if self.session.is_busy() {
            Activity::Waiting
        } else {
            Activity::Idle
        };
        self.status_indicator.set_activity(activity);
    }
}
