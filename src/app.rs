use crate::domain::store::ConfigError;
use crate::domain::types::{Configuration, DEFAULT_COUNT};

const DEFAULT_QUERY: &str =
    "I want an exciting adventure with interesting companions, like Fallout 4 or Outer Worlds.";

/// Application state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    /// No library loaded yet
    Idle,
    /// Fetching owned games from Steam
    LibraryLoading,
    /// Library in memory, recommendations available
    LibraryReady,
    /// Waiting on the model
    Recommending,
}

/// Editable form fields, in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    SteamId,
    SteamKey,
    ModelKey,
    Proxy,
    Query,
    Count,
}

impl Field {
    const ORDER: [Field; 6] = [
        Field::SteamId,
        Field::SteamKey,
        Field::ModelKey,
        Field::Proxy,
        Field::Query,
        Field::Count,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Field::SteamId => "Steam ID (64-bit)",
            Field::SteamKey => "Steam Web API Key",
            Field::ModelKey => "Gemini API Key",
            Field::Proxy => "Proxy (VPN) URL",
            Field::Query => "What do you want to play?",
            Field::Count => "Recommended game number",
        }
    }

    /// Where to get the value, shown next to the field
    pub fn hint(self) -> Option<&'static str> {
        match self {
            Field::SteamId => Some("https://steamid.io/"),
            Field::SteamKey => Some("https://steamcommunity.com/dev/apikey"),
            Field::ModelKey => Some("https://aistudio.google.com/app/apikey"),
            Field::Proxy => Some("e.g. http://127.0.0.1:7890"),
            Field::Query | Field::Count => None,
        }
    }

    pub fn is_secret(self) -> bool {
        matches!(self, Field::SteamKey | Field::ModelKey)
    }

    pub fn is_multiline(self) -> bool {
        matches!(self, Field::Query)
    }

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Error,
}

/// Modal message, dismissed with any key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

/// The main application
pub struct App {
    /// Current state
    pub state: AppState,
    /// Configuration form contents
    pub config: Configuration,
    /// Free-text play preference
    pub query: String,
    /// Raw contents of the count field
    pub count_input: String,
    /// Most recently fetched library
    pub games: Vec<String>,
    /// Recommendation text or error shown in the results pane
    pub result: String,
    /// Scroll offset for the results pane
    pub result_scroll: u16,
    /// Status line
    pub status: String,
    /// Focused form field
    pub focus: Field,
    /// Cursor position (in chars) within the text being edited
    pub cursor_pos: usize,
    /// Pending popup message
    pub notification: Option<Notification>,
    /// Path being typed in the prompt import popup
    pub import_path: Option<String>,
    /// Should quit
    pub should_quit: bool,
}

impl App {
    pub fn new(config: Configuration) -> Self {
        let mut app = Self {
            state: AppState::Idle,
            config,
            query: DEFAULT_QUERY.to_string(),
            count_input: DEFAULT_COUNT.to_string(),
            games: Vec::new(),
            result: String::new(),
            result_scroll: 0,
            status: "Ready to load.".to_string(),
            focus: Field::SteamId,
            cursor_pos: 0,
            notification: None,
            import_path: None,
            should_quit: false,
        };
        app.cursor_to_end();
        app
    }

    /// Start from whatever the config file gave us. A bad file is reported
    /// on the status line and the form starts empty.
    pub fn from_loaded(loaded: Result<Configuration, ConfigError>) -> Self {
        match loaded {
            Ok(values) => Self::new(values),
            Err(e) => {
                tracing::warn!(error = %e, "failed to load config, starting empty");
                let mut app = Self::default();
                app.status = format!("Failed to load config: {}", e);
                app
            }
        }
    }

    /// Library fetch can be started
    pub fn can_fetch(&self) -> bool {
        matches!(self.state, AppState::Idle | AppState::LibraryReady)
    }

    /// Recommendation can be requested
    pub fn can_recommend(&self) -> bool {
        self.state == AppState::LibraryReady && !self.games.is_empty()
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.state, AppState::LibraryLoading | AppState::Recommending)
    }

    pub fn field_text(&self, field: Field) -> &str {
        match field {
            Field::SteamId => &self.config.steam_id,
            Field::SteamKey => &self.config.steam_api_key,
            Field::ModelKey => &self.config.model_api_key,
            Field::Proxy => &self.config.proxy_url,
            Field::Query => &self.query,
            Field::Count => &self.count_input,
        }
    }

    fn field_text_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::SteamId => &mut self.config.steam_id,
            Field::SteamKey => &mut self.config.steam_api_key,
            Field::ModelKey => &mut self.config.model_api_key,
            Field::Proxy => &mut self.config.proxy_url,
            Field::Query => &mut self.query,
            Field::Count => &mut self.count_input,
        }
    }

    /// Text under the cursor: the import popup if open, else the focused field
    pub fn editing_text(&self) -> &str {
        match &self.import_path {
            Some(path) => path,
            None => self.field_text(self.focus),
        }
    }

    fn editing_text_mut(&mut self) -> &mut String {
        let focus = self.focus;
        if self.import_path.is_some() {
            self.import_path.get_or_insert_with(String::new)
        } else {
            self.field_text_mut(focus)
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
        self.cursor_to_end();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
        self.cursor_to_end();
    }

    pub fn cursor_to_end(&mut self) {
        self.cursor_pos = self.editing_text().chars().count();
    }

    /// Insert character at cursor
    pub fn insert_char(&mut self, c: char) {
        let cursor = self.cursor_pos;
        let text = self.editing_text_mut();
        let byte_idx = byte_index(text, cursor);
        text.insert(byte_idx, c);
        self.cursor_pos += 1;
    }

    /// Delete character before cursor
    pub fn delete_char(&mut self) {
        if self.cursor_pos == 0 {
            return;
        }
        let cursor = self.cursor_pos - 1;
        let text = self.editing_text_mut();
        let byte_idx = byte_index(text, cursor);
        if byte_idx < text.len() {
            text.remove(byte_idx);
        }
        self.cursor_pos = cursor;
    }

    /// Move cursor left
    pub fn cursor_left(&mut self) {
        self.cursor_pos = self.cursor_pos.saturating_sub(1);
    }

    /// Move cursor right
    pub fn cursor_right(&mut self) {
        if self.cursor_pos < self.editing_text().chars().count() {
            self.cursor_pos += 1;
        }
    }

    /// Replace the query and park the cursor after it
    pub fn set_query(&mut self, query: String) {
        self.query = query;
        if self.import_path.is_none() && self.focus == Field::Query {
            self.cursor_to_end();
        }
    }

    pub fn open_import(&mut self, start_dir: String) {
        self.import_path = Some(start_dir);
        self.cursor_to_end();
    }

    pub fn close_import(&mut self) {
        self.import_path = None;
        self.cursor_to_end();
    }

    pub fn notify_info(&mut self, message: impl Into<String>) {
        self.notification = Some(Notification {
            kind: NotificationKind::Info,
            message: message.into(),
        });
    }

    pub fn notify_error(&mut self, message: impl Into<String>) {
        self.notification = Some(Notification {
            kind: NotificationKind::Error,
            message: message.into(),
        });
    }

    /// Scroll the results, keeping at least the last line in view
    pub fn scroll_down(&mut self, lines: u16) {
        let last_line = u16::try_from(self.result.lines().count().saturating_sub(1))
            .unwrap_or(u16::MAX);
        self.result_scroll = self.result_scroll.saturating_add(lines).min(last_line);
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.result_scroll = self.result_scroll.saturating_sub(lines);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Configuration::default())
    }
}

fn byte_index(text: &str, char_idx: usize) -> usize {
    text.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}
