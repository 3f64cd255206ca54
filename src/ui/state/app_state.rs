use dioxus::prelude::*;

use crate::ui::state::notice::Notice;
use crate::ui::style::Theme;
use crate::usecase::services::import_service::LoadedDocument;

pub const READY_MESSAGE: &str = "Choose a spreadsheet to clean";

/// Plain values behind the UI signals.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub document: Option<LoadedDocument>,
    pub strip_input: String,
    pub notice: Notice,
    pub theme: Theme,
}

impl Session {
    pub fn initial() -> Self {
        Self {
            document: None,
            strip_input: String::new(),
            notice: Notice::info(READY_MESSAGE),
            theme: Theme::default(),
        }
    }
}

#[derive(Clone, Copy)]
pub struct AppState {
    pub document: Signal<Option<LoadedDocument>>,
    pub strip_input: Signal<String>,
    pub notice: Signal<Notice>,
    pub theme: Signal<Theme>,
}

impl AppState {
    pub fn new() -> Self {
        let Session {
            document,
            strip_input,
            notice,
            theme,
        } = Session::initial();
        Self {
            document: use_signal(move || document),
            strip_input: use_signal(move || strip_input),
            notice: use_signal(move || notice),
            theme: use_signal(move || theme),
        }
    }

    /// Returns every signal, theme included, to the initial session.
    pub fn reset(&mut self) {
        self.apply(Session::initial());
    }

    pub fn apply(&mut self, session: Session) {
        self.document.set(session.document);
        self.strip_input.set(session.strip_input);
        self.notice.set(session.notice);
        self.theme.set(session.theme);
    }
}
