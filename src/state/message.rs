use crate::errors::Error;
use crate::i18n::Language;
use crate::state::preferences::Theme;
use std::sync::Arc;

pub enum Message {
    Event(Arc<Event>),
    ToggleSidebar,
    OpenSettings,
}

pub enum Event {
    SelectQuery(u64),
    CreateQuery,
    SaveQuery(String),
    RenameQuery(u64, String),
    DeleteQuery(u64),
    RunQuery,
    ShowToast(String),
    ShowError(Error),
    SetLanguage(Language),
    SetTheme(Theme),
    ToggleTheme,
    ToggleSplitOrientation,
    SetRowsPerChunk(usize),
}
