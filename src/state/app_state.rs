use crate::errors::Error;
use crate::i18n::{I18N, LangKey, Language};
use crate::state::Message;
use crate::state::message::Event;
use crate::state::preferences::Preferences;
use crate::state::query_store::QueryStore;
use crate::state::workbench_state::WorkbenchState;
use crate::ui::widgets::{ErrorModal, SettingsPopup, Toast};
use crate::utils::load_fixture_queries;
use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, channel};

pub struct AppState {
    pub sidebar_open: bool,
    pub settings_popup: SettingsPopup,
    pub show_about: bool,
    pub error: ErrorModal,
    pub toasts: Vec<Toast>,
    pub store: QueryStore,
    pub workbench: WorkbenchState,
    pub prefs: Preferences,
    i18n: Arc<I18N>,
    sender: Sender<Message>,
    receiver: Receiver<Message>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        let (tx, rx) = channel();
        let prefs = Preferences::default();
        let i18n = Arc::new(I18N::new(prefs.language));

        let mut error = ErrorModal::default();
        let store = match load_fixture_queries() {
            Ok(queries) => QueryStore::seed(queries),
            Err(e) => {
                error = ErrorModal::from(Error::from(format!(
                    "{}: {e}",
                    i18n.get(LangKey::FixtureLoadFailed)
                )));
                QueryStore::default()
            }
        };

        let mut state = Self {
            sidebar_open: true,
            settings_popup: SettingsPopup::default(),
            show_about: false,
            error,
            toasts: Vec::new(),
            store,
            workbench: WorkbenchState::default(),
            prefs,
            i18n,
            sender: tx,
            receiver: rx,
        };
        state.sync_workbench();
        state
    }

    /// Drains at most one queued message per frame.
    pub fn get_state(&mut self) {
        if let Ok(message) = self.receiver.try_recv() {
            match message {
                Message::Event(e) => match &*e {
                    Event::SelectQuery(id) => {
                        let before = self.store.active_id();
                        self.store.select(*id);
                        // Reselecting the active row must not clobber edits.
                        if self.store.active_id() != before {
                            self.sync_workbench();
                        }
                    }
                    Event::CreateQuery => {
                        self.store.deselect();
                        self.sync_workbench();
                    }
                    Event::SaveQuery(text) => {
                        self.store.save(text);
                        self.sync_workbench();
                    }
                    Event::RenameQuery(id, title) => {
                        let fallback = self.i18n.get(LangKey::UntitledQuery);
                        self.store.rename(*id, title, &fallback);
                    }
                    Event::DeleteQuery(id) => {
                        let was_active = self.store.active_id() == Some(*id);
                        self.store.delete(*id);
                        if was_active {
                            self.sync_workbench();
                        }
                    }
                    Event::RunQuery => {
                        self.workbench.results.reset();
                        self.workbench.results_visible = true;
                    }
                    Event::ShowToast(text) => {
                        self.toasts.push(Toast::new(text.clone()));
                    }
                    Event::ShowError(e) => {
                        self.error = ErrorModal::from(e);
                    }
                    Event::SetLanguage(language) => {
                        self.set_language(language);
                    }
                    Event::SetTheme(theme) => {
                        self.prefs.theme = *theme;
                    }
                    Event::ToggleTheme => {
                        self.prefs.theme.toggle();
                    }
                    Event::ToggleSplitOrientation => {
                        self.prefs.toggle_orientation();
                    }
                    Event::SetRowsPerChunk(count) => {
                        self.prefs.rows_per_chunk = (*count).max(1);
                        self.workbench
                            .results
                            .set_chunk_size(self.prefs.rows_per_chunk);
                    }
                },
                Message::ToggleSidebar => {
                    self.sidebar_open = !self.sidebar_open;
                }
                Message::OpenSettings => {
                    self.settings_popup.sync(&self.prefs);
                    self.settings_popup.open = true;
                }
            }
        };
    }

    pub fn set_state(&mut self, msg: Message) {
        if let Err(e) = self.sender.send(msg) {
            self.error = ErrorModal::from(Error::from(e));
        }
    }

    pub fn get_sender(&self) -> Arc<Sender<Message>> {
        Arc::new(self.sender.clone())
    }

    pub fn i18n(&self) -> Arc<I18N> {
        self.i18n.clone()
    }

    pub fn set_language(&mut self, language: &Language) {
        self.prefs.language = *language;
        self.i18n = Arc::new(I18N::new(*language));
    }

    /// Mirrors the active query into the workbench. A selection change always
    /// hides the results pane until the next run.
    fn sync_workbench(&mut self) {
        match self.store.active() {
            Some(query) => {
                self.workbench.editor_text = query.text.clone();
                self.workbench.results.bind(query.rows.clone());
            }
            None => {
                self.workbench.editor_text.clear();
                self.workbench.results.clear();
            }
        }
        self.workbench.results_visible = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::preferences::{SplitOrientation, Theme};

    fn pump(state: &mut AppState, event: Event) {
        state.set_state(Message::Event(Arc::new(event)));
        state.get_state();
    }

    #[test]
    fn starts_with_first_fixture_selected() {
        let state = AppState::new();
        assert!(!state.store.is_empty());
        assert!(!state.error.open);

        let active = state.store.active().unwrap();
        assert_eq!(state.workbench.editor_text, active.text);
        assert!(!state.workbench.results_visible);
        assert_eq!(state.workbench.results.loaded(), 0);
    }

    #[test]
    fn select_rebinds_editor_and_hides_results() {
        let mut state = AppState::new();
        pump(&mut state, Event::RunQuery);
        assert!(state.workbench.results_visible);

        let second = state.store.iter().nth(1).unwrap().id;
        pump(&mut state, Event::SelectQuery(second));

        assert_eq!(state.store.active_id(), Some(second));
        let active = state.store.active().unwrap();
        assert_eq!(state.workbench.editor_text, active.text);
        assert_eq!(state.workbench.results.total(), active.rows.len());
        assert!(!state.workbench.results_visible);
    }

    #[test]
    fn reselecting_the_active_query_keeps_edits_and_results() {
        let mut state = AppState::new();
        let active = state.store.active_id().unwrap();
        pump(&mut state, Event::RunQuery);
        state.workbench.editor_text.push_str(" -- draft");
        let edited = state.workbench.editor_text.clone();

        pump(&mut state, Event::SelectQuery(active));

        assert_eq!(state.workbench.editor_text, edited);
        assert!(state.workbench.results_visible);
    }

    #[test]
    fn create_clears_selection_for_a_blank_editor() {
        let mut state = AppState::new();
        let before = state.store.len();
        pump(&mut state, Event::RunQuery);

        pump(&mut state, Event::CreateQuery);

        assert_eq!(state.store.len(), before);
        assert_eq!(state.store.active_id(), None);
        assert!(state.workbench.editor_text.is_empty());
        assert_eq!(state.workbench.results.total(), 0);
        assert!(!state.workbench.results_visible);
    }

    #[test]
    fn save_appends_and_selects_new_query() {
        let mut state = AppState::new();
        let before = state.store.len();

        pump(&mut state, Event::SaveQuery("SELECT 42;".into()));

        assert_eq!(state.store.len(), before + 1);
        assert_eq!(state.store.active().unwrap().text, "SELECT 42;");
        assert_eq!(state.workbench.editor_text, "SELECT 42;");
        assert_eq!(state.workbench.results.total(), 0);
    }

    #[test]
    fn run_marks_results_visible_and_resets_progress() {
        let mut state = AppState::new();
        state.workbench.results.load_next_chunk();

        pump(&mut state, Event::RunQuery);

        assert!(state.workbench.results_visible);
        assert_eq!(state.workbench.results.loaded(), 0);
    }

    #[test]
    fn run_without_active_query_shows_the_empty_data_state() {
        let mut state = AppState::new();
        let active = state.store.active_id().unwrap();
        pump(&mut state, Event::DeleteQuery(active));

        pump(&mut state, Event::RunQuery);

        assert!(state.workbench.results_visible);
        assert_eq!(state.workbench.results.total(), 0);
    }

    #[test]
    fn delete_active_blanks_workbench() {
        let mut state = AppState::new();
        let active = state.store.active_id().unwrap();

        pump(&mut state, Event::DeleteQuery(active));

        assert_eq!(state.store.active_id(), None);
        assert!(state.workbench.editor_text.is_empty());
        assert_eq!(state.workbench.results.total(), 0);
        assert!(!state.workbench.results_visible);
    }

    #[test]
    fn delete_inactive_keeps_workbench() {
        let mut state = AppState::new();
        let active = state.store.active_id().unwrap();
        let other = state.store.iter().find(|q| q.id != active).unwrap().id;

        pump(&mut state, Event::RunQuery);
        pump(&mut state, Event::DeleteQuery(other));

        assert_eq!(state.store.active_id(), Some(active));
        assert!(state.workbench.results_visible);
    }

    #[test]
    fn rename_blank_title_uses_untitled_fallback() {
        let mut state = AppState::new();
        let active = state.store.active_id().unwrap();

        pump(&mut state, Event::RenameQuery(active, "   ".into()));

        assert_eq!(state.store.get(active).unwrap().title, "Untitled Query");
    }

    #[test]
    fn toast_event_queues_toast() {
        let mut state = AppState::new();
        pump(&mut state, Event::ShowToast("Copied to Clipboard".into()));
        assert_eq!(state.toasts.len(), 1);
    }

    #[test]
    fn error_event_opens_modal() {
        let mut state = AppState::new();
        pump(&mut state, Event::ShowError(Error::from("boom")));
        assert!(state.error.open);
    }

    #[test]
    fn rows_per_chunk_updates_loader() {
        let mut state = AppState::new();
        pump(&mut state, Event::SetRowsPerChunk(7));
        assert_eq!(state.prefs.rows_per_chunk, 7);
        assert_eq!(state.workbench.results.chunk_size(), 7);
    }

    #[test]
    fn theme_and_orientation_events_update_preferences() {
        let mut state = AppState::new();

        pump(&mut state, Event::ToggleTheme);
        assert_eq!(state.prefs.theme, Theme::Light);

        pump(&mut state, Event::ToggleSplitOrientation);
        assert_eq!(state.prefs.orientation, SplitOrientation::Vertical);
        assert_eq!(state.prefs.split.size, 500.0);
    }

    #[test]
    fn toggle_sidebar_flips_flag() {
        let mut state = AppState::new();
        assert!(state.sidebar_open);
        state.set_state(Message::ToggleSidebar);
        state.get_state();
        assert!(!state.sidebar_open);
    }

    #[test]
    fn open_settings_marks_popup_open() {
        let mut state = AppState::new();
        state.set_state(Message::OpenSettings);
        state.get_state();
        assert!(state.settings_popup.open);
    }
}
