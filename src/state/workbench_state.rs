use crate::state::results_loader::ResultsLoader;

/// Editor text and results visibility for the currently selected query.
/// Rebuilt whenever the selection changes.
#[derive(Default)]
pub struct WorkbenchState {
    pub editor_text: String,
    pub results_visible: bool,
    pub results: ResultsLoader,
}
