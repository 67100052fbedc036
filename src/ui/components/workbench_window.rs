use crate::errors::Error;
use crate::state::AppState;
use crate::ui::components::{EditorPanel, ResultsPanel};
use crate::ui::widgets::SplitView;
use crate::ui::{Component, View};
use egui::Context;

/// Editor above or beside the results, split by a draggable divider.
#[derive(Default)]
pub struct WorkbenchWindow {
    editor: EditorPanel,
    results: ResultsPanel,
}

impl Component for WorkbenchWindow {
    fn show(&mut self, ctx: &Context, state: &mut AppState) -> Result<(), Error> {
        egui::CentralPanel::default().show(ctx, |ui| {
            let orientation = state.prefs.orientation;
            let mut bounds = state.prefs.split;

            SplitView::new(orientation, &mut bounds).show(
                ui,
                state,
                |ui, state| self.editor.ui(ui, state),
                |ui, state| self.results.ui(ui, state),
            );

            state.prefs.split = bounds;
        });
        Ok(())
    }
}
