use crate::i18n::{I18N, LangKey};
use crate::state::AppState;
use crate::ui::View;
use crate::ui::widgets::shimmer_rows;
use egui_extras::{Column, TableBuilder};
use std::sync::Arc;

#[derive(Default)]
pub struct ResultsPanel;

impl View for ResultsPanel {
    fn ui(&mut self, ui: &mut egui::Ui, state: &mut AppState) {
        ui.vertical(|ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.add_space(4.0);
                ui.label(
                    egui::RichText::new(format!("{}:", state.i18n().get(LangKey::Output)))
                        .strong()
                        .size(14.0),
                );
                if state.workbench.results_visible && state.workbench.results.total() > 0 {
                    ui.label(
                        egui::RichText::new(format!(
                            "({} / {})",
                            state.workbench.results.loaded(),
                            state.workbench.results.total()
                        ))
                        .weak()
                        .size(12.0),
                    );
                }
            });
            ui.add_space(6.0);

            egui::Frame::new()
                .fill(ui.visuals().extreme_bg_color)
                .stroke(ui.visuals().widgets.noninteractive.bg_stroke)
                .corner_radius(4.0)
                .inner_margin(8.0)
                .show(ui, |ui| {
                    ui.set_min_size(ui.available_size());
                    self.frame_contents(ui, state);
                });
        });
    }
}

impl ResultsPanel {
    fn frame_contents(&mut self, ui: &mut egui::Ui, state: &mut AppState) {
        let i18n = state.i18n();

        if !state.workbench.results_visible {
            centered_message(ui, i18n.get(LangKey::NoResultsYet));
            return;
        }
        if state.workbench.results.total() == 0 {
            centered_message(ui, i18n.get(LangKey::NoData));
            return;
        }
        if state.workbench.results.loaded() == 0 {
            // The first chunk lands on the next pass, so the placeholder is
            // on screen for at least one frame.
            ui.label(egui::RichText::new(i18n.get(LangKey::LoadingRows)).weak());
            ui.add_space(6.0);
            shimmer_rows(ui, 5);
            state.workbench.results.load_next_chunk();
            return;
        }

        self.table(ui, state, &i18n);
    }

    fn table(&mut self, ui: &mut egui::Ui, state: &mut AppState, i18n: &Arc<I18N>) {
        let columns: Vec<String> = match state.workbench.results.header_row() {
            Some(row) => row.columns().map(str::to_owned).collect(),
            None => return,
        };
        let complete = state.workbench.results.is_complete();
        let threshold = state.prefs.scroll_threshold;

        let output = egui::ScrollArea::vertical()
            .id_salt("results_table_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                TableBuilder::new(ui)
                    .columns(
                        Column::remainder().at_least(80.0).resizable(true),
                        columns.len(),
                    )
                    .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                    .vscroll(false)
                    .striped(true)
                    .header(20.0, |mut header| {
                        for column in &columns {
                            header.col(|ui| {
                                ui.strong(column);
                            });
                        }
                    })
                    .body(|mut body| {
                        for data_row in state.workbench.results.loaded_rows() {
                            body.row(18.0, |mut row| {
                                // Cells are matched to headers by position, so
                                // rows with a different shape come out ragged.
                                for i in 0..columns.len() {
                                    row.col(|ui| {
                                        if let Some((_, value)) = data_row.cells().get(i) {
                                            ui.label(value);
                                        }
                                    });
                                }
                            });
                        }
                    });

                if complete {
                    ui.add_space(6.0);
                    ui.vertical_centered(|ui| {
                        ui.label(egui::RichText::new(i18n.get(LangKey::NoMoreRows)).weak());
                    });
                }
            });

        // One chunk per frame at most, whenever the view sits near the
        // bottom. Also fills viewports taller than the loaded content.
        if !complete {
            let offset = output.state.offset.y;
            let viewport = output.inner_rect.height();
            let content = output.content_size.y;
            if offset + viewport >= content - threshold {
                state.workbench.results.load_next_chunk();
            }
        }
    }
}

fn centered_message(ui: &mut egui::Ui, text: String) {
    ui.vertical_centered(|ui| {
        ui.add_space(24.0);
        ui.label(egui::RichText::new(text).weak());
    });
}
