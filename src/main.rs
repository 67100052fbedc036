#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use crate::egui::ViewportBuilder;
use crate::egui::vec2;
use eframe::egui;
use querybench::state::AppState;

use eframe::HardwareAcceleration;
use querybench::APP_NAME;
use querybench::i18n::LangKey;
use querybench::state::Theme;
use querybench::ui::components::UIComponents;
use querybench::ui::widgets::{ErrorModal, show_toasts};
use querybench::ui::{Component, Widget};

struct App {
    ui_components: UIComponents,
    state: AppState,
}

impl App {
    fn new() -> Self {
        Self {
            ui_components: UIComponents::default(),
            state: AppState::default(),
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        match self.state.prefs.theme {
            Theme::Dark => ctx.set_theme(egui::Theme::Dark),
            Theme::Light => ctx.set_theme(egui::Theme::Light),
        }

        let sender = self.state.get_sender();
        let i18n = self.state.i18n();
        self.state.get_state();

        if let Err(e) = self.ui_components.menu_bar.show(ctx, &mut self.state) {
            self.state.error = ErrorModal::from(e);
        };

        if self.state.sidebar_open
            && let Err(e) = self.ui_components.query_sidebar.show(ctx, &mut self.state)
        {
            self.state.error = ErrorModal::from(e);
        };

        if let Err(e) = self.ui_components.workbench.show(ctx, &mut self.state) {
            self.state.error = ErrorModal::from(e);
        }

        if self.state.error.open {
            egui::Modal::new(egui::Id::new("critical_error")).show(ctx, |ui| {
                ui.with_layout(egui::Layout::top_down(egui::Align::Center), |ui| {
                    ui.label(&self.state.error.title);
                });
                ui.separator();
                ui.add_space(8.0);
                ui.label(&self.state.error.message);
                ui.add_space(8.0);
                ui.separator();
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                    if ui.button("Ok").clicked() {
                        self.state.error.open = false;
                    }
                });
            });
        }

        if self.state.show_about {
            egui::Modal::new(egui::Id::new("about")).show(ctx, |ui| {
                ui.with_layout(egui::Layout::top_down(egui::Align::Center), |ui| {
                    ui.label(i18n.get(LangKey::About));
                });
                ui.separator();
                ui.add_space(8.0);
                ui.label(i18n.get(LangKey::AboutText(env!("CARGO_PKG_VERSION"))));
                ui.add_space(8.0);
                ui.separator();
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                    if ui.button("Ok").clicked() {
                        self.state.show_about = false;
                    }
                });
            });
        }

        if self.state.settings_popup.open {
            self.state
                .settings_popup
                .show(ctx, sender.clone(), i18n.clone())
                .unwrap_or_else(|e| {
                    self.state.error = ErrorModal::from(e);
                });
        }

        show_toasts(ctx, &mut self.state.toasts);

        ctx.request_repaint();
    }
}

fn main() {
    let viewport = ViewportBuilder::default()
        .with_min_inner_size(vec2(800.0, 600.0))
        .with_inner_size(vec2(1366.0, 768.0));

    let native_options = eframe::NativeOptions {
        viewport,
        vsync: true,
        multisampling: 0,
        depth_buffer: 0,
        stencil_buffer: 0,
        hardware_acceleration: HardwareAcceleration::Preferred,
        renderer: Default::default(),
        run_and_return: false,
        event_loop_builder: None,
        window_builder: None,
        shader_version: None,
        centered: true,
        persist_window: false,
        persistence_path: None,
        dithering: false,
    };

    eframe::run_native(
        APP_NAME,
        native_options,
        Box::new(|_| Ok(Box::new(App::new()))),
    )
    .expect("A critical error occurred starting the app.");
}
