use std::time::{Duration, Instant};

pub const TOAST_DURATION: Duration = Duration::from_millis(1000);

pub struct Toast {
    message: String,
    expires_at: Instant,
}

impl Toast {
    pub fn new(message: String) -> Self {
        Self {
            message,
            expires_at: Instant::now() + TOAST_DURATION,
        }
    }

    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Draws active toasts just above the bottom edge and drops expired ones.
pub fn show_toasts(ctx: &egui::Context, toasts: &mut Vec<Toast>) {
    toasts.retain(|toast| !toast.is_expired());
    if toasts.is_empty() {
        return;
    }

    egui::Area::new(egui::Id::new("toasts"))
        .anchor(egui::Align2::CENTER_BOTTOM, egui::vec2(0.0, -24.0))
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            for toast in toasts.iter() {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.label(toast.message());
                });
            }
        });
}
