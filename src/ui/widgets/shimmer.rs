use egui::{Color32, Rect, Response, Sense, Ui, Vec2};
use std::f32::consts::PI;

/// Animated placeholder rows shown while table rows are being loaded.
pub struct Shimmer {
    rows: usize,
    row_height: f32,
}

impl Shimmer {
    pub fn new(rows: usize, row_height: f32) -> Self {
        Self { rows, row_height }
    }

    pub fn show(&self, ui: &mut Ui) -> Response {
        let gap = 4.0;
        let height = self.rows as f32 * (self.row_height + gap) - gap;
        let (rect, response) = ui.allocate_exact_size(
            Vec2::new(ui.available_width(), height.max(self.row_height)),
            Sense::hover(),
        );

        if ui.is_rect_visible(rect) {
            for i in 0..self.rows {
                let top = rect.min.y + i as f32 * (self.row_height + gap);
                let row_rect = Rect::from_min_max(
                    [rect.min.x, top].into(),
                    [rect.max.x, top + self.row_height].into(),
                );
                self.paint_row(ui, row_rect);
            }
            ui.ctx().request_repaint();
        }

        response
    }

    fn paint_row(&self, ui: &mut Ui, rect: Rect) {
        let time = ui.input(|i| i.time);

        let (base, highlight) = if ui.visuals().dark_mode {
            (Color32::from_gray(45), Color32::from_gray(65))
        } else {
            (Color32::from_gray(230), Color32::from_gray(250))
        };

        ui.painter().rect_filled(
            rect,
            ui.visuals().widgets.noninteractive.corner_radius,
            base,
        );

        // One sweep every 1.5s, the band sliding in from past the left edge.
        let progress = ((time % 1.5) / 1.5) as f32;
        let band_width = rect.width() * 0.3;
        let band_left = rect.min.x + (rect.width() + band_width) * progress - band_width;

        let slices = 20;
        let slice_width = band_width / slices as f32;
        for i in 0..slices {
            let along = i as f32 / slices as f32;
            let alpha = ((along * PI).sin() * 0.6 * 255.0) as u8;
            let color =
                Color32::from_rgba_unmultiplied(highlight.r(), highlight.g(), highlight.b(), alpha);

            let slice = Rect::from_min_max(
                [band_left + band_width * along, rect.min.y].into(),
                [band_left + band_width * along + slice_width, rect.max.y].into(),
            );

            if slice.intersects(rect) {
                ui.painter().rect_filled(slice.intersect(rect), 0.0, color);
            }
        }
    }
}

pub fn shimmer_rows(ui: &mut Ui, rows: usize) -> Response {
    let row_height = ui.text_style_height(&egui::TextStyle::Body);
    Shimmer::new(rows, row_height).show(ui)
}
