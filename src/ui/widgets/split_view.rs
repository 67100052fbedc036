use crate::state::{SplitBounds, SplitOrientation};
use egui::{CursorIcon, Rect, Sense, Ui, UiBuilder};

const HANDLE_THICKNESS: f32 = 6.0;

/// Two panes separated by a draggable divider. The divider position lives in
/// `SplitBounds` and is clamped to its range on every update, dragged or not.
pub struct SplitView<'a> {
    orientation: SplitOrientation,
    bounds: &'a mut SplitBounds,
}

impl<'a> SplitView<'a> {
    pub fn new(orientation: SplitOrientation, bounds: &'a mut SplitBounds) -> Self {
        Self {
            orientation,
            bounds,
        }
    }

    pub fn show<S>(
        self,
        ui: &mut Ui,
        data: &mut S,
        first: impl FnOnce(&mut Ui, &mut S),
        second: impl FnOnce(&mut Ui, &mut S),
    ) {
        let container = ui.available_rect_before_wrap();
        let handle_id = ui.id().with("split_divider");

        self.bounds.size = self.bounds.clamp(self.bounds.size);
        let (_, hit_rect, _) = self.layout(container, self.bounds.size);

        let response = ui
            .interact(hit_rect, handle_id, Sense::drag())
            .on_hover_and_drag_cursor(match self.orientation {
                SplitOrientation::Horizontal => CursorIcon::ResizeVertical,
                SplitOrientation::Vertical => CursorIcon::ResizeHorizontal,
            });

        // The first pane's size is the pointer's offset from the leading
        // container edge, wherever the pointer goes.
        if response.dragged()
            && let Some(pointer) = response.interact_pointer_pos()
        {
            let candidate = match self.orientation {
                SplitOrientation::Horizontal => pointer.y - container.min.y,
                SplitOrientation::Vertical => pointer.x - container.min.x,
            };
            self.bounds.size = self.bounds.clamp(candidate);
        }

        let (first_rect, handle_rect, second_rect) = self.layout(container, self.bounds.size);

        let fill = if response.dragged() {
            ui.style().visuals.widgets.active.bg_fill
        } else if response.hovered() {
            ui.style().visuals.widgets.hovered.bg_fill
        } else {
            ui.style().visuals.widgets.noninteractive.bg_stroke.color
        };
        ui.painter().rect_filled(
            handle_rect.shrink2(match self.orientation {
                SplitOrientation::Horizontal => [0.0, 2.0].into(),
                SplitOrientation::Vertical => [2.0, 0.0].into(),
            }),
            ui.style().visuals.widgets.noninteractive.corner_radius,
            fill,
        );

        ui.scope_builder(UiBuilder::new().max_rect(first_rect), |ui| {
            first(ui, data);
        });
        ui.scope_builder(UiBuilder::new().max_rect(second_rect), |ui| {
            second(ui, data);
        });

        ui.advance_cursor_after_rect(container);
    }

    fn layout(&self, container: Rect, size: f32) -> (Rect, Rect, Rect) {
        let (first, handle, second) = match self.orientation {
            SplitOrientation::Horizontal => {
                let split = container.min.y + size;
                (
                    Rect::from_min_max(container.min, [container.max.x, split].into()),
                    Rect::from_min_max(
                        [container.min.x, split].into(),
                        [container.max.x, split + HANDLE_THICKNESS].into(),
                    ),
                    Rect::from_min_max(
                        [container.min.x, split + HANDLE_THICKNESS].into(),
                        container.max,
                    ),
                )
            }
            SplitOrientation::Vertical => {
                let split = container.min.x + size;
                (
                    Rect::from_min_max(container.min, [split, container.max.y].into()),
                    Rect::from_min_max(
                        [split, container.min.y].into(),
                        [split + HANDLE_THICKNESS, container.max.y].into(),
                    ),
                    Rect::from_min_max(
                        [split + HANDLE_THICKNESS, container.min.y].into(),
                        container.max,
                    ),
                )
            }
        };
        (
            first.intersect(container),
            handle.intersect(container),
            second.intersect(container),
        )
    }
}
