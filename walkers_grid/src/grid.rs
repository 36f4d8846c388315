use egui::{Color32, FontId, Response, Stroke, Ui, vec2};
use walkers::{MapMemory, Plugin, Position, Projector, lon_lat};

use crate::{
    bounds::GeoBounds,
    label::{Axis, LabelFormat},
    lines,
};

/// Visual style of the grid.
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
pub struct GridStyle {
    /// Stroke of an ordinary grid line.
    pub line: Stroke,

    /// Stroke of the equator and the prime meridian.
    pub major_line: Stroke,

    pub label_font: FontId,
    pub label_color: Color32,
    pub label_background: Color32,
}

impl Default for GridStyle {
    fn default() -> Self {
        Self {
            line: Stroke::new(1., Color32::from_gray(0x11).gamma_multiply(0.6)),
            major_line: Stroke::new(2., Color32::from_gray(0x11).gamma_multiply(0.8)),
            label_font: FontId::proportional(12.),
            label_color: Color32::from_gray(200),
            label_background: Color32::BLACK.gamma_multiply(0.8),
        }
    }
}

/// [`Plugin`] which draws a latitude/longitude grid over the map, with a
/// coordinate label on every line.
///
/// Everything is recomputed from the visible viewport on each frame, so the
/// grid follows panning and zooming with no state of its own.
#[derive(Clone)]
pub struct Grid {
    xticks: usize,
    yticks: usize,
    label_format: LabelFormat,
    style: GridStyle,
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            xticks: 12,
            yticks: 8,
            label_format: LabelFormat::default(),
            style: GridStyle::default(),
        }
    }
}

impl Grid {
    /// Number of vertical (`xticks`, longitude) and horizontal (`yticks`,
    /// latitude) grid lines to lay across the viewport. Zero is treated as
    /// one.
    pub fn with_ticks(mut self, xticks: usize, yticks: usize) -> Self {
        self.xticks = xticks;
        self.yticks = yticks;
        self
    }

    pub fn with_label_format(mut self, label_format: LabelFormat) -> Self {
        self.label_format = label_format;
        self
    }

    pub fn with_style(mut self, style: GridStyle) -> Self {
        self.style = style;
        self
    }

    /// The equator and the prime meridian get the major stroke.
    fn stroke(&self, value: f64) -> Stroke {
        if value == 0. {
            self.style.major_line
        } else {
            self.style.line
        }
    }

    fn draw_line(&self, ui: &Ui, projector: &Projector, from: Position, to: Position, value: f64) {
        ui.painter().line_segment(
            [
                projector.project(from).to_pos2(),
                projector.project(to).to_pos2(),
            ],
            self.stroke(value),
        );
    }

    fn draw_label(&self, ui: &Ui, projector: &Projector, position: Position, text: String) {
        let screen_position = projector.project(position);
        let painter = ui.painter();

        let label = painter.layout_no_wrap(
            text,
            self.style.label_font.clone(),
            self.style.label_color,
        );

        // Nudge the label off its line.
        let offset = vec2(4., 2.);

        painter.rect_filled(
            label
                .rect
                .translate(screen_position)
                .translate(offset)
                .expand(2.),
            3.,
            self.style.label_background,
        );

        painter.galley((screen_position + offset).to_pos2(), label, Color32::BLACK);
    }
}

impl Plugin for Grid {
    fn run(
        self: Box<Self>,
        ui: &mut Ui,
        response: &Response,
        projector: &Projector,
        _map_memory: &MapMemory,
    ) {
        let visible = GeoBounds::of_viewport(response.rect, projector);

        // Lines extend past the visible edges so panning does not reveal
        // their ends, while labels sit just inside them.
        let padded = visible.pad(0.5);
        let inner = visible.pad(-0.01);

        log::trace!("Laying out the grid for {visible:?}.");

        for latitude in lines::latitudes(&padded, &visible, self.yticks) {
            self.draw_line(
                ui,
                projector,
                lon_lat(padded.west, latitude),
                lon_lat(padded.east, latitude),
                latitude,
            );
            self.draw_label(
                ui,
                projector,
                lon_lat(inner.west, latitude),
                self.label_format.format(latitude, Axis::Latitude),
            );
        }

        for longitude in lines::longitudes(&padded, &visible, self.xticks) {
            self.draw_line(
                ui,
                projector,
                lon_lat(longitude, padded.north),
                lon_lat(longitude, padded.south),
                longitude,
            );
            self.draw_label(
                ui,
                projector,
                lon_lat(longitude, inner.north),
                self.label_format.format(longitude, Axis::Longitude),
            );
        }
    }
}
