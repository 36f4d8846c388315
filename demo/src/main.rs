//! Shows the grid over OpenStreetMap tiles, with a small window to play with
//! its configuration.

use egui::{Align2, ComboBox, RichText, Slider, Ui, Window};
use walkers::{HttpTiles, Map, MapMemory, Tiles as _, lon_lat, sources::OpenStreetMap};
use walkers_grid::{Grid, LabelFormat};

fn main() -> Result<(), eframe::Error> {
    env_logger::init();
    eframe::run_native(
        "walkers_grid demo",
        Default::default(),
        Box::new(|cc| Ok(Box::new(App::new(cc.egui_ctx.clone())))),
    )
}

struct App {
    tiles: HttpTiles,
    map_memory: MapMemory,
    xticks: usize,
    yticks: usize,
    label_format: LabelFormat,
}

impl App {
    fn new(egui_ctx: egui::Context) -> Self {
        Self {
            tiles: HttpTiles::new(OpenStreetMap, egui_ctx),
            map_memory: MapMemory::default(),
            xticks: 12,
            yticks: 8,
            label_format: LabelFormat::default(),
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let rimless = egui::Frame {
            fill: ctx.style().visuals.panel_fill,
            ..Default::default()
        };

        egui::CentralPanel::default()
            .frame(rimless)
            .show(ctx, |ui| {
                let attribution = self.tiles.attribution();

                let grid = Grid::default()
                    .with_ticks(self.xticks, self.yticks)
                    .with_label_format(self.label_format);

                ui.add(
                    Map::new(
                        Some(&mut self.tiles),
                        &mut self.map_memory,
                        lon_lat(17.03664, 51.09916),
                    )
                    .with_plugin(grid),
                );

                zoom(ui, &mut self.map_memory);
                controls(
                    ui,
                    &mut self.xticks,
                    &mut self.yticks,
                    &mut self.label_format,
                );
                acknowledge(ui, attribution);
            });
    }
}

fn controls(ui: &Ui, xticks: &mut usize, yticks: &mut usize, label_format: &mut LabelFormat) {
    Window::new("Grid")
        .collapsible(false)
        .resizable(false)
        .title_bar(false)
        .anchor(Align2::RIGHT_TOP, [-10., 10.])
        .show(ui.ctx(), |ui| {
            ui.add(Slider::new(xticks, 1..=24).text("longitude lines"));
            ui.add(Slider::new(yticks, 1..=24).text("latitude lines"));

            ComboBox::from_label("labels")
                .selected_text(format!("{label_format:?}"))
                .show_ui(ui, |ui| {
                    for format in [
                        LabelFormat::Decimal,
                        LabelFormat::DegreesDecimalMinutes,
                        LabelFormat::DegreesMinutesSeconds,
                    ] {
                        ui.selectable_value(label_format, format, format!("{format:?}"));
                    }
                });
        });
}

/// Simple GUI to zoom in and out.
fn zoom(ui: &Ui, map_memory: &mut MapMemory) {
    Window::new("Map")
        .collapsible(false)
        .resizable(false)
        .title_bar(false)
        .anchor(Align2::LEFT_BOTTOM, [10., -10.])
        .show(ui.ctx(), |ui| {
            ui.horizontal(|ui| {
                if ui.button(RichText::new("➕").heading()).clicked() {
                    let _ = map_memory.zoom_in();
                }

                if ui.button(RichText::new("➖").heading()).clicked() {
                    let _ = map_memory.zoom_out();
                }
            });
        });
}

fn acknowledge(ui: &Ui, attribution: walkers::sources::Attribution) {
    Window::new("Acknowledge")
        .collapsible(false)
        .resizable(false)
        .title_bar(false)
        .anchor(Align2::LEFT_TOP, [10., 10.])
        .show(ui.ctx(), |ui| {
            ui.horizontal(|ui| {
                ui.label("map provided by");
                ui.hyperlink_to(attribution.text, attribution.url);
            });
        });
}
