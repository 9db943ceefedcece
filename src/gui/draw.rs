use super::{App, Config};
use crate::ToroidalGrid;
use eframe::egui::{
    load::SizedTexture, vec2, Button, DragValue, Image, RichText, Slider, Stroke, Ui,
};

impl App {
    fn new_text(text: &str) -> RichText {
        RichText::new(text)
            .color(Config::TEXT_COLOR)
            .size(Config::TEXT_SIZE)
    }

    fn new_button(text: &str) -> Button {
        Button::new(Self::new_text(text))
            .fill(Config::BUTTON_FILL_COLOR)
            .stroke(Stroke::new(
                Config::BUTTON_STROKE_WIDTH,
                Config::BUTTON_STROKE_COLOR,
            ))
    }

    fn draw_simulation_controls(&mut self, ui: &mut Ui) {
        let text = if self.is_paused { "Play" } else { "Pause" };
        if ui.add(Self::new_button(text)).clicked() {
            self.toggle_pause();
        }

        if ui
            .add_enabled(self.is_paused, Self::new_button("Next step"))
            .clicked()
        {
            self.do_one_step = true;
        }

        ui.horizontal(|ui| {
            ui.label(Self::new_text("Ticks per second: "));
            ui.add(
                Slider::new(&mut self.settings.ticks_per_second, 0.5..=120.0).logarithmic(true),
            );
        });

        ui.horizontal(|ui| {
            ui.label(Self::new_text("Generations per tick: "));
            ui.add(DragValue::new(&mut self.settings.steps_per_tick).range(1..=64));
        });

        ui.horizontal(|ui| {
            if ui.add(Self::new_button("Clear")).clicked() {
                self.clear();
            }
            if ui.add(Self::new_button("Random")).clicked() {
                self.randomize();
            }
            ui.label(Self::new_text("fill: "));
            ui.add(Slider::new(&mut self.settings.fill_rate, 0.0..=1.0));
        });

        ui.label(Self::new_text(&format!(
            "Generation: {}",
            self.grid.generation()
        )));

        ui.label(Self::new_text(&format!(
            "\nLast field update: {:.3} ms",
            self.last_update_duration * 1e3
        )));
    }

    fn draw_appearance_controls(&mut self, ui: &mut Ui) {
        ui.label(Self::new_text(&format!(
            "FPS: {:3}",
            self.fps_limiter.fps().round() as u32
        )));

        ui.horizontal(|ui| {
            ui.label(Self::new_text("Max FPS: "));
            ui.add(Slider::new(&mut self.settings.max_fps, 5.0..=480.0).logarithmic(true));
        });

        if ui.add(Self::new_button("Reset settings")).clicked() {
            self.reset_settings();
        }
    }

    fn draw_stats(&mut self, ui: &mut Ui) {
        ui.label(Self::new_text(&self.grid.stats()));
    }

    fn draw_controls(&mut self, ui: &mut Ui) {
        ui.vertical(|ui| {
            let aw = ui.available_width();

            ui.horizontal(|ui| {
                ui.group(|ui| {
                    ui.vertical(|ui| {
                        self.draw_simulation_controls(ui);
                    });

                    // to adjust the bounds
                    ui.add_space((Config::CONTROL_PANEL_WIDTH - aw + ui.available_width()).max(0.));
                });
            });

            ui.horizontal(|ui| {
                ui.group(|ui| {
                    ui.vertical(|ui| {
                        self.draw_appearance_controls(ui);

                        ui.add_space(Config::GAP_ABOVE_STATS);

                        self.draw_stats(ui);
                    });

                    // to adjust the bounds
                    ui.add_space((Config::CONTROL_PANEL_WIDTH - aw + ui.available_width()).max(0.));
                });
            });
        });
    }

    fn draw_field(&mut self, ui: &mut Ui) {
        let bounds = self.grid.bounds();
        let (w, h) = (bounds.width() as f32, bounds.height() as f32);
        let area = ui.available_size() - vec2(2., 2.) * Config::OUTLINE_WIDTH;
        // whole pixels per cell, at least one
        let cell_px = (area.x / w).min(area.y / h).floor().max(1.);

        let source = SizedTexture::new(self.texture.id(), vec2(w, h) * cell_px);
        let response = ui.add(Image::from_texture(source));
        ui.painter().rect_stroke(
            response.rect.expand(Config::OUTLINE_WIDTH / 2.),
            0.,
            Stroke::new(Config::OUTLINE_WIDTH, Config::OUTLINE_COLOR),
        );
        self.field_rect.replace(response.rect);
    }

    pub fn draw(&mut self, ui: &mut Ui) {
        ui.horizontal_top(|ui| {
            self.draw_controls(ui);

            ui.add_space(Config::FRAME_MARGIN);

            ui.vertical_centered(|ui| {
                ui.add_space(Config::OUTLINE_WIDTH);
                self.draw_field(ui);
            });
        });
    }
}
