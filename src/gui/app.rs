use super::{cell_at, Config, FpsLimiter, PaintButton, Settings, TickClock};
use crate::{Coord, GridStore, RuleEngine, ToroidalGrid};
use eframe::egui::{
    CentralPanel, Color32, ColorImage, Context, Frame, Key, Margin, PointerButton, Rect,
    TextureHandle, TextureOptions,
};
use std::time::Instant;

pub struct App {
    pub(super) grid: GridStore,           // Toroidal field being simulated.
    pub(super) settings: Settings,        // Values adjustable from the control panel.
    pub(super) is_paused: bool,           // Flag indicating whether the simulation is paused.
    pub(super) do_one_step: bool,         // Do one step and pause.
    pub(super) tick_clock: TickClock,     // Schedules simulation ticks.
    pub(super) last_update_duration: f64, // Duration of the last tick in seconds.
    pub(super) field_image: ColorImage,   // One pixel per cell.
    pub(super) texture: TextureHandle,    // Texture handle of the field image.
    pub(super) field_rect: Option<Rect>,  // Part of the window displaying the field.
    pub(super) paint: PaintButton,        // Button painting on the field this frame.
    pub(super) fps_limiter: FpsLimiter,   // Limits the frame rate to a certain value.
}

impl App {
    pub fn new(ctx: &Context, mut grid: GridStore) -> Self {
        grid.set_change_tracking(true);
        let field_image = Self::full_image(&grid);
        Self {
            texture: ctx.load_texture(
                "Conway's GoL field",
                field_image.clone(),
                TextureOptions::NEAREST,
            ),
            field_image,
            grid,
            settings: Settings::default(),
            is_paused: true,
            do_one_step: false,
            tick_clock: TickClock::default(),
            last_update_duration: 0.,
            field_rect: None,
            paint: PaintButton::None,
            fps_limiter: FpsLimiter::default(),
        }
    }

    fn cell_color(coord: Coord, alive: bool) -> Color32 {
        if alive {
            Config::LIVE_CELL_COLOR
        } else {
            Config::DEAD_CELL_COLORS[((coord.x + coord.y) % 2 == 0) as usize]
        }
    }

    fn pixel(coord: Coord) -> (usize, usize) {
        (coord.x as usize, coord.y as usize)
    }

    fn full_image(grid: &GridStore) -> ColorImage {
        let bounds = grid.bounds();
        let mut image = ColorImage::new(
            [bounds.width() as usize, bounds.height() as usize],
            Color32::BLACK,
        );
        for coord in bounds.coords() {
            image[Self::pixel(coord)] = Self::cell_color(coord, false);
        }
        for &coord in grid.iter_live() {
            image[Self::pixel(coord)] = Self::cell_color(coord, true);
        }
        image
    }

    /// Patches the field image with the cells changed since the last frame.
    fn sync_texture(&mut self) {
        let changes = self.grid.drain_changes();
        if changes.is_empty() {
            return;
        }
        for change in changes {
            self.field_image[Self::pixel(change.coord)] =
                Self::cell_color(change.coord, change.alive);
        }
        self.texture.set(self.field_image.clone(), TextureOptions::NEAREST);
    }

    pub fn toggle_pause(&mut self) {
        self.is_paused = !self.is_paused;
        if !self.is_paused {
            self.tick_clock.restart();
        }
        log::info!(
            "Simulation {}",
            if self.is_paused { "paused" } else { "resumed" }
        );
    }

    pub fn clear(&mut self) {
        self.grid.reset();
        log::info!("Grid cleared");
    }

    pub fn randomize(&mut self) {
        self.grid.reset();
        self.grid.randomize(self.settings.fill_rate, None);
        log::info!(
            "Grid randomized: fill rate {:.2}, population {}",
            self.settings.fill_rate,
            self.grid.population()
        );
    }

    pub fn reset_settings(&mut self) {
        self.settings = Settings::default();
    }

    fn update_engine(&mut self) {
        if self.is_paused && !self.do_one_step {
            return;
        }
        if !self.do_one_step && !self.tick_clock.poll(self.settings.ticks_per_second) {
            return;
        }

        let timer = Instant::now();
        RuleEngine::run(&mut self.grid, self.settings.steps_per_tick as usize);
        self.last_update_duration = timer.elapsed().as_secs_f64();

        self.do_one_step = false;
    }

    fn handle_input(&mut self, ctx: &Context, field_rect: Rect) {
        ctx.input(|input| {
            self.paint = PaintButton::from_pointer(&input.pointer, field_rect);
            if let Some(coord) = input
                .pointer
                .latest_pos()
                .and_then(|pos| cell_at(field_rect, pos, self.grid.bounds()))
            {
                if let Some(state) = self.paint.paint_state() {
                    self.grid.set(coord, state);
                }
                if input.pointer.button_clicked(PointerButton::Middle) {
                    let state = self.grid.toggle(coord);
                    log::trace!("Toggled ({}, {}) to {}", coord.x, coord.y, state);
                }
            }
            if input.key_pressed(Key::Space) {
                self.do_one_step = true;
            }
            if input.key_pressed(Key::E) && !input.modifiers.ctrl {
                self.toggle_pause();
            }
            if input.key_pressed(Key::C) && !input.modifiers.ctrl {
                self.clear();
            }
        });
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // full-window panel
        CentralPanel::default()
            .frame(
                Frame::default()
                    .inner_margin(Margin::same(Config::FRAME_MARGIN))
                    .fill(Color32::LIGHT_GRAY),
            )
            .show(ctx, |ui| {
                ctx.request_repaint();

                if let Some(field_rect) = self.field_rect {
                    self.handle_input(ctx, field_rect);
                }

                self.update_engine();
                self.sync_texture();

                self.draw(ui);
            });

        self.fps_limiter.sleep(self.settings.max_fps);
    }
}
