// ui.rs - Frame loop: poll input, apply commands, step, paint

use std::time::Instant;

use conway::{patterns, Automaton, CycleDetector};
use eframe::egui;
use egui::{Rect, Vec2};
use log::info;

use crate::config::Config;
use crate::input::{cell_at, Command, KeySnapshot, Keyboard};

pub struct LifeApp {
    automaton: Automaton,
    config: Config,
    keyboard: Keyboard,
    cycles: CycleDetector,
    autoplay: bool,
    last_step: Instant,
    selected_pattern: usize,
}

impl LifeApp {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let viewport = config.viewport()?;
        let mut automaton = Automaton::new(viewport, config.boundary);
        automaton.randomize();
        info!(
            "{}x{} cells, margin {}, {:?} boundary",
            viewport.width, viewport.height, viewport.margin, config.boundary
        );
        let mut app = Self {
            automaton,
            config,
            keyboard: Keyboard::default(),
            cycles: CycleDetector::new(),
            autoplay: false,
            last_step: Instant::now(),
            selected_pattern: 0,
        };
        app.restart_history();
        Ok(app)
    }

    /// Forgets earlier generations and remembers the current one, so a
    /// still life is caught on its first step.
    fn restart_history(&mut self) {
        self.cycles.reset();
        self.cycles.observe(&self.automaton);
    }

    fn apply(&mut self, ctx: &egui::Context, command: Command) {
        match command {
            Command::ToggleAutoplay => {
                self.autoplay = !self.autoplay;
                self.last_step = Instant::now();
                info!("autoplay {}", if self.autoplay { "on" } else { "off" });
            }
            Command::SingleStep => self.step(),
            Command::RandomFill => {
                self.automaton.randomize();
                self.restart_history();
            }
            Command::ClearAll => {
                self.autoplay = false;
                self.automaton.clear();
                self.restart_history();
            }
            Command::ToggleCellAt { x, y } => {
                self.automaton.toggle_cell(x, y);
                self.restart_history();
            }
            Command::Exit => {
                info!("exit requested");
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
        }
    }

    fn step(&mut self) {
        self.automaton.step();
        self.last_step = Instant::now();
        if self.cycles.observe(&self.automaton) && self.autoplay {
            info!("cycle detected at generation {}, pausing", self.automaton.generation());
            self.autoplay = false;
        }
    }

    fn apply_selected_pattern(&mut self) {
        if let Some(pattern) = patterns::PATTERNS.get(self.selected_pattern) {
            self.autoplay = false;
            pattern.stamp_centered(&mut self.automaton);
            self.restart_history();
            info!("applied pattern {}", pattern.name);
        }
    }

    fn controls(&mut self, ui: &mut egui::Ui) -> Vec<Command> {
        let mut commands = Vec::new();
        ui.horizontal(|ui| {
            let button_text = if self.autoplay { "⏸ Pause" } else { "▶ Start" };
            if ui.button(button_text).clicked() {
                commands.push(Command::ToggleAutoplay);
            }
            if ui.button("⏭ Step").clicked() {
                commands.push(Command::SingleStep);
            }
            if ui.button("⏹ Clear").clicked() {
                commands.push(Command::ClearAll);
            }
            if ui.button("🎲 Random").clicked() {
                commands.push(Command::RandomFill);
            }

            ui.separator();

            ui.label("Pattern:");
            egui::ComboBox::from_id_source("pattern_selector")
                .selected_text(patterns::PATTERNS[self.selected_pattern].name)
                .show_ui(ui, |ui| {
                    for (i, pattern) in patterns::PATTERNS.iter().enumerate() {
                        ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                    }
                });
            if ui.button("Apply Pattern").clicked() {
                self.apply_selected_pattern();
            }

            ui.separator();

            let viewport = self.automaton.viewport();
            let live = self.automaton.population();
            let total = viewport.width * viewport.height;
            ui.label(format!("Generation: {}", self.automaton.generation()));
            ui.label(format!(
                "Live cells: {live} ({:.1}%)",
                live as f32 / total as f32 * 100.0
            ));
        });
        commands
    }

    fn draw_grid(&self, ui: &mut egui::Ui) -> Option<Command> {
        let viewport = self.automaton.viewport();
        let cell = self.config.cell_size_px;
        let (response, painter) =
            ui.allocate_painter(self.config.grid_size_px(viewport), egui::Sense::click());
        let origin = response.rect.min;

        for y in 0..viewport.height {
            for x in 0..viewport.width {
                let rect = Rect::from_min_size(
                    origin + Vec2::new(x as f32 * cell, y as f32 * cell),
                    Vec2::splat(cell),
                );
                let color = if self.automaton.is_alive(x, y) {
                    self.config.alive_color
                } else {
                    self.config.dead_color
                };
                painter.rect_filled(rect, 0.0, color);
            }
        }

        if !response.clicked() {
            return None;
        }
        let pos = response.interact_pointer_pos()?;
        let (x, y) = cell_at(pos - origin, cell, viewport)?;
        Some(Command::ToggleCellAt { x, y })
    }

    fn run_frame(&mut self, ctx: &egui::Context) {
        let mut commands = self.keyboard.commands(KeySnapshot::poll(ctx));
        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            commands.extend(self.controls(ui));
        });
        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                commands.extend(self.draw_grid(ui));
            });
        if !commands.is_empty() {
            ctx.request_repaint();
        }
        self.process(ctx, commands);
        if self.autoplay {
            ctx.request_repaint();
        }
    }

    /// Applies one frame of commands, then steps at most once: on request or
    /// when autoplay is due.
    fn process(&mut self, ctx: &egui::Context, commands: Vec<Command>) {
        let mut step_requested = false;
        for command in commands {
            match command {
                Command::SingleStep => step_requested = true,
                other => self.apply(ctx, other),
            }
        }
        let autoplay_due = self.autoplay && self.last_step.elapsed() >= self.config.step_interval;
        if step_requested || autoplay_due {
            self.step();
        }
    }
}

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.run_frame(ctx);
    }
}
