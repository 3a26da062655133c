// input.rs - Turns polled keyboard/mouse state into automaton commands

use conway::Viewport;
use egui::{Key, Modifiers, Vec2};

const BOUND_KEYS: [Key; 5] = [Key::Escape, Key::Space, Key::S, Key::R, Key::C];

/// What the user asked for this frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    ToggleAutoplay,
    SingleStep,
    RandomFill,
    ClearAll,
    ToggleCellAt { x: usize, y: usize },
    Exit,
}

/// Fires once on the transition from released to pressed between two polls.
#[derive(Clone, Copy, Debug, Default)]
pub struct EdgeTrigger {
    was_down: bool,
}

impl EdgeTrigger {
    pub fn update(&mut self, down: bool) -> bool {
        let fired = down && !self.was_down;
        self.was_down = down;
        fired
    }
}

/// Which bound keys are held in the current frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct KeySnapshot {
    pub exit: bool,
    pub autoplay: bool,
    pub step: bool,
    pub random: bool,
    pub clear: bool,
}

impl KeySnapshot {
    /// Reads the bound keys and consumes their press events, so a focused
    /// widget never sees them as a click.
    pub fn poll(ctx: &egui::Context) -> Self {
        ctx.input_mut(|i| {
            let keys = Self {
                exit: i.key_down(Key::Escape),
                autoplay: i.key_down(Key::Space),
                step: i.key_down(Key::S),
                random: i.key_down(Key::R),
                clear: i.key_down(Key::C),
            };
            for key in BOUND_KEYS {
                while i.consume_key(Modifiers::NONE, key) {}
            }
            keys
        })
    }
}

/// Edge state for every bound key, kept across frames.
#[derive(Clone, Debug, Default)]
pub struct Keyboard {
    exit: EdgeTrigger,
    autoplay: EdgeTrigger,
    step: EdgeTrigger,
    random: EdgeTrigger,
    clear: EdgeTrigger,
}

impl Keyboard {
    pub fn commands(&mut self, keys: KeySnapshot) -> Vec<Command> {
        [
            (self.exit.update(keys.exit), Command::Exit),
            (self.autoplay.update(keys.autoplay), Command::ToggleAutoplay),
            (self.step.update(keys.step), Command::SingleStep),
            (self.random.update(keys.random), Command::RandomFill),
            (self.clear.update(keys.clear), Command::ClearAll),
        ]
        .into_iter()
        .filter_map(|(fired, command)| fired.then_some(command))
        .collect()
    }
}

/// Maps a pointer offset from the grid's top-left corner to a visible cell.
pub fn cell_at(offset: Vec2, cell_size: f32, viewport: Viewport) -> Option<(usize, usize)> {
    if offset.x < 0.0 || offset.y < 0.0 {
        return None;
    }
    let x = (offset.x / cell_size) as usize;
    let y = (offset.y / cell_size) as usize;
    viewport.contains(x, y).then_some((x, y))
}
