//! Fixed-step clock that feeds key presses and ticks into a [`Puzzle`].

use eyre::Result;
use rubik3_core::{Puzzle, Turn};
use rubik3_prefs::{AnimationPreferences, Command, Keybind, Preferences};

/// What happened in response to a key press.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// A turn started.
    Turned(Turn),
    /// The key arrived while a turn was in progress and was dropped.
    Ignored,
    /// The cube was reset to the solved state.
    Reset,
    /// The user asked to quit.
    Quit,
    /// Nothing is bound to the key.
    Unbound,
}

/// Options for how the clock runs.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct DriverOptions {
    /// Sleep for the configured tick interval between ticks.
    pub realtime: bool,
    /// Print the displayed angle on every tick.
    pub frames: bool,
}

/// Owns the puzzle and advances it one tick at a time.
#[derive(Debug)]
pub struct Driver {
    puzzle: Puzzle,
    animation: AnimationPreferences,
    keybinds: Vec<Keybind>,
    options: DriverOptions,
}
impl Driver {
    pub fn new(prefs: &Preferences, options: DriverOptions) -> Self {
        Self {
            puzzle: Puzzle::new(),
            animation: prefs.animation.clone(),
            keybinds: prefs.keybinds.clone(),
            options,
        }
    }

    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// Handles a single key press. Input is ignored entirely while a turn is
    /// in progress, including reset and quit.
    pub fn press_key(&mut self, key: char) -> KeyOutcome {
        if !self.puzzle.is_idle() {
            log::debug!("Ignoring key {key:?} during turn");
            return KeyOutcome::Ignored;
        }
        match rubik3_prefs::command_for_key(&self.keybinds, key) {
            None => {
                log::debug!("No command bound to key {key:?}");
                KeyOutcome::Unbound
            }
            Some(command) => self.run_command(command),
        }
    }

    fn run_command(&mut self, command: Command) -> KeyOutcome {
        match command {
            Command::Turn(turn) => match self.puzzle.request_turn(turn) {
                true => KeyOutcome::Turned(turn),
                false => KeyOutcome::Ignored,
            },
            Command::Reset => match self.puzzle.reset() {
                true => KeyOutcome::Reset,
                false => KeyOutcome::Ignored,
            },
            Command::Quit => KeyOutcome::Quit,
        }
    }

    /// Presses each key in order, running every turn to completion before the
    /// next key. Returns `false` if a quit key was pressed; keys after it are
    /// not processed.
    pub fn press_keys(&mut self, keys: &str) -> Result<bool> {
        for key in keys.chars() {
            match self.press_key(key) {
                KeyOutcome::Quit => return Ok(false),
                KeyOutcome::Turned(_) => {
                    self.run_until_idle()?;
                }
                KeyOutcome::Ignored | KeyOutcome::Reset | KeyOutcome::Unbound => (),
            }
        }
        Ok(true)
    }

    /// Plays a sequence of turns, animating each one.
    pub fn play(&mut self, turns: &[Turn]) -> Result<()> {
        for &turn in turns {
            if self.run_command(Command::Turn(turn)) == KeyOutcome::Turned(turn) {
                self.run_until_idle()?;
            }
        }
        Ok(())
    }

    /// Ticks the clock until no turn is in progress. Returns the number of
    /// ticks taken.
    pub fn run_until_idle(&mut self) -> Result<u32> {
        let mut ticks = 0;
        while !self.puzzle.is_idle() {
            let turn = self.puzzle.current_turn();
            let completed = self.puzzle.tick(self.animation.degrees_per_tick)?;
            ticks += 1;

            if self.options.frames {
                match (turn, completed) {
                    (_, Some(done)) => println!("{done} done"),
                    (Some(turn), None) => println!("{turn} {:+7.2}°", self.displayed_angle()),
                    (None, None) => (),
                }
            }
            log::trace!("Tick {ticks}: {:.2}°", self.puzzle.current_visual_angle());

            if self.options.realtime {
                std::thread::sleep(self.animation.tick_interval());
            }
        }
        Ok(ticks)
    }

    /// Returns the angle of the turning layer with the configured easing
    /// applied.
    pub fn displayed_angle(&self) -> f32 {
        let interpolation = self.animation.twist_interpolation;
        self.puzzle
            .animator()
            .eased_visual_angle(|t| interpolation.interpolate(t))
    }

    /// Returns a one-line summary of the puzzle.
    pub fn status(&self) -> String {
        let count = self.puzzle.turn_count();
        let plural = if count == 1 { "" } else { "s" };
        match self.puzzle.cube().is_solved() {
            true => format!("{count} turn{plural} (solved)"),
            false => format!("{count} turn{plural}"),
        }
    }
}
