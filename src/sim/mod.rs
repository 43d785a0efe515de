//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed internal timestep, driven by arbitrary elapsed wall time
//! - Seeded RNG only
//! - No rendering or platform dependencies beyond the injected `ScoreStore`

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::Rect;
pub use state::{CLOUD_COLOR, Cloud, GameState, JumpPhase, Obstacle, Player, RenderState};
pub use tick::{spawn_cloud, spawn_obstacle, step};

use crate::consts::*;
use crate::score::{HIGH_SCORE_KEY, ScoreStore};
use crate::tuning::Tuning;

/// Logical input events, decoupled from the originating device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    JumpPressed,
    JumpReleased,
}

/// The game. Owns all state exclusively, consumes queued input events, and
/// advances on the driver's per-frame callback. Multiple independent
/// instances can coexist; there is no process-wide state.
pub struct Simulation<S: ScoreStore> {
    state: GameState,
    store: S,
    /// Unconsumed real time, stepped off in `SIM_DT` slices
    accumulator: f32,
    /// Events received since the last `advance`
    pending: Vec<InputEvent>,
}

impl<S: ScoreStore> Simulation<S> {
    /// Create a simulation for the given world size, seeding the RNG and
    /// reading the persisted high score (absent or unreadable = 0).
    pub fn new(tuning: Tuning, world_width: f32, world_height: f32, seed: u64, store: S) -> Self {
        let mut state = GameState::new(tuning, world_width, world_height, seed);
        state.high_score = store.get(HIGH_SCORE_KEY).unwrap_or(0);
        log::info!(
            "Simulation ready ({}x{}, high score {})",
            world_width,
            world_height,
            state.high_score
        );
        Self {
            state,
            store,
            accumulator: 0.0,
            pending: Vec::new(),
        }
    }

    /// Jump input down edge. Queued; applied at the start of the next
    /// `advance`. Ignored there unless the player is grounded.
    pub fn on_jump_pressed(&mut self) {
        self.pending.push(InputEvent::JumpPressed);
    }

    /// Jump input up edge
    pub fn on_jump_released(&mut self) {
        self.pending.push(InputEvent::JumpReleased);
    }

    /// Queue a logical input event
    pub fn handle(&mut self, event: InputEvent) {
        self.pending.push(event);
    }

    /// Advance by the elapsed wall time and snapshot the frame.
    ///
    /// The world steps in fixed `SIM_DT` slices, with the elapsed time
    /// clamped and the substep count capped so a backgrounded tab cannot
    /// blow up the physics. While game over this is a safe no-op on the
    /// state, but the snapshot is still produced so the driver can keep
    /// painting the frozen frame under the game-over overlay.
    pub fn advance(&mut self, elapsed_seconds: f32) -> RenderState {
        for event in self.pending.drain(..) {
            if self.state.game_over {
                continue;
            }
            match event {
                InputEvent::JumpPressed => self.state.player.start_jump(),
                InputEvent::JumpReleased => self.state.player.release_jump(),
            }
        }

        if !self.state.game_over {
            let elapsed = if elapsed_seconds.is_finite() {
                elapsed_seconds.clamp(0.0, MAX_FRAME_DT)
            } else {
                0.0
            };
            self.accumulator += elapsed;

            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                tick::step(&mut self.state, &mut self.store);
                self.accumulator -= SIM_DT;
                substeps += 1;
                if self.state.game_over {
                    break;
                }
            }
            // Drop backlog past the substep cap
            if self.accumulator > SIM_DT {
                self.accumulator = SIM_DT;
            }
        }

        self.state.snapshot()
    }

    /// Start the run over; only the high score survives
    pub fn reset(&mut self) {
        self.state.reset();
        self.accumulator = 0.0;
        self.pending.clear();
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn game_over(&self) -> bool {
        self.state.game_over
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::MemoryStore;

    fn quiet_sim(store: MemoryStore) -> Simulation<MemoryStore> {
        let tuning = Tuning {
            obstacle_spawn_chance: 0.0,
            cloud_spawn_chance: 0.0,
            ..Tuning::default()
        };
        Simulation::new(tuning, 800.0, 600.0, 42, store)
    }

    #[test]
    fn test_high_score_absent_defaults_to_zero() {
        let sim = quiet_sim(MemoryStore::new());
        assert_eq!(sim.state().high_score, 0);
    }

    #[test]
    fn test_high_score_loaded_at_startup() {
        let mut store = MemoryStore::new();
        store.set(HIGH_SCORE_KEY, 230);
        let sim = quiet_sim(store);
        assert_eq!(sim.state().high_score, 230);
    }

    #[test]
    fn test_queued_press_takes_effect_on_next_advance() {
        let mut sim = quiet_sim(MemoryStore::new());
        let rest_y = sim.state().ground_level - sim.state().player.size.y;

        sim.on_jump_pressed();
        // Nothing moves until advance consumes the event
        assert_eq!(sim.state().player.pos.y, rest_y);

        let frame = sim.advance(SIM_DT);
        assert!(frame.player.pos.y < rest_y);
        assert_eq!(
            sim.state().player.jump,
            JumpPhase::Ascending { holding: true }
        );
    }

    #[test]
    fn test_zero_elapsed_is_a_safe_no_op() {
        let mut sim = quiet_sim(MemoryStore::new());
        let before = sim.state().player.pos;
        let frame = sim.advance(0.0);
        assert_eq!(frame.player.pos, before);
    }

    #[test]
    fn test_pathological_elapsed_values_are_bounded() {
        let mut sim = quiet_sim(MemoryStore::new());
        sim.advance(f32::NAN);
        sim.advance(-3.0);
        sim.advance(1e9);
        let rest_y = sim.state().ground_level - sim.state().player.size.y;
        assert!(sim.state().player.pos.y >= 0.0);
        assert!(sim.state().player.pos.y <= rest_y);
        assert!(sim.accumulator <= SIM_DT);
    }

    #[test]
    fn test_game_over_advance_freezes_but_still_snapshots() {
        let mut sim = quiet_sim(MemoryStore::new());
        let speed = sim.state().tuning.speed_for(0);
        sim.state.obstacles.push(Obstacle {
            rect: Rect::new(50.0 + speed, 350.0, 50.0, 50.0),
        });

        let frame = sim.advance(SIM_DT);
        assert!(frame.game_over);

        // Frozen frame keeps being reported, input is discarded
        sim.on_jump_pressed();
        let frozen = sim.advance(SIM_DT);
        assert!(frozen.game_over);
        assert_eq!(frozen.player, frame.player);
        assert_eq!(frozen.obstacles, frame.obstacles);
        assert_eq!(sim.state().player.jump, JumpPhase::Grounded);
    }

    #[test]
    fn test_reset_clears_run_but_keeps_high_score() {
        let mut store = MemoryStore::new();
        store.set(HIGH_SCORE_KEY, 100);
        let mut sim = quiet_sim(store);
        sim.state.score = 150;
        let speed = sim.state().tuning.speed_for(150);
        sim.state.obstacles.push(Obstacle {
            rect: Rect::new(50.0 + speed, 350.0, 50.0, 50.0),
        });
        sim.advance(SIM_DT);
        assert!(sim.game_over());
        assert_eq!(sim.state().high_score, 150);

        sim.reset();
        let frame = sim.advance(SIM_DT);
        assert!(!frame.game_over);
        assert_eq!(frame.score, 0);
        assert_eq!(frame.high_score, 150);
        assert!(frame.obstacles.is_empty());
        assert!(frame.clouds.is_empty());
        assert_eq!(frame.player.pos.y, 350.0);
    }
}
