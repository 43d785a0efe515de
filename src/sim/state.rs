//! Game state and core simulation types
//!
//! All per-run state lives here. Difficulty (scroll speed, obstacle size) is
//! derived from the score on demand and never stored.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::collision::Rect;
use crate::consts::*;
use crate::tuning::Tuning;

/// Fixed cloud color (decorative sprites are plain white)
pub const CLOUD_COLOR: [u8; 3] = [255, 255, 255];

/// Where the player is in a jump
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpPhase {
    /// Resting on the ground
    Grounded,
    /// Rising; `holding` while the jump input keeps adding height
    Ascending { holding: bool },
    /// Gravity has engaged (altitude cap reached)
    Falling,
}

/// The player's character
#[derive(Debug, Clone)]
pub struct Player {
    /// Top-left corner; x never changes
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical velocity (pixels per frame, negative = upward)
    pub velocity_y: f32,
    pub jump: JumpPhase,
    /// Seconds the jump input has been held this ascent, capped
    pub hold_timer: f32,
}

impl Player {
    /// Player at rest on the ground line
    pub fn new(ground_level: f32) -> Self {
        Self {
            pos: Vec2::new(PLAYER_X, ground_level - PLAYER_HEIGHT),
            size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            velocity_y: 0.0,
            jump: JumpPhase::Grounded,
            hold_timer: 0.0,
        }
    }

    /// Bounding box for collision and rendering
    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    /// Begin an ascent; only honored from the ground
    pub fn start_jump(&mut self) {
        if self.jump == JumpPhase::Grounded {
            self.jump = JumpPhase::Ascending { holding: true };
            self.hold_timer = 0.0;
            self.velocity_y = 0.0;
        }
    }

    /// Jump input released; velocity freezes at its decayed value
    pub fn release_jump(&mut self) {
        if self.jump == (JumpPhase::Ascending { holding: true }) {
            self.jump = JumpPhase::Ascending { holding: false };
        }
    }

    /// Snap back to the ground pose and clear all jump state
    pub fn land(&mut self, ground_level: f32) {
        self.pos.y = ground_level - self.size.y;
        self.velocity_y = 0.0;
        self.jump = JumpPhase::Grounded;
        self.hold_timer = 0.0;
    }
}

/// A ground-anchored obstacle. Size is frozen at spawn; scroll speed is
/// applied live each frame.
#[derive(Debug, Clone)]
pub struct Obstacle {
    pub rect: Rect,
}

/// A decorative background cloud; never collision-checked
#[derive(Debug, Clone)]
pub struct Cloud {
    pub rect: Rect,
    pub color: [u8; 3],
}

/// Complete game state for one run
#[derive(Debug, Clone)]
pub struct GameState {
    pub tuning: Tuning,
    pub world_width: f32,
    pub world_height: f32,
    /// Y coordinate of the horizon; player and obstacles rest on it
    pub ground_level: f32,
    pub player: Player,
    /// Live obstacles in spawn order
    pub obstacles: Vec<Obstacle>,
    pub clouds: Vec<Cloud>,
    pub score: u64,
    /// Best score ever seen; survives `reset`, persisted by the store
    pub high_score: u64,
    pub game_over: bool,
    rng: Pcg32,
}

impl GameState {
    /// Create a fresh run for the given world size and RNG seed
    pub fn new(tuning: Tuning, world_width: f32, world_height: f32, seed: u64) -> Self {
        let ground_level = crate::ground_level(world_height);
        Self {
            tuning,
            world_width,
            world_height,
            ground_level,
            player: Player::new(ground_level),
            obstacles: Vec::new(),
            clouds: Vec::new(),
            score: 0,
            high_score: 0,
            game_over: false,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Start the run over. The high score is the only survivor.
    pub fn reset(&mut self) {
        self.player = Player::new(self.ground_level);
        self.obstacles.clear();
        self.clouds.clear();
        self.score = 0;
        self.game_over = false;
    }

    /// One Bernoulli trial against the run RNG
    pub(crate) fn roll(&mut self, chance: f32) -> bool {
        self.rng.random::<f32>() < chance
    }

    /// Uniform spawn altitude for a new cloud
    pub(crate) fn random_cloud_y(&mut self) -> f32 {
        let ceiling = (self.ground_level - CLOUD_GROUND_MARGIN).max(1.0);
        self.rng.random_range(0.0..ceiling)
    }

    /// Snapshot everything the renderer needs for one frame
    pub fn snapshot(&self) -> RenderState {
        RenderState {
            player: self.player.rect(),
            obstacles: self.obstacles.iter().map(|o| o.rect).collect(),
            clouds: self.clouds.clone(),
            score: self.score,
            high_score: self.high_score,
            game_over: self.game_over,
            ground_level: self.ground_level,
            world_width: self.world_width,
            world_height: self.world_height,
        }
    }
}

/// Per-frame snapshot consumed by the renderer
#[derive(Debug, Clone)]
pub struct RenderState {
    pub player: Rect,
    pub obstacles: Vec<Rect>,
    pub clouds: Vec<Cloud>,
    pub score: u64,
    pub high_score: u64,
    pub game_over: bool,
    pub ground_level: f32,
    pub world_width: f32,
    pub world_height: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player_rests_on_ground() {
        let state = GameState::new(Tuning::default(), 800.0, 600.0, 7);
        assert_eq!(state.ground_level, 400.0);
        assert_eq!(state.player.pos.y, 400.0 - PLAYER_HEIGHT);
        assert_eq!(state.player.jump, JumpPhase::Grounded);
    }

    #[test]
    fn test_jump_only_starts_from_ground() {
        let mut player = Player::new(400.0);
        player.start_jump();
        assert_eq!(player.jump, JumpPhase::Ascending { holding: true });

        // A second press mid-air must not restart the hold timer
        player.hold_timer = 0.3;
        player.start_jump();
        assert_eq!(player.hold_timer, 0.3);

        player.jump = JumpPhase::Falling;
        player.start_jump();
        assert_eq!(player.jump, JumpPhase::Falling);
    }

    #[test]
    fn test_release_only_affects_held_ascent() {
        let mut player = Player::new(400.0);
        player.release_jump();
        assert_eq!(player.jump, JumpPhase::Grounded);

        player.start_jump();
        player.release_jump();
        assert_eq!(player.jump, JumpPhase::Ascending { holding: false });

        // Releasing again is a no-op
        player.release_jump();
        assert_eq!(player.jump, JumpPhase::Ascending { holding: false });
    }

    #[test]
    fn test_reset_preserves_high_score() {
        let mut state = GameState::new(Tuning::default(), 800.0, 600.0, 7);
        state.score = 120;
        state.high_score = 500;
        state.game_over = true;
        state.obstacles.push(Obstacle {
            rect: Rect::new(300.0, 350.0, 50.0, 50.0),
        });
        state.clouds.push(Cloud {
            rect: Rect::new(400.0, 100.0, 100.0, 60.0),
            color: CLOUD_COLOR,
        });

        state.reset();
        assert_eq!(state.score, 0);
        assert_eq!(state.high_score, 500);
        assert!(!state.game_over);
        assert!(state.obstacles.is_empty());
        assert!(state.clouds.is_empty());
        assert_eq!(state.player.pos.y, 400.0 - PLAYER_HEIGHT);
    }

    #[test]
    fn test_snapshot_mirrors_state() {
        let mut state = GameState::new(Tuning::default(), 800.0, 600.0, 7);
        state.score = 30;
        state.high_score = 90;
        let frame = state.snapshot();
        assert_eq!(frame.score, 30);
        assert_eq!(frame.high_score, 90);
        assert_eq!(frame.player, state.player.rect());
        assert_eq!(frame.ground_level, 400.0);
        assert_eq!(frame.world_width, 800.0);
        assert!(frame.obstacles.is_empty());
    }
}
