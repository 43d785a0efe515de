//! Mud Dash - an endless side-scrolling jump runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (jump physics, obstacles, scoring)
//! - `render`: Drawing seam + Canvas2D backend on wasm
//! - `score`: High score persistence capability
//! - `tuning`: Data-driven game balance

pub mod render;
pub mod score;
pub mod sim;
pub mod tuning;

pub use score::{HIGH_SCORE_KEY, MemoryStore, ScoreStore};
pub use sim::{InputEvent, RenderState, Simulation};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, matching per-frame velocity units)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Elapsed-time clamp per `advance` call (backgrounded-tab protection)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Player rest pose
    pub const PLAYER_X: f32 = 50.0;
    pub const PLAYER_WIDTH: f32 = 50.0;
    pub const PLAYER_HEIGHT: f32 = 50.0;

    /// Cloud sprite dimensions
    pub const CLOUD_WIDTH: f32 = 100.0;
    pub const CLOUD_HEIGHT: f32 = 60.0;
    /// Clouds spawn with headroom above the horizon
    pub const CLOUD_GROUND_MARGIN: f32 = 100.0;

    /// Points awarded per obstacle passed
    pub const SCORE_PER_PASS: u64 = 10;
}

/// Ground line for a given world height: one third up from the bottom
#[inline]
pub fn ground_level(world_height: f32) -> f32 {
    world_height - world_height / 3.0
}
