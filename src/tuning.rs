//! Data-driven game balance
//!
//! All gameplay numbers live here so balance can be tweaked without touching
//! the simulation. On wasm a LocalStorage override can replace the defaults.

use serde::{Deserialize, Serialize};

/// Balance values for a run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tuning {
    // === Scrolling world ===
    /// Base scroll speed (pixels per frame)
    pub base_speed: f32,
    /// Base obstacle size (pixels)
    pub base_obstacle_width: f32,
    pub base_obstacle_height: f32,
    /// Per-step obstacle spawn probability
    pub obstacle_spawn_chance: f32,

    // === Jump model ===
    /// Downward acceleration once falling (pixels per frame²)
    pub gravity: f32,
    /// Initial jump velocity (negative = upward, pixels per frame)
    pub initial_jump_power: f32,
    /// Altitude cap above the ground pose (pixels)
    pub max_jump_height: f32,
    /// Maximum seconds the jump input keeps adding height
    pub max_jump_hold_time: f32,

    // === Background ===
    /// Cloud scroll speed as a fraction of obstacle speed
    pub cloud_speed_factor: f32,
    /// Per-step cloud spawn probability (while under the cap)
    pub cloud_spawn_chance: f32,
    /// Upper bound on live clouds
    pub max_clouds: usize,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            base_speed: 10.0,
            base_obstacle_width: 50.0,
            base_obstacle_height: 50.0,
            obstacle_spawn_chance: 0.01,

            gravity: 1.5,
            initial_jump_power: -20.0,
            max_jump_height: 200.0,
            max_jump_hold_time: 0.5,

            cloud_speed_factor: 0.5,
            cloud_spawn_chance: 0.01,
            max_clouds: 8,
        }
    }
}

impl Tuning {
    /// Scroll speed at the given score: base + floor(score/100)
    pub fn speed_for(&self, score: u64) -> f32 {
        self.base_speed + (score / 100) as f32
    }

    /// Obstacle width at the given score: base + floor(score/200)
    pub fn obstacle_width_for(&self, score: u64) -> f32 {
        self.base_obstacle_width + (score / 200) as f32
    }

    /// Obstacle height at the given score: base + floor(score/200)
    pub fn obstacle_height_for(&self, score: u64) -> f32 {
        self.base_obstacle_height + (score / 200) as f32
    }

    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "mud_dash_tuning";

    /// Load tuning override from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(tuning) = serde_json::from_str(&json) {
                    log::info!("Loaded tuning override from LocalStorage");
                    return tuning;
                }
            }
        }

        log::info!("Using default tuning");
        Self::default()
    }

    /// Save tuning override to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Tuning saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_is_derived_not_stored() {
        let t = Tuning::default();
        assert_eq!(t.speed_for(0), 10.0);
        assert_eq!(t.speed_for(99), 10.0);
        assert_eq!(t.speed_for(100), 11.0);
        assert_eq!(t.speed_for(250), 12.0);
        assert_eq!(t.obstacle_width_for(199), 50.0);
        assert_eq!(t.obstacle_width_for(200), 51.0);
        assert_eq!(t.obstacle_height_for(300), 51.0);
        assert_eq!(t.obstacle_height_for(400), 52.0);
    }

    #[test]
    fn test_round_trips_as_json() {
        let t = Tuning::default();
        let json = serde_json::to_string(&t).unwrap();
        let back: Tuning = serde_json::from_str(&json).unwrap();
        assert_eq!(back.base_speed, t.base_speed);
        assert_eq!(back.max_clouds, t.max_clouds);
    }
}
