//! Fixed timestep simulation step
//!
//! Advances the world by exactly one 60 Hz frame: jump physics, obstacle
//! scrolling and recycling, collision, scoring, background clouds.

use crate::consts::*;
use crate::score::{HIGH_SCORE_KEY, ScoreStore};

use super::collision::Rect;
use super::state::{CLOUD_COLOR, Cloud, GameState, JumpPhase, Obstacle};

/// Advance the game state by one fixed timestep. Frozen after game over.
pub fn step(state: &mut GameState, store: &mut dyn ScoreStore) {
    if state.game_over {
        return;
    }

    // Difficulty is derived from the score at frame entry, never stored
    let speed = state.tuning.speed_for(state.score);

    update_player(state);

    // Obstacles scroll at the live speed. An obstacle fully past the left
    // edge scores, but is removed only after this frame's collision checks.
    let player_rect = state.player.rect();
    for i in 0..state.obstacles.len() {
        state.obstacles[i].rect.pos.x -= speed;

        if state.obstacles[i].rect.right() < 0.0 {
            state.score += SCORE_PER_PASS;
        }

        if player_rect.overlaps(&state.obstacles[i].rect) {
            state.game_over = true;
            if state.score > state.high_score {
                state.high_score = state.score;
                store.set(HIGH_SCORE_KEY, state.high_score);
            }
        }
    }
    state.obstacles.retain(|o| o.rect.right() >= 0.0);

    let chance = state.tuning.obstacle_spawn_chance;
    if state.roll(chance) {
        spawn_obstacle(state);
    }

    // Background clouds drift at half speed and wrap instead of despawning
    let cloud_speed = speed * state.tuning.cloud_speed_factor;
    let world_width = state.world_width;
    for cloud in &mut state.clouds {
        cloud.rect.pos.x -= cloud_speed;
        if cloud.rect.right() < 0.0 {
            cloud.rect.pos.x = world_width;
        }
    }
    let chance = state.tuning.cloud_spawn_chance;
    if state.clouds.len() < state.tuning.max_clouds && state.roll(chance) {
        spawn_cloud(state);
    }
}

/// Variable-height jump model, integration and clamps
fn update_player(state: &mut GameState) {
    let tuning = &state.tuning;
    let player = &mut state.player;

    match player.jump {
        JumpPhase::Ascending { holding: true } => {
            // Velocity is set, not accumulated: it decays linearly toward
            // zero as the hold timer saturates.
            player.hold_timer = (player.hold_timer + SIM_DT).min(tuning.max_jump_hold_time);
            let progress = player.hold_timer / tuning.max_jump_hold_time;
            player.velocity_y = tuning.initial_jump_power * (1.0 - progress);
        }
        // Released early: coast at the frozen velocity until the cap
        JumpPhase::Ascending { holding: false } => {}
        JumpPhase::Falling => player.velocity_y += tuning.gravity,
        JumpPhase::Grounded => {}
    }

    player.pos.y += player.velocity_y;

    // Altitude cap: snap to the apex and let gravity take over, held or not
    let apex = state.ground_level - player.size.y - tuning.max_jump_height;
    if matches!(player.jump, JumpPhase::Ascending { .. }) && player.pos.y <= apex {
        player.pos.y = apex;
        player.velocity_y = 0.0;
        player.jump = JumpPhase::Falling;
    }

    // Ground and ceiling clamps always run, whatever the step did
    if player.pos.y > state.ground_level - player.size.y {
        player.land(state.ground_level);
    }
    if player.pos.y < 0.0 {
        player.pos.y = 0.0;
        player.velocity_y = 0.0;
    }
}

/// Append an obstacle at the right edge, sized by the current difficulty
pub fn spawn_obstacle(state: &mut GameState) {
    let w = state.tuning.obstacle_width_for(state.score);
    let h = state.tuning.obstacle_height_for(state.score);
    state.obstacles.push(Obstacle {
        rect: Rect::new(state.world_width, state.ground_level - h, w, h),
    });
}

/// Append a cloud at the right edge at a random altitude
pub fn spawn_cloud(state: &mut GameState) {
    let y = state.random_cloud_y();
    let x = state.world_width;
    state.clouds.push(Cloud {
        rect: Rect::new(x, y, CLOUD_WIDTH, CLOUD_HEIGHT),
        color: CLOUD_COLOR,
    });
}
