//! Frame painting
//!
//! The simulation hands the renderer a `RenderState` snapshot; `draw_frame`
//! paints it onto anything implementing `Surface`. The wasm build provides a
//! Canvas2D-backed surface.

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::Canvas2d;

use crate::sim::RenderState;

/// RGB palette entries
pub const SKY_COLOR: [u8; 3] = [135, 206, 235];
pub const MUD_COLOR: [u8; 3] = [139, 69, 19];
pub const HORIZON_COLOR: [u8; 3] = [0, 0, 0];
pub const PLAYER_COLOR: [u8; 3] = [255, 0, 0];
pub const OBSTACLE_COLOR: [u8; 3] = [0, 128, 0];
pub const TEXT_COLOR: [u8; 3] = [0, 0, 0];

/// Minimal drawing surface the game needs: filled rectangles and ellipses,
/// text, clear, and a queryable size
pub trait Surface {
    fn width(&self) -> f32;
    fn height(&self) -> f32;
    fn clear(&mut self);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: [u8; 3]);
    fn fill_ellipse(&mut self, cx: f32, cy: f32, rx: f32, ry: f32, color: [u8; 3]);
    fn draw_text(&mut self, text: &str, x: f32, y: f32, size_px: f32, color: [u8; 3]);
}

/// Paint one frame: sky, clouds, ground, horizon, entities, HUD text, and
/// the game-over overlay when the run has ended
pub fn draw_frame(surface: &mut dyn Surface, frame: &RenderState) {
    let w = frame.world_width;
    let h = frame.world_height;
    let ground = frame.ground_level;

    surface.clear();

    // Sky above the horizon, mud below
    surface.fill_rect(0.0, 0.0, w, ground, SKY_COLOR);

    for cloud in &frame.clouds {
        let center = cloud.rect.center();
        surface.fill_ellipse(
            center.x,
            center.y,
            cloud.rect.size.x / 2.0,
            cloud.rect.size.y / 2.0,
            cloud.color,
        );
    }

    surface.fill_rect(0.0, ground, w, h - ground, MUD_COLOR);
    surface.fill_rect(0.0, ground - 1.0, w, 2.0, HORIZON_COLOR);

    let p = &frame.player;
    surface.fill_rect(p.pos.x, p.pos.y, p.size.x, p.size.y, PLAYER_COLOR);

    for obstacle in &frame.obstacles {
        surface.fill_rect(
            obstacle.pos.x,
            obstacle.pos.y,
            obstacle.size.x,
            obstacle.size.y,
            OBSTACLE_COLOR,
        );
    }

    surface.draw_text(&format!("Score: {}", frame.score), 20.0, 30.0, 24.0, TEXT_COLOR);
    surface.draw_text(
        &format!("High Score: {}", frame.high_score),
        20.0,
        60.0,
        24.0,
        TEXT_COLOR,
    );

    if frame.game_over {
        surface.draw_text("Game Over", w / 2.0 - 100.0, h / 2.0, 48.0, TEXT_COLOR);
        surface.draw_text(
            "Press Space to Restart",
            w / 2.0 - 130.0,
            h / 2.0 + 50.0,
            24.0,
            TEXT_COLOR,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::MemoryStore;
    use crate::sim::Simulation;
    use crate::tuning::Tuning;

    /// Records draw calls for inspection
    #[derive(Debug, Default)]
    struct RecordingSurface {
        cleared: usize,
        rects: Vec<[u8; 3]>,
        ellipses: usize,
        texts: Vec<String>,
    }

    impl Surface for RecordingSurface {
        fn width(&self) -> f32 {
            800.0
        }
        fn height(&self) -> f32 {
            600.0
        }
        fn clear(&mut self) {
            self.cleared += 1;
        }
        fn fill_rect(&mut self, _x: f32, _y: f32, _w: f32, _h: f32, color: [u8; 3]) {
            self.rects.push(color);
        }
        fn fill_ellipse(&mut self, _cx: f32, _cy: f32, _rx: f32, _ry: f32, _color: [u8; 3]) {
            self.ellipses += 1;
        }
        fn draw_text(&mut self, text: &str, _x: f32, _y: f32, _size_px: f32, _color: [u8; 3]) {
            self.texts.push(text.to_string());
        }
    }

    fn quiet_sim() -> Simulation<MemoryStore> {
        let tuning = Tuning {
            obstacle_spawn_chance: 0.0,
            cloud_spawn_chance: 0.0,
            ..Tuning::default()
        };
        Simulation::new(tuning, 800.0, 600.0, 42, MemoryStore::new())
    }

    #[test]
    fn test_running_frame_has_no_overlay() {
        let mut sim = quiet_sim();
        let frame = sim.advance(0.0);

        let mut surface = RecordingSurface::default();
        draw_frame(&mut surface, &frame);

        assert_eq!(surface.cleared, 1);
        // Sky, mud, horizon, player
        assert!(surface.rects.contains(&SKY_COLOR));
        assert!(surface.rects.contains(&MUD_COLOR));
        assert!(surface.rects.contains(&PLAYER_COLOR));
        assert_eq!(surface.texts.len(), 2);
        assert!(surface.texts[0].starts_with("Score:"));
        assert!(surface.texts[1].starts_with("High Score:"));
    }

    #[test]
    fn test_game_over_frame_has_overlay() {
        let mut sim = quiet_sim();
        let mut frame = sim.advance(0.0);
        frame.game_over = true;

        let mut surface = RecordingSurface::default();
        draw_frame(&mut surface, &frame);

        assert!(surface.texts.iter().any(|t| t == "Game Over"));
        assert!(surface.texts.iter().any(|t| t.contains("Restart")));
    }

    #[test]
    fn test_clouds_paint_as_ellipses() {
        use crate::sim::{CLOUD_COLOR, Cloud, Rect};

        let mut sim = quiet_sim();
        let mut frame = sim.advance(0.0);
        frame.clouds.push(Cloud {
            rect: Rect::new(200.0, 100.0, 100.0, 60.0),
            color: CLOUD_COLOR,
        });
        frame.clouds.push(Cloud {
            rect: Rect::new(500.0, 50.0, 100.0, 60.0),
            color: CLOUD_COLOR,
        });

        let mut surface = RecordingSurface::default();
        draw_frame(&mut surface, &frame);
        assert_eq!(surface.ellipses, 2);
    }
}
