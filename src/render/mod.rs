//! Rendering over an immediate-mode drawing surface
//!
//! The game draws through the small [`Canvas`] trait: clear, closed paths,
//! and text. Regular polygons and circles have default implementations in
//! terms of paths. The browser build implements it on a 2D canvas context;
//! tests and the native runner use the command [`Recorder`].

#[cfg(target_arch = "wasm32")]
pub mod canvas2d;
pub mod commands;
pub mod shapes;

pub use commands::{DrawCommand, Recorder};

use glam::Vec2;
use serde::Serialize;

use crate::Settings;
use crate::clock::FrameStats;
use crate::consts::POWER_UP_RADIUS;
use crate::sim::{EntityRef, GamePhase, GameState, polygon_vertices};

pub const DEFAULT_COLOR: &str = "white";
pub const DEBUG_COLOR: &str = "green";
const HUD_COLOR: &str = "green";
const METEORITE_COLOR: &str = "gray";
const GAME_OVER_COLOR: &str = "red";
const VICTORY_COLOR: &str = "gold";

const HUD_FONT: &str = "10px sans-serif";
const BANNER_FONT: &str = "48px sans-serif";
/// Vertical distance between HUD lines
const HUD_LINE: f32 = 10.0;
const HUD_MARGIN: f32 = 10.0;

/// Segments used when a surface has no native circle
const CIRCLE_SEGMENTS: u32 = 24;

/// Stroke (and optional fill) of a closed path
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Style {
    pub color: &'static str,
    pub fill: bool,
    pub line_width: f32,
}

impl Style {
    pub const fn filled(color: &'static str, line_width: f32) -> Self {
        Self {
            color,
            fill: true,
            line_width,
        }
    }

    pub const fn outline(color: &'static str, line_width: f32) -> Self {
        Self {
            color,
            fill: false,
            line_width,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Align {
    Left,
    Center,
    Right,
}

impl Align {
    /// CSS `textAlign` keyword
    pub fn as_css(&self) -> &'static str {
        match self {
            Align::Left => "left",
            Align::Center => "center",
            Align::Right => "right",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TextStyle {
    pub color: &'static str,
    pub font: &'static str,
    pub align: Align,
}

impl TextStyle {
    const fn hud(align: Align) -> Self {
        Self {
            color: HUD_COLOR,
            font: HUD_FONT,
            align,
        }
    }
}

/// Immediate-mode drawing surface
pub trait Canvas {
    /// Erase the whole surface
    fn clear(&mut self, width: f32, height: f32);

    /// Closed path through `points`
    fn path(&mut self, points: &[Vec2], style: &Style);

    /// Text anchored at `pos` (baseline, horizontal position per alignment)
    fn text(&mut self, pos: Vec2, text: &str, style: &TextStyle);

    /// Regular polygon, apex up at rotation 0
    fn polygon(&mut self, center: Vec2, sides: u32, radius: f32, rotation: f32, style: &Style) {
        self.path(&polygon_vertices(center, sides, radius, rotation), style);
    }

    fn circle(&mut self, center: Vec2, radius: f32, style: &Style) {
        self.polygon(center, CIRCLE_SEGMENTS, radius, 0.0, style);
    }
}

/// Draw one complete frame: entities, overlays, HUD, and the end banner
pub fn draw_frame<C: Canvas + ?Sized>(
    canvas: &mut C,
    state: &GameState,
    settings: &Settings,
    stats: &FrameStats,
) {
    let surface = state.surface;
    canvas.clear(surface.width, surface.height);

    for entity in state.entities() {
        draw_entity(canvas, entity);
        if settings.show_hitboxes {
            let outline = entity.body().aabb().outline();
            canvas.path(&outline, &Style::outline(DEBUG_COLOR, 1.0));
        }
    }

    draw_hud(canvas, state, settings, stats);

    match state.phase() {
        GamePhase::GameOver => draw_banner(canvas, state, "GAME OVER", GAME_OVER_COLOR),
        GamePhase::Victory => draw_banner(canvas, state, "VICTORY", VICTORY_COLOR),
        GamePhase::Playing => {}
    }
}

fn draw_entity<C: Canvas + ?Sized>(canvas: &mut C, entity: EntityRef<'_>) {
    let ship = Style::filled(DEFAULT_COLOR, 2.0);
    match entity {
        EntityRef::Player(p) => canvas.polygon(p.body.pos, p.sides, p.radius, p.rotation, &ship),
        EntityRef::Enemy(e) => canvas.polygon(e.body.pos, e.sides, e.radius, e.rotation, &ship),
        EntityRef::Meteorite(m) => canvas.polygon(
            m.body.pos,
            m.sides,
            m.radius,
            m.rotation,
            &Style::filled(METEORITE_COLOR, 2.0),
        ),
        EntityRef::Projectile(p) => {
            let rect = shapes::projectile(p.body.pos);
            canvas.path(&rect, &Style::filled(DEFAULT_COLOR, 1.0));
        }
        EntityRef::PowerUp(p) => {
            let color = shapes::power_up_color(p.kind);
            canvas.circle(p.body.pos, POWER_UP_RADIUS, &Style::outline(color, 2.0));
            for part in shapes::power_up_icon(p.kind, p.body.pos) {
                canvas.path(&part, &Style::filled(color, 1.0));
            }
        }
    }
}

fn draw_hud<C: Canvas + ?Sized>(
    canvas: &mut C,
    state: &GameState,
    settings: &Settings,
    stats: &FrameStats,
) {
    let surface = state.surface;
    let left = TextStyle::hud(Align::Left);
    let right = TextStyle::hud(Align::Right);

    if settings.show_stats {
        canvas.text(Vec2::new(HUD_MARGIN, 20.0), &format!("FPS: {}", stats.fps), &left);
        canvas.text(
            Vec2::new(HUD_MARGIN, 20.0 + HUD_LINE),
            &format!("Avg latency: {:.4}", stats.avg_latency),
            &left,
        );
        canvas.text(
            Vec2::new(HUD_MARGIN, surface.height - HUD_MARGIN),
            &format!("E: {}", state.entities().count()),
            &left,
        );
    }

    let x = surface.width - HUD_MARGIN;
    if settings.show_progress {
        canvas.text(
            Vec2::new(x, 20.0),
            &format!("Kills: {}/{}", state.kills, state.tuning.kill_objective),
            &right,
        );
        canvas.text(
            Vec2::new(x, 20.0 + HUD_LINE),
            &format!("Wave: {}", state.waves),
            &right,
        );
    }

    if settings.show_power_up_timers {
        let mut y = surface.height - HUD_MARGIN;
        for (kind, remaining) in state.player.power_ups.active() {
            canvas.text(
                Vec2::new(x, y),
                &format!("{}: {:.1}s", kind.label(), remaining),
                &right,
            );
            y -= HUD_LINE;
        }
    }
}

fn draw_banner<C: Canvas + ?Sized>(canvas: &mut C, state: &GameState, text: &str, color: &'static str) {
    let center = Vec2::new(state.surface.width / 2.0, state.surface.height / 2.0);
    let style = TextStyle {
        color,
        font: BANNER_FONT,
        align: Align::Center,
    };
    canvas.text(center, text, &style);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Surface;
    use crate::sim::{Meteorite, PowerUp, PowerUpKind, Projectile, spawn_wave};
    use crate::tuning::Tuning;

    fn state() -> GameState {
        GameState::new(Surface::default(), Tuning::default(), 5)
    }

    fn draw(state: &GameState, settings: &Settings) -> Recorder {
        let mut recorder = Recorder::new();
        let stats = FrameStats {
            fps: 60,
            latency: 1.0 / 60.0,
            avg_latency: 1.0 / 60.0,
        };
        draw_frame(&mut recorder, state, settings, &stats);
        recorder
    }

    #[test]
    fn test_frame_starts_with_clear() {
        let recorder = draw(&state(), &Settings::default());
        assert!(matches!(
            recorder.commands().first(),
            Some(DrawCommand::Clear { width, height }) if *width == 800.0 && *height == 600.0
        ));
    }

    #[test]
    fn test_hud_text() {
        let mut state = state();
        state.kills = 12;
        state.waves = 3;
        let recorder = draw(&state, &Settings::default());
        let texts: Vec<_> = recorder.texts().collect();
        assert!(texts.contains(&"FPS: 60"));
        assert!(texts.contains(&"E: 1"));
        assert!(texts.contains(&"Kills: 12/300"));
        assert!(texts.contains(&"Wave: 3"));
        assert!(!texts.contains(&"VICTORY"));
    }

    #[test]
    fn test_victory_banner() {
        let mut state = state();
        state.kills = state.tuning.kill_objective;
        let recorder = draw(&state, &Settings::default());
        assert!(recorder.texts().any(|t| t == "VICTORY"));
    }

    #[test]
    fn test_game_over_banner_hides_player() {
        let mut state = state();
        state.player.body.kill();
        let recorder = draw(&state, &Settings::default());
        assert!(recorder.texts().any(|t| t == "GAME OVER"));
        // Nothing but the clear itself is drawn as a shape
        assert_eq!(recorder.paths().count(), 0);
    }

    #[test]
    fn test_hitbox_overlay() {
        let mut state = state();
        spawn_wave(&mut state);
        let plain = draw(&state, &Settings::default());

        let mut settings = Settings::default();
        settings.toggle_debug();
        let debug = draw(&state, &settings);

        let live = state.entities().count();
        assert_eq!(debug.paths().count(), plain.paths().count() + live);
        let outlines = debug
            .paths()
            .filter(|(points, style)| style.color == DEBUG_COLOR && points.len() == 4)
            .count();
        assert_eq!(outlines, live);
    }

    #[test]
    fn test_entity_shapes() {
        let mut state = state();
        let tuning = state.tuning.clone();
        state
            .meteorites
            .push(Meteorite::new(Vec2::new(100.0, 100.0), Vec2::ZERO, &tuning));
        state
            .projectiles
            .push(Projectile::new(Vec2::new(300.0, 300.0), 300.0));
        state.power_ups.push(PowerUp::new(
            Vec2::new(200.0, 200.0),
            PowerUpKind::MultiShoot,
            15.0,
        ));

        let recorder = draw(&state, &Settings::default());
        let sizes: Vec<usize> = recorder.paths().map(|(points, _)| points.len()).collect();
        // Power-up circle and its icon, meteorite, projectile, player
        assert!(sizes.contains(&(CIRCLE_SEGMENTS as usize)));
        assert!(sizes.contains(&7));
        assert!(sizes.contains(&3));
        assert_eq!(sizes.last(), Some(&3));
    }

    #[test]
    fn test_power_up_timers() {
        let mut state = state();
        state
            .player
            .power_ups
            .activate(PowerUpKind::SpeedUp, 15.0);
        let recorder = draw(&state, &Settings::default());
        assert!(recorder.texts().any(|t| t == "Speed: 15.0s"));

        let settings = Settings {
            show_power_up_timers: false,
            ..Settings::default()
        };
        let recorder = draw(&state, &settings);
        assert!(!recorder.texts().any(|t| t.starts_with("Speed")));
    }
}
