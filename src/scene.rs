//! Turns a read-only view of the game into drawing primitives.
//!
//! Nothing here touches the terminal: every screen is described as a list of
//! [`DrawCommand`]s in field coordinates, which the renderer then paints.

use ratatui::style::Color;
use std::f32::consts::{PI, TAU};

use crate::entities::{
    Bullet, Enemy, EnemyKind, Explosion, GameState, Player, PowerUp, PowerUpKind, Star, Vec2,
    map_range,
};
use crate::game::{Game, RunStats, Shield};

pub const PLAYER_COLOR: (u8, u8, u8) = (0, 255, 220);
const ENGINE_COLOR: (u8, u8, u8) = (255, 150, 0);
const COCKPIT_COLOR: (u8, u8, u8) = (100, 200, 255);
const ENEMY_COLORS: [(u8, u8, u8); 5] = [
    (255, 100, 100),
    (255, 200, 100),
    (255, 255, 100),
    (100, 255, 100),
    (100, 100, 255),
];
const POWER_UP_COLORS: [(u8, u8, u8); 3] = [(255, 100, 100), (100, 200, 255), (255, 255, 100)];

/// Horizontal anchoring of a text command relative to its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Polygon {
        points: Vec<Vec2>,
        color: Color,
        filled: bool,
    },
    Ellipse {
        center: Vec2,
        radius_x: f32,
        radius_y: f32,
        color: Color,
        filled: bool,
    },
    Line {
        from: Vec2,
        to: Vec2,
        color: Color,
    },
    Text {
        pos: Vec2,
        text: String,
        color: Color,
        align: Align,
        bold: bool,
    },
}

/// View struct that holds all game state needed for rendering
pub struct RenderView<'a> {
    pub game_state: GameState,
    pub player: &'a Player,
    pub bullets: &'a [Bullet],
    pub enemies: &'a [Enemy],
    pub power_ups: &'a [PowerUp],
    pub explosions: &'a [Explosion],
    pub stars: &'a [Star],
    pub stats: &'a RunStats,
    pub shield: Shield,
    pub frame_count: u64,
    pub pointer: Vec2,
    pub field_width: f32,
    pub field_height: f32,
}

impl<'a> RenderView<'a> {
    pub fn from_game(game: &'a Game, pointer: Vec2) -> Self {
        Self {
            game_state: game.state(),
            player: game.player(),
            bullets: game.bullets(),
            enemies: game.enemies(),
            power_ups: game.power_ups(),
            explosions: game.explosions(),
            stars: game.stars(),
            stats: game.stats(),
            shield: *game.shield(),
            frame_count: game.frame_count(),
            pointer,
            field_width: game.config().field_width,
            field_height: game.config().field_height,
        }
    }
}

/// Opaque colour from RGB.
pub fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(r, g, b)
}

/// Colour blended over the black background at opacity `alpha` (0..=255).
pub fn rgba((r, g, b): (u8, u8, u8), alpha: f32) -> Color {
    let a = alpha.clamp(0.0, 255.0) / 255.0;
    let blend = |channel: u8| (channel as f32 * a).round() as u8;
    Color::Rgb(blend(r), blend(g), blend(b))
}

/// Builds every primitive for the current screen, back to front.
pub fn build_scene(view: &RenderView) -> Vec<DrawCommand> {
    let mut scene = Scene::default();

    for star in view.stars {
        scene.star(star);
    }

    match view.game_state {
        GameState::Start => scene.start_screen(view),
        GameState::Playing => {
            scene.player(view);
            for bullet in view.bullets {
                scene.bullet(bullet);
            }
            for enemy in view.enemies {
                scene.enemy(enemy);
            }
            for power_up in view.power_ups {
                scene.power_up(power_up);
            }
            for explosion in view.explosions {
                scene.explosion(explosion);
            }
            scene.hud(view);
        }
        GameState::LevelUp => scene.level_up_screen(view),
        GameState::GameOver => scene.game_over_screen(view),
    }

    scene.cursor(view.pointer);
    scene.commands
}

/// Rotates `local` by `rotation` radians and moves it to `origin`.
fn place(origin: Vec2, rotation: f32, (x, y): (f32, f32)) -> Vec2 {
    let (sin, cos) = rotation.sin_cos();
    Vec2::new(origin.x + x * cos - y * sin, origin.y + x * sin + y * cos)
}

#[derive(Default)]
struct Scene {
    commands: Vec<DrawCommand>,
}

impl Scene {
    fn polygon(&mut self, points: Vec<Vec2>, color: Color, filled: bool) {
        self.commands.push(DrawCommand::Polygon {
            points,
            color,
            filled,
        });
    }

    /// Polygon from local vertices, rotated and placed at `origin`.
    fn shape(&mut self, origin: Vec2, rotation: f32, local: &[(f32, f32)], color: Color) {
        let points = local
            .iter()
            .map(|&vertex| place(origin, rotation, vertex))
            .collect();
        self.polygon(points, color, true);
    }

    fn circle(&mut self, center: Vec2, diameter: f32, color: Color, filled: bool) {
        self.commands.push(DrawCommand::Ellipse {
            center,
            radius_x: diameter / 2.0,
            radius_y: diameter / 2.0,
            color,
            filled,
        });
    }

    fn line(&mut self, from: Vec2, to: Vec2, color: Color) {
        self.commands.push(DrawCommand::Line { from, to, color });
    }

    fn text(&mut self, pos: Vec2, text: impl Into<String>, color: Color, align: Align, bold: bool) {
        self.commands.push(DrawCommand::Text {
            pos,
            text: text.into(),
            color,
            align,
            bold,
        });
    }

    fn star(&mut self, star: &Star) {
        // Small stars lean blue, large ones lean white
        let b = star.brightness.clamp(0.0, 255.0);
        let blue = (b + map_range(star.size, (1.0, 3.0), (50.0, 0.0))).min(255.0);
        let color = Color::Rgb(b as u8, b as u8, blue as u8);
        self.circle(star.pos, star.size, color, true);
    }

    fn ship(&mut self, pos: Vec2, size: f32, flame: Option<u64>) {
        let s = size;
        self.shape(
            pos,
            0.0,
            &[(0.0, -s), (s / 2.0, s / 2.0), (0.0, s / 4.0), (-s / 2.0, s / 2.0)],
            rgb(PLAYER_COLOR),
        );

        let engine_top = s / 4.0;
        let engine_bottom = s / 4.0 + s / 3.0;
        for (engine, left) in [-s / 3.0, s / 3.0 - s / 5.0].into_iter().enumerate() {
            let right = left + s / 5.0;
            self.shape(
                pos,
                0.0,
                &[
                    (left, engine_top),
                    (right, engine_top),
                    (right, engine_bottom),
                    (left, engine_bottom),
                ],
                rgb(ENGINE_COLOR),
            );

            if let Some(frame) = flame {
                // Flicker cycles through ten lengths between s/2 and s
                let flicker = ((frame.wrapping_mul(7) + engine as u64 * 3) % 10) as f32 / 10.0;
                let length = s / 2.0 + flicker * s / 2.0;
                let green = 100 + (frame.wrapping_mul(37) % 156) as u8;
                self.shape(
                    pos,
                    0.0,
                    &[
                        (left, engine_bottom),
                        (right, engine_bottom),
                        (left + s / 10.0, engine_bottom + length),
                    ],
                    Color::Rgb(255, green, 0),
                );
            }
        }

        self.circle(pos, s / 3.0, rgb(COCKPIT_COLOR), true);
    }

    fn player(&mut self, view: &RenderView) {
        let player = view.player;
        self.ship(player.pos, player.size, Some(view.frame_count));

        if view.shield.is_active() {
            let pulse = 128.0 + 64.0 * (view.frame_count as f32 * 0.1).sin();
            self.circle(
                player.pos,
                player.size * 2.5,
                rgba(PLAYER_COLOR, pulse),
                false,
            );
        }
    }

    fn bullet(&mut self, bullet: &Bullet) {
        for i in 0..5 {
            let alpha = 255.0 - i as f32 * 50.0;
            let trail = Vec2::new(bullet.pos.x, bullet.pos.y + i as f32 * 4.0);
            self.circle(
                trail,
                bullet.size * (5 - i) as f32 / 5.0,
                rgba(PLAYER_COLOR, alpha),
                true,
            );
        }
        self.circle(bullet.pos, bullet.size, Color::White, true);
    }

    fn enemy(&mut self, enemy: &Enemy) {
        let s = enemy.size;
        let pos = enemy.pos;
        let rot = enemy.rotation;
        let color = rgb(ENEMY_COLORS[enemy.kind.index()]);
        let detail = rgba((255, 255, 255), 100.0);

        match enemy.kind {
            EnemyKind::Triangle => {
                self.shape(
                    pos,
                    rot,
                    &[(0.0, -s / 2.0), (s / 2.0, s / 2.0), (-s / 2.0, s / 2.0)],
                    color,
                );
                self.circle(pos, s / 3.0, detail, true);
            }
            EnemyKind::Square => {
                let h = s / 2.0;
                self.shape(pos, rot, &[(-h, -h), (h, -h), (h, h), (-h, h)], color);
                let q = s / 4.0;
                self.shape(pos, rot, &[(-q, -q), (q, -q), (q, q), (-q, q)], detail);
            }
            EnemyKind::SpikedOrb => {
                self.circle(pos, s, color, true);
                for i in 0..8 {
                    let angle = TAU * i as f32 / 8.0 + rot;
                    let (sin, cos) = angle.sin_cos();
                    self.line(
                        Vec2::new(pos.x + cos * s / 2.0, pos.y + sin * s / 2.0),
                        Vec2::new(pos.x + cos * s, pos.y + sin * s),
                        color,
                    );
                }
                self.circle(pos, s / 2.0, detail, true);
            }
            EnemyKind::Diamond => {
                let h = s / 2.0;
                self.shape(pos, rot, &[(0.0, -h), (h, 0.0), (0.0, h), (-h, 0.0)], color);
                let q = s / 4.0;
                self.shape(pos, rot, &[(0.0, -q), (q, 0.0), (0.0, q), (-q, 0.0)], detail);
            }
            EnemyKind::Star => {
                let points: Vec<(f32, f32)> = (0..10)
                    .map(|i| {
                        let angle = TAU * i as f32 / 10.0;
                        let radius = if i % 2 == 0 { s / 2.0 } else { s / 4.0 };
                        (angle.cos() * radius, angle.sin() * radius)
                    })
                    .collect();
                self.shape(pos, rot, &points, color);
                self.circle(pos, s / 3.0, detail, true);
            }
        }
    }

    fn power_up(&mut self, power_up: &PowerUp) {
        let s = power_up.size;
        let pos = power_up.pos;
        let rot = power_up.rotation;
        let base = POWER_UP_COLORS[match power_up.kind {
            PowerUpKind::ExtraLife => 0,
            PowerUpKind::Shield => 1,
            PowerUpKind::ClearEnemies => 2,
        }];

        // Glow rings, faintest outermost
        for i in (1..=3).rev() {
            self.circle(pos, s * (1.0 + i as f32 / 3.0), rgba(base, 50.0 / i as f32), true);
        }
        self.circle(pos, s, rgb(base), true);

        match power_up.kind {
            PowerUpKind::ExtraLife => {
                let (a, b) = (s / 4.0, s / 8.0);
                self.shape(
                    pos,
                    rot,
                    &[
                        (-a, -b),
                        (-b, -b),
                        (-b, -a),
                        (b, -a),
                        (b, -b),
                        (a, -b),
                        (a, b),
                        (b, b),
                        (b, a),
                        (-b, a),
                        (-b, b),
                        (-a, b),
                    ],
                    Color::White,
                );
            }
            PowerUpKind::Shield => {
                // Upper arc from 225° to 405°
                let radius = s * 0.35;
                let steps = 8;
                let start = PI + PI / 4.0;
                let arc: Vec<Vec2> = (0..=steps)
                    .map(|i| {
                        let angle = start + PI * i as f32 / steps as f32;
                        place(pos, rot, (angle.cos() * radius, angle.sin() * radius))
                    })
                    .collect();
                for pair in arc.windows(2) {
                    self.line(pair[0], pair[1], Color::White);
                }
                self.line(
                    place(pos, rot, (-s / 6.0, s / 6.0)),
                    place(pos, rot, (s / 6.0, s / 6.0)),
                    Color::White,
                );
            }
            PowerUpKind::ClearEnemies => {
                self.circle(pos, s * 0.5, Color::White, true);
                for i in 0..8 {
                    let angle = TAU * i as f32 / 8.0;
                    self.line(
                        pos,
                        place(pos, rot, (angle.cos() * s / 3.0, angle.sin() * s / 3.0)),
                        Color::White,
                    );
                }
            }
        }
    }

    fn explosion(&mut self, explosion: &Explosion) {
        let alpha = explosion.alpha();
        for particle in &explosion.particles {
            self.circle(
                explosion.pos + particle.offset,
                particle.size,
                rgba((255, 200, 0), alpha),
                true,
            );
        }
        self.circle(
            explosion.pos,
            explosion.flash_size(),
            rgba((255, 255, 200), alpha * 200.0 / 255.0),
            true,
        );
    }

    fn hud(&mut self, view: &RenderView) {
        let stats = view.stats;
        self.text(
            Vec2::new(20.0, 30.0),
            format!("Score: {}", stats.score),
            Color::White,
            Align::Left,
            false,
        );
        self.text(Vec2::new(20.0, 60.0), "Lives: ", Color::White, Align::Left, false);
        for i in 0..stats.lives {
            self.ship(Vec2::new(80.0 + i as f32 * 25.0, 55.0), 10.0, None);
        }

        self.text(
            Vec2::new(view.field_width - 20.0, 30.0),
            format!("Level: {}", stats.level),
            Color::White,
            Align::Right,
            false,
        );

        if view.shield.is_active() {
            self.text(
                Vec2::new(view.field_width / 2.0, 30.0),
                format!("Shield: {}s", view.shield.seconds_left()),
                rgba(PLAYER_COLOR, 128.0),
                Align::Center,
                false,
            );
        }
    }

    fn start_screen(&mut self, view: &RenderView) {
        let (cx, h) = (view.field_width / 2.0, view.field_height);
        self.text(
            Vec2::new(cx, h / 3.0),
            "COSMIC DEFENDER",
            Color::White,
            Align::Center,
            true,
        );
        let lines = [
            ("Move: Mouse", 0.0),
            ("Shoot: Click or Space", 40.0),
            ("Press ENTER to start", 100.0),
            ("Press ESC to return to menu", 130.0),
        ];
        for (line, offset) in lines {
            self.text(
                Vec2::new(cx, h / 2.0 + offset),
                line,
                Color::White,
                Align::Center,
                false,
            );
        }
        self.ship(Vec2::new(cx, h / 2.0 - 50.0), 30.0, None);
    }

    fn level_up_screen(&mut self, view: &RenderView) {
        let (cx, h) = (view.field_width / 2.0, view.field_height);
        self.text(
            Vec2::new(cx, h / 3.0),
            format!("LEVEL {}", view.stats.level),
            Color::Rgb(0, 255, 0),
            Align::Center,
            true,
        );
        self.text(
            Vec2::new(cx, h / 2.0),
            format!("Score: {}", view.stats.score),
            Color::White,
            Align::Center,
            false,
        );
        self.text(
            Vec2::new(cx, h / 2.0 + 50.0),
            "Press ENTER to continue",
            Color::White,
            Align::Center,
            false,
        );
    }

    fn game_over_screen(&mut self, view: &RenderView) {
        let (cx, h) = (view.field_width / 2.0, view.field_height);
        self.text(
            Vec2::new(cx, h / 3.0),
            "GAME OVER",
            Color::Rgb(255, 0, 0),
            Align::Center,
            true,
        );
        self.text(
            Vec2::new(cx, h / 2.0),
            format!("Final Score: {}", view.stats.score),
            Color::White,
            Align::Center,
            false,
        );
        self.text(
            Vec2::new(cx, h / 2.0 + 50.0),
            "Press ENTER to play again",
            Color::White,
            Align::Center,
            false,
        );
    }

    fn cursor(&mut self, pointer: Vec2) {
        self.circle(pointer, 10.0, Color::White, false);
        self.line(
            Vec2::new(pointer.x - 10.0, pointer.y),
            Vec2::new(pointer.x + 10.0, pointer.y),
            Color::White,
        );
        self.line(
            Vec2::new(pointer.x, pointer.y - 10.0),
            Vec2::new(pointer.x, pointer.y + 10.0),
            Color::White,
        );
    }
}
