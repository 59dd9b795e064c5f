use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::Line,
    widgets::canvas::{Canvas, Context, Line as CanvasLine, Points},
};

use crate::entities::Vec2;
use crate::scene::{Align, DrawCommand, RenderView, build_scene};

/// Spacing of the horizontal strokes used to fill shapes, in field units.
const FILL_STEP: f32 = 2.0;

/// Handles all rendering responsibilities for the game
pub struct GameRenderer {
    marker: Marker,
}

impl Default for GameRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl GameRenderer {
    /// Creates a new GameRenderer
    pub fn new() -> Self {
        Self {
            marker: Marker::Braille,
        }
    }

    /// Paints the whole field, stretched over `frame.area()`.
    pub fn render(&self, frame: &mut Frame, view: &RenderView) {
        let area = frame.area();
        let commands = build_scene(view);
        let (width, height) = (view.field_width, view.field_height);
        let units_per_cell = units_per_cell(width, area);

        let canvas = Canvas::default()
            .marker(self.marker)
            .background_color(Color::Black)
            .x_bounds([0.0, width as f64])
            .y_bounds([0.0, height as f64])
            .paint(|ctx| {
                for command in &commands {
                    paint_command(ctx, command, height, units_per_cell);
                }
            });

        frame.render_widget(canvas, area);
    }
}

/// Field units covered by one terminal column.
fn units_per_cell(field_width: f32, area: Rect) -> f32 {
    field_width / area.width.max(1) as f32
}

/// Field y grows downward; the canvas grows upward.
fn to_canvas(point: Vec2, field_height: f32) -> (f64, f64) {
    (point.x as f64, (field_height - point.y) as f64)
}

fn paint_command(ctx: &mut Context, command: &DrawCommand, field_height: f32, units_per_cell: f32) {
    match command {
        DrawCommand::Polygon {
            points,
            color,
            filled,
        } => paint_polygon(ctx, points, *color, *filled, field_height),
        DrawCommand::Ellipse {
            center,
            radius_x,
            radius_y,
            color,
            filled,
        } => {
            // Anything smaller than a fill stroke collapses to one dot
            if *filled && radius_x.max(*radius_y) < FILL_STEP {
                ctx.draw(&Points {
                    coords: &[to_canvas(*center, field_height)],
                    color: *color,
                });
            } else {
                let outline = ellipse_points(*center, *radius_x, *radius_y);
                paint_polygon(ctx, &outline, *color, *filled, field_height);
            }
        }
        DrawCommand::Line { from, to, color } => {
            paint_line(ctx, *from, *to, *color, field_height);
        }
        DrawCommand::Text {
            pos,
            text,
            color,
            align,
            bold,
        } => {
            let text_width = text.chars().count() as f32 * units_per_cell;
            let x = match align {
                Align::Left => pos.x,
                Align::Center => pos.x - text_width / 2.0,
                Align::Right => pos.x - text_width,
            };
            let mut style = Style::default().fg(*color);
            if *bold {
                style = style.add_modifier(Modifier::BOLD);
            }
            let (x, y) = to_canvas(Vec2::new(x.max(0.0), pos.y), field_height);
            ctx.print(x, y, Line::styled(text.clone(), style));
        }
    }
}

fn paint_line(ctx: &mut Context, from: Vec2, to: Vec2, color: Color, field_height: f32) {
    let (x1, y1) = to_canvas(from, field_height);
    let (x2, y2) = to_canvas(to, field_height);
    ctx.draw(&CanvasLine::new(x1, y1, x2, y2, color));
}

fn paint_polygon(ctx: &mut Context, points: &[Vec2], color: Color, filled: bool, field_height: f32) {
    if points.len() < 2 {
        return;
    }

    if filled {
        for (from, to) in scanline_spans(points, FILL_STEP) {
            paint_line(ctx, from, to, color, field_height);
        }
    }

    for (i, &from) in points.iter().enumerate() {
        let to = points[(i + 1) % points.len()];
        paint_line(ctx, from, to, color, field_height);
    }
}

/// Outline of an axis-aligned ellipse. Larger ellipses get more segments.
pub fn ellipse_points(center: Vec2, radius_x: f32, radius_y: f32) -> Vec<Vec2> {
    let segments = (radius_x.max(radius_y) * 0.8).clamp(8.0, 48.0) as usize;
    (0..segments)
        .map(|i| {
            let angle = std::f32::consts::TAU * i as f32 / segments as f32;
            Vec2::new(
                center.x + angle.cos() * radius_x,
                center.y + angle.sin() * radius_y,
            )
        })
        .collect()
}

/// Horizontal spans covering the inside of a closed polygon (even-odd rule),
/// one row every `step` units.
pub fn scanline_spans(points: &[Vec2], step: f32) -> Vec<(Vec2, Vec2)> {
    let mut spans = Vec::new();
    if points.len() < 3 || step <= 0.0 {
        return spans;
    }

    let min_y = points.iter().map(|p| p.y).fold(f32::INFINITY, f32::min);
    let max_y = points.iter().map(|p| p.y).fold(f32::NEG_INFINITY, f32::max);

    let mut crossings = Vec::with_capacity(points.len());
    let mut y = min_y + step / 2.0;
    while y < max_y {
        crossings.clear();
        for (i, a) in points.iter().enumerate() {
            let b = points[(i + 1) % points.len()];
            // Half-open so a vertex on the scanline counts once
            if (a.y <= y && b.y > y) || (b.y <= y && a.y > y) {
                let t = (y - a.y) / (b.y - a.y);
                crossings.push(a.x + t * (b.x - a.x));
            }
        }
        crossings.sort_by(f32::total_cmp);
        for pair in crossings.chunks_exact(2) {
            spans.push((Vec2::new(pair[0], y), Vec2::new(pair[1], y)));
        }
        y += step;
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_fill_spans_full_width() {
        let square = [
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(0.0, 10.0),
        ];
        let spans = scanline_spans(&square, 2.0);
        assert_eq!(spans.len(), 5);
        for (from, to) in spans {
            assert_eq!(from.x, 0.0);
            assert_eq!(to.x, 10.0);
        }
    }

    #[test]
    fn test_concave_shape_splits_rows() {
        // A "U": the middle rows near the top are two separate spans
        let u = [
            Vec2::new(0.0, 0.0),
            Vec2::new(3.0, 0.0),
            Vec2::new(3.0, 6.0),
            Vec2::new(7.0, 6.0),
            Vec2::new(7.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(0.0, 10.0),
        ];
        let spans = scanline_spans(&u, 2.0);
        let first_row: Vec<_> = spans.iter().filter(|(from, _)| from.y == 1.0).collect();
        assert_eq!(first_row.len(), 2);
    }

    #[test]
    fn test_degenerate_polygon_has_no_spans() {
        assert!(scanline_spans(&[Vec2::new(0.0, 0.0), Vec2::new(5.0, 5.0)], 2.0).is_empty());
    }

    #[test]
    fn test_ellipse_points_lie_on_ellipse() {
        let center = Vec2::new(50.0, 50.0);
        for point in ellipse_points(center, 20.0, 10.0) {
            let dx = (point.x - center.x) / 20.0;
            let dy = (point.y - center.y) / 10.0;
            assert!((dx * dx + dy * dy - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_canvas_y_is_flipped() {
        assert_eq!(to_canvas(Vec2::new(10.0, 0.0), 600.0), (10.0, 600.0));
        assert_eq!(to_canvas(Vec2::new(10.0, 600.0), 600.0), (10.0, 0.0));
    }
}
