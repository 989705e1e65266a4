//! Rasterises a recorded frame onto a ratatui canvas.
//!
//! Playfield coordinates have y growing downward; the canvas has y growing
//! upward, so every y is flipped against `PLAYFIELD_HEIGHT` here.

use crate::constants::{PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH, SKY_BLUE};
use crate::render::{DrawList, Primitive, Rgb};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::canvas::{Canvas, Painter, Shape},
    Frame,
};

/// Width/height of one terminal cell in screen pixels, roughly.
const CELL_ASPECT: f64 = 0.5;

pub fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// Largest rectangle inside `area` with the playfield's aspect ratio,
/// centered horizontally and anchored to the top.
pub fn fit_playfield(area: Rect) -> Rect {
    let ratio = PLAYFIELD_WIDTH / PLAYFIELD_HEIGHT / CELL_ASPECT;

    let max_rows_for_width = (area.width as f64 / ratio).floor() as u16;
    let height = area.height.min(max_rows_for_width);
    let width = ((height as f64 * ratio).round() as u16).min(area.width);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y,
        width,
        height,
    }
}

/// A filled primitive, painted cell by cell.
struct Filled<'a> {
    primitive: &'a Primitive,
}

impl Shape for Filled<'_> {
    fn draw(&self, painter: &mut Painter) {
        let (min_x, min_y, max_x, max_y) = self.primitive.bounds();
        let min_x = min_x.max(0.0);
        let max_x = max_x.min(PLAYFIELD_WIDTH);
        let min_y = min_y.max(0.0);
        let max_y = max_y.min(PLAYFIELD_HEIGHT);
        if min_x > max_x || min_y > max_y {
            return;
        }

        // Top-left and bottom-right grid cells of the clipped bounds
        let Some((col0, row0)) = painter.get_point(min_x, PLAYFIELD_HEIGHT - min_y) else {
            return;
        };
        let Some((col1, row1)) = painter.get_point(max_x, PLAYFIELD_HEIGHT - max_y) else {
            return;
        };

        let color = to_color(self.primitive.color());
        for row in row0..=row1 {
            let y = grid_to_world(row, row0, row1, min_y, max_y);
            for col in col0..=col1 {
                let x = grid_to_world(col, col0, col1, min_x, max_x);
                if self.primitive.contains(x, y) {
                    painter.paint(col, row, color);
                }
            }
        }
    }
}

/// Linear map from a grid index inside `[i0, i1]` back to `[lo, hi]`.
fn grid_to_world(i: usize, i0: usize, i1: usize, lo: f64, hi: f64) -> f64 {
    if i1 == i0 {
        return (lo + hi) / 2.0;
    }
    lo + (i - i0) as f64 / (i1 - i0) as f64 * (hi - lo)
}

/// Paint the sky, every shape in order, then text labels on top.
pub fn render_playfield(frame: &mut Frame, area: Rect, list: &DrawList) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let sky = Primitive::Rect {
        x: 0.0,
        y: 0.0,
        width: PLAYFIELD_WIDTH,
        height: PLAYFIELD_HEIGHT,
        color: SKY_BLUE,
    };

    let canvas = Canvas::default()
        .marker(Marker::HalfBlock)
        .background_color(to_color(SKY_BLUE))
        .x_bounds([0.0, PLAYFIELD_WIDTH])
        .y_bounds([0.0, PLAYFIELD_HEIGHT])
        .paint(|ctx| {
            ctx.draw(&Filled { primitive: &sky });
            for primitive in list.primitives() {
                match primitive {
                    Primitive::Text { x, y, text, color } => {
                        ctx.print(
                            *x,
                            PLAYFIELD_HEIGHT - y,
                            Line::from(Span::styled(
                                text.clone(),
                                Style::default().fg(to_color(*color)).bg(to_color(SKY_BLUE)),
                            )),
                        );
                    }
                    shape => ctx.draw(&Filled { primitive: shape }),
                }
            }
        });

    frame.render_widget(canvas, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_color() {
        assert_eq!(to_color(Rgb(1, 2, 3)), Color::Rgb(1, 2, 3));
    }

    #[test]
    fn test_fit_playfield_limited_by_height() {
        let rect = fit_playfield(Rect::new(0, 0, 200, 30));
        assert_eq!(rect.height, 30);
        assert_eq!(rect.width, 40);
        assert_eq!(rect.x, 80);
        assert_eq!(rect.y, 0);
    }

    #[test]
    fn test_fit_playfield_limited_by_width() {
        let rect = fit_playfield(Rect::new(5, 3, 40, 100));
        assert_eq!(rect.height, 30);
        assert_eq!(rect.width, 40);
        assert_eq!(rect.x, 5);
        assert_eq!(rect.y, 3);
    }

    #[test]
    fn test_fit_playfield_stays_inside_area() {
        for w in 0..60u16 {
            for h in 0..40u16 {
                let area = Rect::new(2, 1, w, h);
                let rect = fit_playfield(area);
                assert!(rect.width <= area.width);
                assert!(rect.height <= area.height);
                assert!(rect.x >= area.x && rect.right() <= area.right());
            }
        }
    }

    #[test]
    fn test_grid_to_world() {
        assert_eq!(grid_to_world(0, 0, 10, 0.0, 100.0), 0.0);
        assert_eq!(grid_to_world(5, 0, 10, 0.0, 100.0), 50.0);
        assert_eq!(grid_to_world(10, 0, 10, 0.0, 100.0), 100.0);
        assert_eq!(grid_to_world(3, 3, 3, 20.0, 30.0), 25.0);
    }
}
