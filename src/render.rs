//! Drawing surface abstraction.
//!
//! Game entities never talk to the terminal directly. They issue primitives
//! (filled shapes and text in playfield coordinates, y growing downward) to a
//! [`Surface`]. The terminal UI records a frame into a [`DrawList`] and then
//! rasterises it; tests inspect the same list.

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// A point in playfield coordinates.
pub type Point = (f64, f64);

/// A single drawing command.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Circle {
        center: Point,
        radius: f64,
        color: Rgb,
    },
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: Rgb,
    },
    Polygon {
        points: Vec<Point>,
        color: Rgb,
    },
    Text {
        x: f64,
        y: f64,
        text: String,
        color: Rgb,
    },
}

impl Primitive {
    /// Axis-aligned bounds as `(min_x, min_y, max_x, max_y)`.
    /// Text has no extent in playfield units and reports its anchor point.
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        match self {
            Primitive::Circle { center, radius, .. } => (
                center.0 - radius,
                center.1 - radius,
                center.0 + radius,
                center.1 + radius,
            ),
            Primitive::Rect {
                x,
                y,
                width,
                height,
                ..
            } => (*x, *y, x + width, y + height),
            Primitive::Polygon { points, .. } => points.iter().fold(
                (f64::MAX, f64::MAX, f64::MIN, f64::MIN),
                |(min_x, min_y, max_x, max_y), &(px, py)| {
                    (min_x.min(px), min_y.min(py), max_x.max(px), max_y.max(py))
                },
            ),
            Primitive::Text { x, y, .. } => (*x, *y, *x, *y),
        }
    }

    /// Whether a point lies inside the filled shape. Always false for text.
    pub fn contains(&self, px: f64, py: f64) -> bool {
        match self {
            Primitive::Circle { center, radius, .. } => {
                let dx = px - center.0;
                let dy = py - center.1;
                dx * dx + dy * dy <= radius * radius
            }
            Primitive::Rect {
                x,
                y,
                width,
                height,
                ..
            } => px >= *x && px <= x + width && py >= *y && py <= y + height,
            Primitive::Polygon { points, .. } => polygon_contains(points, px, py),
            Primitive::Text { .. } => false,
        }
    }

    pub fn color(&self) -> Rgb {
        match self {
            Primitive::Circle { color, .. }
            | Primitive::Rect { color, .. }
            | Primitive::Polygon { color, .. }
            | Primitive::Text { color, .. } => *color,
        }
    }
}

/// Even-odd ray casting test.
fn polygon_contains(points: &[Point], px: f64, py: f64) -> bool {
    if points.len() < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = points.len() - 1;
    for i in 0..points.len() {
        let (xi, yi) = points[i];
        let (xj, yj) = points[j];
        if (yi > py) != (yj > py) && px < (xj - xi) * (py - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// A drawing target for filled primitives and text.
pub trait Surface {
    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgb);
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Rgb);
    fn fill_polygon(&mut self, points: &[Point], color: Rgb);
    fn text(&mut self, x: f64, y: f64, text: &str, color: Rgb);
}

/// Anything that can put itself on a [`Surface`].
pub trait Drawable {
    fn draw(&self, surface: &mut dyn Surface);
}

/// A [`Surface`] that records primitives in issue order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    primitives: Vec<Primitive>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a full frame of `drawable`.
    pub fn capture(drawable: &dyn Drawable) -> Self {
        let mut list = Self::new();
        drawable.draw(&mut list);
        list
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// All text strings in draw order.
    pub fn texts(&self) -> Vec<&str> {
        self.primitives
            .iter()
            .filter_map(|p| match p {
                Primitive::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for DrawList {
    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgb) {
        self.primitives.push(Primitive::Circle {
            center,
            radius,
            color,
        });
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Rgb) {
        self.primitives.push(Primitive::Rect {
            x,
            y,
            width,
            height,
            color,
        });
    }

    fn fill_polygon(&mut self, points: &[Point], color: Rgb) {
        self.primitives.push(Primitive::Polygon {
            points: points.to_vec(),
            color,
        });
    }

    fn text(&mut self, x: f64, y: f64, text: &str, color: Rgb) {
        self.primitives.push(Primitive::Text {
            x,
            y,
            text: text.to_string(),
            color,
        });
    }
}
