//! Palette and paint command set for icon rendering

use std::fmt;

/// An RGBA color with 8-bit channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with a different alpha
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// True if the RGB channels match, ignoring alpha
    pub fn same_rgb(&self, other: Color) -> bool {
        self.r == other.r && self.g == other.g && self.b == other.b
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<[u8; 4]> for Color {
    fn from(c: [u8; 4]) -> Self {
        Color::rgba(c[0], c[1], c[2], c[3])
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);
pub const HOT_PINK: Color = Color::rgb(255, 20, 147);
pub const CRIMSON: Color = Color::rgb(255, 0, 100);
pub const PURPLE: Color = Color::rgb(138, 43, 226);
pub const DARK_PURPLE: Color = Color::rgb(45, 27, 105);
pub const WHITE: Color = Color::rgb(255, 255, 255);

/// Alpha used for the ink blot decorations
pub const INK_ALPHA: u8 = 128;

/// Inclusive pixel bounding box. May extend past the canvas edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl Bounds {
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Square box of the given radius around a center point
    pub fn around(cx: i32, cy: i32, radius: i32) -> Self {
        Self::new(cx - radius, cy - radius, cx + radius, cy + radius)
    }

    /// An inverted box covers no pixels
    pub fn is_empty(&self) -> bool {
        self.x1 < self.x0 || self.y1 < self.y0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PaintCommand {
    /// Filled axis-aligned ellipse inscribed in `bounds`
    Ellipse { bounds: Bounds, fill: Color },
    /// Straight stroke between two inclusive endpoints
    Line {
        from: (i32, i32),
        to: (i32, i32),
        width: u32,
        color: Color,
    },
}

impl PaintCommand {
    pub fn ellipse(bounds: Bounds, fill: Color) -> Self {
        PaintCommand::Ellipse { bounds, fill }
    }

    pub fn line(from: (i32, i32), to: (i32, i32), width: u32, color: Color) -> Self {
        PaintCommand::Line { from, to, width, color }
    }

    pub fn color(&self) -> Color {
        match self {
            PaintCommand::Ellipse { fill, .. } => *fill,
            PaintCommand::Line { color, .. } => *color,
        }
    }
}

/// One command per line, e.g. `ellipse 43,22 85,85 #ff0064ff`
impl fmt::Display for PaintCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaintCommand::Ellipse { bounds: b, fill } => {
                write!(f, "ellipse {},{} {},{} {}", b.x0, b.y0, b.x1, b.y1, fill)
            }
            PaintCommand::Line {
                from,
                to,
                width,
                color,
            } => write!(
                f,
                "line {},{} {},{} w{} {}",
                from.0, from.1, to.0, to.1, width, color
            ),
        }
    }
}
