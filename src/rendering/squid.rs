//! Squid mascot layout
//!
//! Every coordinate is derived from the icon size with floor division, so the
//! same size always produces the same display list.

use crate::rendering::paint::{
    Bounds, PaintCommand, CRIMSON, DARK_PURPLE, HOT_PINK, INK_ALPHA, PURPLE, WHITE,
};
use crate::rendering::raster::{rasterize, Canvas};

/// Smallest size that gets eyes and pupils
pub const EYES_MIN_SIZE: u32 = 32;
/// Smallest size that gets ink blot decorations
pub const INK_MIN_SIZE: u32 = 48;
/// Number of tentacle strokes
pub const TENTACLE_COUNT: i32 = 6;

fn floor_div(n: i32, d: i32) -> i32 {
    n.div_euclid(d)
}

/// Geometry of the squid for one icon size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SquidLayout {
    pub size: u32,
    pub center: i32,
    pub body_radius: i32,
    pub head_radius: i32,
    pub eye_radius: i32,
    pub pupil_radius: i32,
    pub tentacle_width: u32,
}

impl SquidLayout {
    pub fn new(size: u32) -> Self {
        let s = size as i32;
        let eye_radius = (s / 16).max(1);
        Self {
            size,
            center: s / 2,
            body_radius: s / 3,
            head_radius: s / 4,
            eye_radius,
            pupil_radius: (eye_radius / 2).max(1),
            tentacle_width: (size / 32).max(1),
        }
    }

    pub fn has_eyes(&self) -> bool {
        self.size >= EYES_MIN_SIZE
    }

    pub fn has_ink(&self) -> bool {
        self.size >= INK_MIN_SIZE
    }

    pub fn body(&self) -> Bounds {
        let (c, br) = (self.center, self.body_radius);
        Bounds::new(c - br / 2, c - br, c + br / 2, c + br / 2)
    }

    pub fn head(&self) -> Bounds {
        let (c, br, hr) = (self.center, self.body_radius, self.head_radius);
        Bounds::new(c - hr / 2, c - br - hr / 2, c + hr / 2, c - br + hr / 2)
    }

    /// Left and right eye centers
    pub fn eye_centers(&self) -> [(i32, i32); 2] {
        let dx = self.head_radius / 3;
        let y = self.center - self.body_radius;
        [(self.center - dx, y), (self.center + dx, y)]
    }

    /// Horizontal tentacle offsets from the center, left to right.
    /// Offset `i` is `floor((i - 2.5) * size / 12)`.
    pub fn tentacle_offsets(&self) -> [i32; TENTACLE_COUNT as usize] {
        let s = self.size as i32;
        std::array::from_fn(|i| floor_div((2 * i as i32 - 5) * s, 24))
    }

    /// Vertical extent of every tentacle, inclusive
    pub fn tentacle_span(&self) -> (i32, i32) {
        let (c, br) = (self.center, self.body_radius);
        (c + br / 2, c + br + self.size as i32 / 4)
    }

    /// Ink blots as (x, y, radius)
    pub fn ink_spots(&self) -> [(i32, i32, i32); 3] {
        let (c, s) = (self.center, self.size as i32);
        [
            (c + s / 3, c + s / 3, s / 20),
            (c - s / 4, c + s / 4, s / 25),
            (c + s / 5, c - s / 6, s / 30),
        ]
    }

    /// Ordered display list; later commands paint over earlier ones
    pub fn commands(&self) -> Vec<PaintCommand> {
        let mut cmds = vec![
            PaintCommand::ellipse(self.body(), CRIMSON),
            PaintCommand::ellipse(self.head(), HOT_PINK),
        ];

        if self.has_eyes() {
            let eyes = self.eye_centers();
            for (x, y) in eyes {
                cmds.push(PaintCommand::ellipse(Bounds::around(x, y, self.eye_radius), WHITE));
            }
            for (x, y) in eyes {
                cmds.push(PaintCommand::ellipse(
                    Bounds::around(x, y, self.pupil_radius),
                    DARK_PURPLE,
                ));
            }
        }

        let (top, bottom) = self.tentacle_span();
        for off in self.tentacle_offsets() {
            let x = self.center + off;
            cmds.push(PaintCommand::line((x, top), (x, bottom), self.tentacle_width, PURPLE));
        }

        if self.has_ink() {
            let ink = PURPLE.with_alpha(INK_ALPHA);
            for (x, y, r) in self.ink_spots() {
                cmds.push(PaintCommand::ellipse(Bounds::around(x, y, r), ink));
            }
        }

        cmds
    }
}

/// Display list for a squid icon of the given size
pub fn squid_commands(size: u32) -> Vec<PaintCommand> {
    SquidLayout::new(size).commands()
}

/// Render the squid icon onto a fresh `size × size` canvas
pub fn render_icon(size: u32) -> Canvas {
    rasterize(size, size, &squid_commands(size))
}
