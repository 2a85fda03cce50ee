//! Rendering: palette, paint commands, rasterizer and the squid layout

pub mod paint;
pub mod raster;
pub mod squid;

pub use paint::{Bounds, Color, PaintCommand};
pub use raster::{rasterize, Canvas};
pub use squid::{render_icon, squid_commands, SquidLayout};
