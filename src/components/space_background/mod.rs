//! Animated space background.
//!
//! Draws a slowly falling starfield over soft nebula blobs on a fixed,
//! full-viewport canvas:
//! - Star count follows the viewport area and is regenerated on resize
//! - Nebulae are laid out once from the first viewport size
//! - Colors come from a [`Theme`] preset
//!
//! # Example
//!
//! ```ignore
//! use portfolio::components::space_background::{SpaceBackground, Theme};
//!
//! view! { <SpaceBackground theme=Theme::neon() /> }
//! ```

mod component;
mod render;
pub mod starfield;
pub mod theme;

pub use component::{FrameLoop, SpaceBackground};
pub use starfield::{Nebula, Particle, Starfield, particle_count};
pub use theme::{Color, NebulaSpec, StarfieldStyle, Theme};
