//! View components for the portfolio page.

#[cfg(all(test, target_arch = "wasm32"))]
mod browser;
pub mod navigation;
pub mod reveal;
pub mod sections;
pub mod space_background;
