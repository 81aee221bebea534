//! Drawing primitives for the host renderer
//!
//! The simulation never draws. This module turns projectile records into
//! backend-agnostic shapes; the page decides how to paint them.

pub mod shapes;
pub mod skins;

pub use shapes::{Color, Shape};
pub use skins::{ProjectileSkin, skin_for};
