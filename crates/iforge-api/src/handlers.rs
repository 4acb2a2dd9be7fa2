//! Request handlers.

pub mod health;
pub mod icons;
pub mod infographics;
pub mod templates;

pub use health::*;
pub use icons::*;
pub use infographics::*;
pub use templates::*;
