pub mod animator;
pub mod constants;
pub mod contact;
pub mod field;
pub mod interact;
pub mod schedule;
pub mod surface;
pub mod theme;

pub use animator::*;
pub use constants::*;
pub use contact::*;
pub use field::*;
pub use interact::*;
pub use schedule::*;
pub use surface::*;
pub use theme::*;
