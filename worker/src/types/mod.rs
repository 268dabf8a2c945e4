//! Type definitions

pub mod amenity;
pub mod event;
pub mod location;
pub mod relation;

pub use amenity::*;
pub use event::*;
pub use location::*;
pub use relation::*;
