//! Pure data structures for the parts inventory.

pub mod money;
pub mod part;

pub use money::*;
pub use part::*;
