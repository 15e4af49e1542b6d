//! Data types for the tile board.

mod host;
mod record;
mod tile;

pub use host::*;
pub use record::*;
pub use tile::*;
