//! Mathematical utilities

pub mod interp;
pub mod hex;

pub use interp::{fade, lerp, sround};
pub use hex::{axial_to_plane, HexCoord, DIRECTIONS};
