//! Axial hex coordinates and their mapping onto the noise plane

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// `sqrt(3) / 2`, the row spacing of unit-edge hexes.
pub const SQRT_3_OVER_2: f64 = 0.866_025_403_784_438_6;

/// Axial offsets of the six neighbors, counter-clockwise from east.
pub const DIRECTIONS: [(i64, i64); 6] = [(1, 0), (1, -1), (0, -1), (-1, 0), (-1, 1), (0, 1)];

/// A cell on the unbounded axial hex lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct HexCoord {
    pub q: i64,
    pub r: i64,
}

impl HexCoord {
    pub const ORIGIN: HexCoord = HexCoord { q: 0, r: 0 };

    pub fn new(q: i64, r: i64) -> Self {
        Self { q, r }
    }

    /// Continuous plane position of this cell's center.
    pub fn to_plane(self) -> DVec2 {
        axial_to_plane(self.q, self.r)
    }

    /// The six adjacent cells, in `DIRECTIONS` order.
    ///
    /// Coordinates wrap at the `i64` edge, as lattice indices do in the noise fields.
    pub fn neighbors(self) -> [HexCoord; 6] {
        DIRECTIONS.map(|(dq, dr)| HexCoord::new(self.q.wrapping_add(dq), self.r.wrapping_add(dr)))
    }

    /// Hex grid distance (number of steps) between two cells, on the wrapping lattice.
    pub fn distance(self, other: HexCoord) -> u64 {
        let dq = self.q.wrapping_sub(other.q);
        let dr = self.r.wrapping_sub(other.r);
        let sum = dq.unsigned_abs() as u128
            + dr.unsigned_abs() as u128
            + dq.wrapping_add(dr).unsigned_abs() as u128;
        (sum / 2) as u64
    }

    /// Every cell within `radius` steps of this one, ordered by q then r.
    pub fn range(self, radius: u32) -> Vec<HexCoord> {
        let n = radius as i64;
        let mut cells = Vec::with_capacity((3 * n * n + 3 * n + 1) as usize);
        for dq in -n..=n {
            let lo = (-n).max(-dq - n);
            let hi = n.min(-dq + n);
            for dr in lo..=hi {
                cells.push(HexCoord::new(self.q.wrapping_add(dq), self.r.wrapping_add(dr)));
            }
        }
        cells
    }
}

impl From<(i64, i64)> for HexCoord {
    fn from((q, r): (i64, i64)) -> Self {
        Self { q, r }
    }
}

/// Axial `(q, r)` to Cartesian plane coordinates for unit-edge hexes.
///
/// Neighbors land at unit Euclidean distance, so noise sampled on the plane is
/// isotropic across the grid.
#[inline]
pub fn axial_to_plane(q: i64, r: i64) -> DVec2 {
    let q = q as f64;
    let r = r as f64;
    DVec2::new(q + 0.5 * r, SQRT_3_OVER_2 * r)
}
