//! Value noise: bilinear blend of lattice values under the fade curve

use super::lattice::LatticeHash;
use super::MAX_BELOW_ONE;
use crate::math::{fade, lerp};

/// Continuous 2D field over one channel's lattice.
#[derive(Clone)]
pub struct ValueNoiseField {
    lattice: LatticeHash,
}

impl ValueNoiseField {
    pub fn new(lattice: LatticeHash) -> Self {
        Self { lattice }
    }

    pub fn lattice(&self) -> &LatticeHash {
        &self.lattice
    }

    /// Sample the field at continuous `(u, v)`. Result in [0, 1).
    pub fn sample(&self, u: f64, v: f64) -> f64 {
        let fu = u.floor();
        let fv = v.floor();
        let i = fu as i64;
        let j = fv as i64;
        let du = u - fu;
        let dv = v - fv;

        let v00 = self.lattice.hash_unit(i, j);
        let v10 = self.lattice.hash_unit(i.wrapping_add(1), j);
        let v01 = self.lattice.hash_unit(i, j.wrapping_add(1));
        let v11 = self.lattice.hash_unit(i.wrapping_add(1), j.wrapping_add(1));

        let sx = fade(du);
        let sy = fade(dv);
        let a = lerp(v00, v10, sx);
        let b = lerp(v01, v11, sx);
        lerp(a, b, sy).min(MAX_BELOW_ONE)
    }
}
