//! Seeded 3D simplex noise for blob deformation.
//!
//! The permutation table is always shuffled internally from a [`SeededRandom`]
//! stream, so a field can never be built from a malformed table. Queries are pure
//! reads of the tables, which makes a shared `&NoiseField` safe to sample from
//! any number of threads.

use crate::random::SeededRandom;

/// Skew factor into simplex space: (sqrt(4) - 1) / 3
const F3: f64 = 1.0 / 3.0;

/// Unskew factor back to input space: (1 - 1/sqrt(4)) / 3
const G3: f64 = 1.0 / 6.0;

/// Squared kernel radius for each corner contribution
const KERNEL_RADIUS_SQ: f64 = 0.6;

/// Output scale bringing the sum of corner contributions to roughly [-1, 1]
const OUTPUT_SCALE: f64 = 32.0;

/// Twelve gradient directions (midpoints of the cube edges)
const GRAD3: [[f64; 3]; 12] = [
    [1.0, 1.0, 0.0],
    [-1.0, 1.0, 0.0],
    [1.0, -1.0, 0.0],
    [-1.0, -1.0, 0.0],
    [1.0, 0.0, 1.0],
    [-1.0, 0.0, 1.0],
    [1.0, 0.0, -1.0],
    [-1.0, 0.0, -1.0],
    [0.0, 1.0, 1.0],
    [0.0, -1.0, 1.0],
    [0.0, 1.0, -1.0],
    [0.0, -1.0, -1.0],
];

/// Deterministic 3D gradient-noise field
#[derive(Clone)]
pub struct NoiseField {
    /// Shuffled 0..=255, repeated twice so corner lookups never wrap
    perm: [u8; 512],
    /// `perm[i] % 12`, the gradient index for each slot
    perm_mod12: [u8; 512],
}

impl std::fmt::Debug for NoiseField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NoiseField")
            .field("perm_head", &&self.perm[..8])
            .finish_non_exhaustive()
    }
}

impl NoiseField {
    /// Build a field by shuffling the byte values with `random`.
    ///
    /// Consumes exactly 255 values from the stream (Fisher-Yates, i = 255 down to 1).
    pub fn new(random: &mut SeededRandom) -> Self {
        let mut p = [0u8; 256];
        for (i, slot) in p.iter_mut().enumerate() {
            *slot = i as u8;
        }
        for i in (1..=255usize).rev() {
            let j = random.next_index(i);
            p.swap(i, j);
        }

        let mut perm = [0u8; 512];
        let mut perm_mod12 = [0u8; 512];
        for i in 0..512 {
            perm[i] = p[i & 255];
            perm_mod12[i] = perm[i] % 12;
        }

        Self { perm, perm_mod12 }
    }

    /// The shuffled permutation (first 256 entries of the table)
    pub fn permutation(&self) -> &[u8] {
        &self.perm[..256]
    }

    /// Sample 3D simplex noise at a point
    ///
    /// Returns a value in approximately [-1, 1]. Continuous everywhere, including
    /// across simplex cell boundaries.
    pub fn noise_3d(&self, x: f64, y: f64, z: f64) -> f64 {
        // Skew the input into simplex cell coordinates
        let s = (x + y + z) * F3;
        let i = (x + s).floor();
        let j = (y + s).floor();
        let k = (z + s).floor();

        // Unskew the cell origin back to (x, y, z) space
        let t = (i + j + k) * G3;
        let x0 = x - (i - t);
        let y0 = y - (j - t);
        let z0 = z - (k - t);

        // Which of the six tetrahedra holds the point. Ties fall to the first branch.
        let (i1, j1, k1, i2, j2, k2) = if x0 >= y0 {
            if y0 >= z0 {
                (1, 0, 0, 1, 1, 0) // X Y Z
            } else if x0 >= z0 {
                (1, 0, 0, 1, 0, 1) // X Z Y
            } else {
                (0, 0, 1, 1, 0, 1) // Z X Y
            }
        } else if y0 < z0 {
            (0, 0, 1, 0, 1, 1) // Z Y X
        } else if x0 < z0 {
            (0, 1, 0, 0, 1, 1) // Y Z X
        } else {
            (0, 1, 0, 1, 1, 0) // Y X Z
        };

        // Offsets of the remaining three corners
        let x1 = x0 - i1 as f64 + G3;
        let y1 = y0 - j1 as f64 + G3;
        let z1 = z0 - k1 as f64 + G3;
        let x2 = x0 - i2 as f64 + 2.0 * G3;
        let y2 = y0 - j2 as f64 + 2.0 * G3;
        let z2 = z0 - k2 as f64 + 2.0 * G3;
        let x3 = x0 - 1.0 + 3.0 * G3;
        let y3 = y0 - 1.0 + 3.0 * G3;
        let z3 = z0 - 1.0 + 3.0 * G3;

        let ii = wrap_cell(i);
        let jj = wrap_cell(j);
        let kk = wrap_cell(k);

        let gi0 = self.gradient_index(ii, jj, kk);
        let gi1 = self.gradient_index(ii + i1, jj + j1, kk + k1);
        let gi2 = self.gradient_index(ii + i2, jj + j2, kk + k2);
        let gi3 = self.gradient_index(ii + 1, jj + 1, kk + 1);

        let n0 = corner(gi0, x0, y0, z0);
        let n1 = corner(gi1, x1, y1, z1);
        let n2 = corner(gi2, x2, y2, z2);
        let n3 = corner(gi3, x3, y3, z3);

        OUTPUT_SCALE * (n0 + n1 + n2 + n3)
    }

    #[inline]
    fn gradient_index(&self, i: usize, j: usize, k: usize) -> usize {
        let kk = self.perm[k] as usize;
        let jj = self.perm[j + kk] as usize;
        self.perm_mod12[i + jj] as usize
    }
}

/// Lattice coordinate modulo 256 (also correct for negative cells).
#[inline]
fn wrap_cell(c: f64) -> usize {
    (c as i64 & 255) as usize
}

/// Contribution of one simplex corner: `max(0, 0.6 - r²)^4 * (g · d)`.
#[inline]
fn corner(gi: usize, x: f64, y: f64, z: f64) -> f64 {
    let t = KERNEL_RADIUS_SQ - x * x - y * y - z * z;
    if t < 0.0 {
        return 0.0;
    }
    let t2 = t * t;
    let g = GRAD3[gi];
    t2 * t2 * (g[0] * x + g[1] * y + g[2] * z)
}
