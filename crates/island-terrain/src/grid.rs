//! TerrainGrid: the island heightmap with elevation and normal queries.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use island_core::constants::{DEFAULT_TESSELLATION, MAX_TESSELLATION, MIN_TESSELLATION};

/// Rejected tessellation level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("tessellation {0} is not a power of two in [{MIN_TESSELLATION}, {MAX_TESSELLATION}]")]
pub struct TessellationError(pub u32);

/// Cells per side used when meshing the island. Always a power of two in
/// `[MIN_TESSELLATION, MAX_TESSELLATION]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Tessellation(u32);

impl Tessellation {
    pub fn new(level: u32) -> Result<Self, TessellationError> {
        if level.is_power_of_two() && (MIN_TESSELLATION..=MAX_TESSELLATION).contains(&level) {
            Ok(Self(level))
        } else {
            Err(TessellationError(level))
        }
    }

    pub fn level(self) -> u32 {
        self.0
    }

    /// Twice as fine, saturating at the maximum.
    pub fn refine(self) -> Self {
        if self.0 < MAX_TESSELLATION {
            Self(self.0 * 2)
        } else {
            self
        }
    }

    /// Half as fine, saturating at the minimum.
    pub fn coarsen(self) -> Self {
        if self.0 > MIN_TESSELLATION {
            Self(self.0 / 2)
        } else {
            self
        }
    }
}

impl Default for Tessellation {
    fn default() -> Self {
        Self(DEFAULT_TESSELLATION)
    }
}

impl TryFrom<u32> for Tessellation {
    type Error = TessellationError;

    fn try_from(level: u32) -> Result<Self, Self::Error> {
        Self::new(level)
    }
}

impl From<Tessellation> for u32 {
    fn from(t: Tessellation) -> u32 {
        t.0
    }
}

/// Square elevation grid at full resolution plus a border ring.
///
/// Visible sample `(i, j)` with `0 <= i, j <= cells` is stored at
/// `(j + border) * side + i + border`; the border lets slope estimates
/// reach one coarse stride past the edge.
#[derive(Debug, Clone, PartialEq)]
pub struct TerrainGrid {
    cells: u32,
    border: u32,
    /// Row-major, `side * side` samples, rows along z.
    samples: Vec<f32>,
}

impl TerrainGrid {
    /// Build from raw samples. The caller guarantees `samples.len() == side²`.
    pub(crate) fn from_parts(cells: u32, border: u32, samples: Vec<f32>) -> Self {
        Self {
            cells,
            border,
            samples,
        }
    }

    /// A grid with every sample at `height`.
    pub fn flat(cells: u32, border: u32, height: f32) -> Self {
        let side = Self::side_for(cells, border) as usize;
        Self::from_parts(cells, border, vec![height; side * side])
    }

    pub(crate) fn side_for(cells: u32, border: u32) -> u32 {
        cells + 1 + 2 * border
    }

    /// Visible cells per side.
    pub fn cells(&self) -> u32 {
        self.cells
    }

    pub fn border(&self) -> u32 {
        self.border
    }

    /// Stored samples per side.
    pub fn side(&self) -> u32 {
        Self::side_for(self.cells, self.border)
    }

    /// Raw sample at visible index `(i, j)`; negative and past-the-edge
    /// indices reach into the border and are clamped to the stored ring.
    pub fn sample(&self, i: i32, j: i32) -> f32 {
        let side = self.side() as i32;
        let border = self.border as i32;
        let col = (i + border).clamp(0, side - 1) as usize;
        let row = (j + border).clamp(0, side - 1) as usize;
        self.samples[row * side as usize + col]
    }

    /// Visible cell containing world `(x, z)` on an island of side `extent`
    /// centred at the origin.
    pub fn cell_at(&self, x: f32, z: f32, extent: f32) -> (i32, i32) {
        let half = (self.cells / 2) as i32;
        let scale = self.cells as f32 / extent;
        (
            half + (x * scale).floor() as i32,
            half + (z * scale).floor() as i32,
        )
    }

    /// Raw elevation under world `(x, z)` at full resolution.
    pub fn elevation_at(&self, x: f32, z: f32, extent: f32) -> f32 {
        let (i, j) = self.cell_at(x, z, extent);
        self.sample(i, j)
    }

    /// Samples skipped between neighbouring mesh vertices.
    pub fn stride(&self, tessellation: Tessellation) -> u32 {
        (self.cells / tessellation.level()).max(1)
    }

    /// Elevation of mesh vertex `(i, j)`, `0 <= i, j <= tessellation`.
    pub fn vertex_height(&self, i: u32, j: u32, tessellation: Tessellation) -> f32 {
        let stride = self.stride(tessellation) as i32;
        self.sample(i as i32 * stride, j as i32 * stride)
    }

    /// Unit normal of mesh vertex `(i, j)` from central differences one
    /// stride apart.
    pub fn vertex_normal(&self, i: u32, j: u32, tessellation: Tessellation) -> Vec3 {
        let stride = self.stride(tessellation) as i32;
        let (ci, cj) = (i as i32 * stride, j as i32 * stride);
        let left = self.sample(ci - stride, cj);
        let right = self.sample(ci + stride, cj);
        let down = self.sample(ci, cj - stride);
        let up = self.sample(ci, cj + stride);
        Vec3::new(left - right, 2.0, down - up).normalize()
    }

    /// Highest stored sample.
    pub fn max_elevation(&self) -> f32 {
        self.samples.iter().copied().fold(f32::MIN, f32::max)
    }

    /// Lowest stored sample.
    pub fn min_elevation(&self) -> f32 {
        self.samples.iter().copied().fold(f32::MAX, f32::min)
    }
}
