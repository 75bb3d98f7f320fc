//! Terrain system for the island defender simulation.
//!
//! Sea surface waves, the island heightmap and its loader, and the unified
//! height query every collision check goes through.

pub use island_core as core;

pub mod grid;
pub mod height_field;
pub mod hmap;
pub mod wave;

// Re-export key types for convenience.
pub use grid::{Tessellation, TessellationError, TerrainGrid};
pub use height_field::HeightField;
pub use hmap::{bundled_island, load_hmap, parse_hmap, HeightmapError};
pub use wave::{WaveComponent, WaveField, WaveSample};
