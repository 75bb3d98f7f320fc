//! Unified height query: boat decks, the fort, island terrain and open sea.

use glam::Vec3;

use island_core::config::GeometryConfig;

use crate::grid::TerrainGrid;

/// Height of whatever solid surface lies under a world position.
///
/// Always samples the full-resolution grid, so the mesh tessellation never
/// changes what a projectile collides with.
#[derive(Debug, Clone)]
pub struct HeightField {
    grid: TerrainGrid,
    geometry: GeometryConfig,
}

impl HeightField {
    pub fn new(grid: TerrainGrid, geometry: &GeometryConfig) -> Self {
        Self {
            grid,
            geometry: geometry.clone(),
        }
    }

    pub fn grid(&self) -> &TerrainGrid {
        &self.grid
    }

    /// Surface elevation under `position`.
    ///
    /// `decks` holds the positions of living boats; a deck footprint takes
    /// priority over everything else. Outside the island square the open-sea
    /// floor is returned, which lies below every in-bounds value.
    pub fn height_at(&self, position: Vec3, decks: &[Vec3]) -> f32 {
        let g = &self.geometry;
        let (x, z) = (position.x, position.z);

        let reach = g.boat_deck_half_extent;
        if let Some(deck) = decks
            .iter()
            .find(|d| (x - d.x).abs() < reach && (z - d.z).abs() < reach)
        {
            return deck.y;
        }

        let half = g.island_half_extent();
        if x.abs() > half || z.abs() > half {
            return g.open_sea_floor;
        }

        self.ground_height(x, z)
    }

    /// Island terrain plus fort structure, ignoring boats and bounds.
    pub fn ground_height(&self, x: f32, z: f32) -> f32 {
        let g = &self.geometry;
        let terrain = self.grid.elevation_at(x, z, g.island_extent) - g.sea_level_offset;

        let r2 = x * x + z * z;
        if r2 < g.fort_core_radius * g.fort_core_radius {
            terrain + g.fort_base_height + g.fort_core_raise
        } else if r2 < g.fort_radius * g.fort_radius {
            terrain + g.fort_base_height
        } else {
            terrain
        }
    }

    /// True if `position` is at or below the surface.
    pub fn is_below_surface(&self, position: Vec3, decks: &[Vec3]) -> bool {
        position.y < self.height_at(position, decks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hmap::bundled_island;

    fn island() -> HeightField {
        HeightField::new(bundled_island().unwrap(), &GeometryConfig::default())
    }

    #[test]
    fn test_fort_layers() {
        let field = island();
        // Core, platform and bare summit around the fort.
        assert!((field.height_at(Vec3::new(0.1, 0.0, 0.1), &[]) - 3.75).abs() < 1e-5);
        assert!((field.height_at(Vec3::new(0.7, 0.0, 0.0), &[]) - 3.25).abs() < 1e-5);
        assert!((field.height_at(Vec3::new(1.2, 0.0, 0.0), &[]) - 3.0).abs() < 1e-5);
    }

    #[test]
    fn test_open_sea_sentinel_below_everything() {
        let field = island();
        let g = GeometryConfig::default();
        let lowest_in_bounds = field.grid().min_elevation() - g.sea_level_offset;
        for p in [
            Vec3::new(5.01, 0.0, 0.0),
            Vec3::new(0.0, 0.0, -5.5),
            Vec3::new(-40.0, 0.0, 40.0),
        ] {
            let h = field.height_at(p, &[]);
            assert_eq!(h, g.open_sea_floor);
            assert!(h < lowest_in_bounds, "sentinel {h} must be below {lowest_in_bounds}");
        }
    }

    #[test]
    fn test_deck_overrides_everything() {
        let field = island();
        let deck = Vec3::new(20.0, 0.4, -20.0);
        // On deck, far out at sea.
        assert_eq!(field.height_at(Vec3::new(20.5, 5.0, -19.5), &[deck]), 0.4);
        // Just off the deck footprint.
        assert_eq!(
            field.height_at(Vec3::new(21.0, 5.0, -20.0), &[deck]),
            GeometryConfig::default().open_sea_floor
        );
        // A deck parked on the island wins over the terrain.
        let beached = Vec3::new(0.0, -1.0, 0.0);
        assert_eq!(field.height_at(Vec3::ZERO, &[beached]), -1.0);
    }

    #[test]
    fn test_shore_is_sea_level() {
        let field = island();
        // Corner of the island square is flat sea bed.
        assert!((field.height_at(Vec3::new(-4.9, 0.0, -4.9), &[]) + 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_below_surface() {
        let field = island();
        assert!(field.is_below_surface(Vec3::new(0.0, 3.0, 0.0), &[]));
        assert!(!field.is_below_surface(Vec3::new(0.0, 4.0, 0.0), &[]));
    }
}
