//! Simulation constants and tuning parameters.
//!
//! These are the defaults behind [`crate::config::GeometryConfig`]; code that
//! runs inside the simulation reads the config value rather than these.

use std::f32::consts::PI;

/// Gravitational acceleration along y (world units / s²).
pub const GRAVITY: f32 = -9.8;

// --- Fort ---

/// Radius of the fort base disk.
pub const FORT_RADIUS: f32 = 1.0;

/// Thickness of the fort base platform above the terrain.
pub const FORT_BASE_HEIGHT: f32 = 0.25;

/// Radius of the raised fort core.
pub const FORT_CORE_RADIUS: f32 = 0.5;

/// Extra height of the fort core above the platform.
pub const FORT_CORE_RAISE: f32 = 0.5;

/// Height of the cannon pivot above sea level.
pub const FORT_HEIGHT: f32 = 3.5 + FORT_BASE_HEIGHT;

/// Length of a cannon barrel (fort and boats).
pub const CANNON_LENGTH: f32 = 0.75;

/// Distance from the fort pivot to the muzzle along the barrel.
pub const FORT_SPAR_OFFSET: f32 = 0.48 + CANNON_LENGTH;

/// Half height of the fort hit volume around its core centre.
pub const FORT_HIT_HALF_BAND: f32 = 0.75;

/// Muzzle speed of every cannon.
pub const MUZZLE_SPEED: f32 = 12.0;

/// Initial cannon elevation of the fort.
pub const FORT_INITIAL_ELEVATION: f32 = PI / 6.0;

/// Elevation change per adjust command.
pub const ELEVATION_STEP: f32 = PI / 180.0;

/// Azimuth change per adjust command.
pub const AZIMUTH_STEP: f32 = PI / 60.0;

/// Fort hits tolerated before the round is lost.
pub const DAMAGE_CEILING: u32 = 4000;

// --- Island terrain ---

/// Side length of the playable island square.
pub const ISLAND_EXTENT: f32 = 10.0;

/// Vertical offset subtracted from raw terrain samples.
pub const SEA_LEVEL_OFFSET: f32 = 2.0;

/// Elevation reported anywhere outside the island square.
/// Kept strictly below the lowest in-bounds value (`-SEA_LEVEL_OFFSET`).
pub const OPEN_SEA_FLOOR: f32 = -3.0;

/// Finest terrain tessellation (cells per side).
pub const MAX_TESSELLATION: u32 = 32;

/// Coarsest terrain tessellation (cells per side).
pub const MIN_TESSELLATION: u32 = 4;

/// Tessellation used at startup.
pub const DEFAULT_TESSELLATION: u32 = 16;

// --- Boats ---

/// Fixed size of the boat roster.
pub const BOAT_COUNT: usize = 8;

/// Radius of the ring boats start on.
pub const BOAT_RING_RADIUS: f32 = 50.0;

/// Number of evenly spaced starting slots on the ring.
pub const BOAT_RING_SLOTS: u32 = 30;

pub const BOAT_LENGTH: f32 = 2.0;
pub const BOAT_HEIGHT: f32 = 1.0;

/// Half extent of the square deck footprint used by height queries.
pub const BOAT_DECK_HALF_EXTENT: f32 = 1.0;

/// Fixed pitch of every boat cannon.
pub const BOAT_CANNON_PITCH: f32 = PI / 3.0;

/// Maximum boat speed.
pub const BOAT_MAX_SPEED: f32 = 3.0;

/// Maximum boat acceleration.
pub const BOAT_MAX_ACCEL: f32 = 3.0;

/// Hull turn rate (rad/s).
pub const BOAT_TURN_RATE: f32 = 1.0;

/// Cannon traverse rate (rad/s).
pub const BOAT_CANNON_TURN_RATE: f32 = 5.0;

/// Cruise speed a stationed boat uses when it has to move.
pub const BOAT_NOMINAL_SPEED: f32 = 1.0;

/// Angular convergence tolerance for heading and cannon yaw.
pub const BOAT_ANGLE_TOLERANCE: f32 = 0.1;

/// Speed convergence tolerance.
pub const BOAT_SPEED_TOLERANCE: f32 = 0.1;

/// Buffer outside the station radius used by the evasion hysteresis.
pub const STATION_BUFFER: f32 = 0.2;

// --- Projectiles ---

/// Cannonball radius.
pub const BALL_RADIUS: f32 = 0.2;

/// Angular half width of the boat hit window (radians).
pub const BOAT_HIT_WINDOW: f32 = 0.2;

/// Fixed step used by trajectory look-ahead.
pub const LOOKAHEAD_DT: f32 = 0.035;

/// Upper bound on look-ahead steps.
pub const LOOKAHEAD_MAX_STEPS: usize = 4096;

// --- Particles ---

/// Debris particles per boat.
pub const PARTICLE_COUNT: usize = 100;

/// Top debris speed.
pub const PARTICLE_SPEED: f32 = 100.0;

/// Height at which idle particles are parked.
pub const PARTICLE_PARK_HEIGHT: f32 = -100_000.0;

// --- Clock ---

/// Simulated seconds between frame-rate samples.
pub const FRAME_RATE_INTERVAL: f64 = 0.2;
