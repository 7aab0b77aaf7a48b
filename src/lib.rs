//! Coastline heightmap generation library
//!
//! Re-exports modules for use by binaries and tools.

pub mod ascii;
pub mod bands;
pub mod export;
pub mod heightfield;
pub mod heightmap;
pub mod params;
pub mod report;
pub mod smoothing;
pub mod tilemap;
pub mod waves;
