//! Service layer module.
//!
//! Contains the generation engine: criteria resolution, the base pool,
//! sampling, the level cascade and the batch service on top, plus the
//! deterministic special dan builders.

pub mod cascade;
pub mod dacbiet;
pub mod dande;
pub mod pool;
pub mod resolver;
pub mod sampler;

pub use cascade::LevelCascadeGenerator;
pub use dande::DanDeService;
pub use pool::{BasePool, NumberSet};
pub use resolver::{ResolvedCriteria, WeightedCandidate};
