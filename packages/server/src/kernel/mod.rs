//! Kernel module - server infrastructure and dependencies.

pub mod deps;
pub mod test_dependencies;
pub mod traits;

pub use deps::{GoogleGeocoderAdapter, RandomSelector, ServerDeps, WikipediaAdapter};
pub use test_dependencies::{FixedSelector, MockEncyclopedia, MockGeocoder, TestDependencies};
pub use traits::*;
