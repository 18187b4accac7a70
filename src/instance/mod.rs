//! TSP instances: cost oracle, file loading, instance groups.

mod group;
mod loader;
mod model;

pub use group::{InstanceGroup, LoadedInstance};
pub use loader::{load_instance, load_solutions, parse_instance, parse_solutions, LoadWarning};
pub use model::TspInstance;
