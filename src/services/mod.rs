// Service exports
pub mod loader;
pub mod registry;

pub use loader::{load_or_empty, load_seed_data, parse_seed_data, LoaderError, SeedData};
pub use registry::{Registry, RegistryError, RegistrySnapshot};
