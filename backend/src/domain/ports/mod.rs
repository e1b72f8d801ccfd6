//! Domain ports and supporting types for the hexagonal boundary.

mod resource_store;

#[cfg(test)]
pub use resource_store::MockResourceStore;
pub use resource_store::{ResourceStore, ResourceStoreError};
