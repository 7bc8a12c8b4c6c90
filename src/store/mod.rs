pub mod memory;
#[cfg(test)]
pub mod recording;
pub mod sample;
pub mod traits;
pub mod types;

pub use memory::InMemoryStore;
pub use traits::PropertyStore;
pub use types::StoreState;
