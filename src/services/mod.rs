pub mod marker_store;
pub mod firestore_client;
#[cfg(test)]
pub mod memory_store;

pub use marker_store::*;
pub use firestore_client::FirestoreClient;
#[cfg(test)]
pub use memory_store::InMemoryStore;
