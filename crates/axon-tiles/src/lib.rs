//! Axon Tiles: serves map tiles from an object store with a fallback for
//! missing `.pbf` keys.
//!
//! The map client requests vector tiles for every visible cell; cells with
//! no data have no stored object. Instead of a 404 (which the renderer
//! treats as an error), a missing `.pbf` key is answered with a designated
//! empty tile so the map stays quiet. Missing non-tile keys are real 404s.

pub mod serve;
pub mod store;

pub use serve::router;
pub use store::{FsStore, MemoryStore, StoreError, StoredObject, TileStore};
