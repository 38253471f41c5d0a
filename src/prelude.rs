pub use crate::cache::core::CacheCore;
pub use crate::cache::multi::LruMultiCache;
pub use crate::cache::single::LruCache;
pub use crate::ds::{RecencyList, SlotArena, SlotId};
pub use crate::error::NotFound;
