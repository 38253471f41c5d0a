pub mod core;
pub mod multi;
pub mod single;

pub use self::core::CacheCore;
pub use self::multi::LruMultiCache;
pub use self::single::LruCache;
