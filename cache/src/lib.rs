mod memory;
mod read_only_cache;
pub mod structs;
mod writeable_cache;

pub use memory::MemoryCache;
pub use read_only_cache::ReadOnlyCache;
pub use writeable_cache::WriteableCache;
