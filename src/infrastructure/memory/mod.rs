//! In-Memory Implementations
//!
//! 内存存储实现，用于测试以及 `database.backend = "memory"`

mod store;

pub use store::InMemoryStore;
