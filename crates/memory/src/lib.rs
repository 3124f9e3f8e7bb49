//! memory - 架构记忆
//!
//! 系统、人员与有向关系的持久化存储

mod config;
mod keyed;
mod store;
mod summary;
mod types;

pub use config::{MemoryConfig, DEFAULT_PATH, PATH_ENV};
pub use keyed::Keyed;
pub use store::{LoadStatus, Persistence, Result, Store, StoreError};
pub use types::{Graph, Person, Relationship, System};
