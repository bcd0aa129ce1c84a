//! Component metadata records and their assembly

pub mod loader;
pub mod types;

pub use loader::SchemaLoader;
pub use types::{ComponentMeta, DataStructure, DocField, PropField, PropType, StructField};
