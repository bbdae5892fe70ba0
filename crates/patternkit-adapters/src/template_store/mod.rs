//! Template store implementations.

mod memory;

pub use memory::InMemoryTemplateStore;
