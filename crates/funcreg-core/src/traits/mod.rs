//! Storage traits implemented by `funcreg-storage`.

pub mod storage;

pub use storage::{IFunctionStorage, Page};
