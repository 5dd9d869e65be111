//! The `Function` record: a serverless inference function registered with
//! the annotation platform.

pub mod kinds;
pub mod limits;
pub mod record;
pub mod validate;

pub use record::Function;
