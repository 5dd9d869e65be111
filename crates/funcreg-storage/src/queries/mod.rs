//! SQL for each storage operation, as free functions over a connection.

pub mod functions;
