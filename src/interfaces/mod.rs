//! Input and output adapters around the application layer.

pub mod csv;
pub mod json;
pub mod rows;
