//! Core data types and structures

pub mod headers;
pub mod spread;
pub mod hook_record;
pub mod responses;

pub use headers::*;
pub use spread::*;
pub use hook_record::*;
pub use responses::*;
