//! Endpoint wrappers, one module per resource. Each one only builds the path
//! and body and leaves the call itself to [`Client`](crate::Client).

pub mod campaigns;
pub mod groups;
pub mod segments;
pub mod stats;
