//! IO modules - external system interfaces
//!
//! - `transport` - HTTP access to the PRH registry

pub mod transport;

pub use transport::{HttpTransport, Transport, TransportError};
