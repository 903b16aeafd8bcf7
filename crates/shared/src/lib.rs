//! Shared wire types for the Aivyra client: the response envelope, backend
//! models and the transport error type.

pub mod envelope;
pub mod error;
pub mod models;

pub use envelope::*;
pub use error::*;
pub use models::*;
