#[macro_use]
mod macros;

mod error;
pub use error::{Error, IntoError};

mod key;
pub use key::Key;

pub mod schema;
pub use schema::Schema;

/// Attribute map of a model instance, in source order.
pub type Attributes = indexmap::IndexMap<String, serde_json::Value>;

/// A Result type alias that uses the crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
