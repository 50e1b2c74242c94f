//! Infrastructure layer.

pub mod index;

pub use self::index::Index;

/// Storage operation.
pub use common::Handler as Storage;
