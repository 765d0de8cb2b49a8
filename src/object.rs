//! Record types addressable by the query endpoint.

use serde::de::DeserializeOwned;

/// A record stored in a backend class
///
/// The class name forms the collection path (`/classes/{CLASS_NAME}`).
/// Query results are decoded into the implementing type with serde.
pub trait ParseObject: DeserializeOwned {
    /// Backend class name
    const CLASS_NAME: &'static str;
}
