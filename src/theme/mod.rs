//! The theme configuration consumed by the external styling build
//! pipeline, and the fixed projection that populates it from a token
//! document.

mod schema;
pub use schema::*;

mod deserializers;

mod kinds;
pub use kinds::*;
