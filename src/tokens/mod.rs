//! Design-token documents: the structured source of colors, spacing, and
//! radii that the theme configuration is projected from.

mod schema;
pub use schema::*;

mod loader;
pub use loader::*;
