//! Builder-field domain: wire types, schema validation, normalization.

pub mod field;
pub mod normalize;
pub mod validate;

pub use field::{BuilderField, DisplayOrder};
pub use normalize::normalize;
pub use validate::validate;
