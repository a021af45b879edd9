//! Domain value objects and types.
//!
//! Type-safe wrappers for the pieces of a contact inquiry. Each value object
//! validates at construction time, so a `ContactSubmission` built from them
//! cannot hold an invalid field.

pub mod area;
pub mod email;
pub mod errors;
pub mod interest;
pub mod property;
pub mod text;

pub use area::ServiceArea;
pub use email::EmailAddress;
pub use errors::ValidationError;
pub use interest::Interest;
pub use property::PropertyType;
pub use text::{MessageBody, PersonName};
