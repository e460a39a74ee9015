//! Entity to model mappers
//!
//! - `From<Model> for Entity`: convert database rows to domain objects
//! - `*Insert` structs: borrow entity data for database writes

mod comment;
mod like;

pub use comment::CommentInsert;
