//! Asset loading and validation for the catalog and server settings.

pub mod load;
pub mod schema;

pub use load::*;
pub use schema::*;
