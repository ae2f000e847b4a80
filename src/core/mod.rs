//! Data access gateway - the only code that queries or writes the store.
//!
//! Each submodule covers one table. Functions are async, take the session's
//! connection and return the crate `Result`.

/// Category queries and writes
pub mod category;
/// Product queries and writes
pub mod product;
/// Startup seeding of reference data from configuration
pub mod seed;
/// Supplier queries
pub mod supplier;
