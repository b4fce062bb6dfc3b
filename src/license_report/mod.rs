//! Grant license report domain
//!
//! Pure data model and aggregation rules. Nothing in here performs I/O.
pub mod domain;
pub mod services;
