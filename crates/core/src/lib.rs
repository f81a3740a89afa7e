//! Domain types and pure logic for the collection point registry.
//!
//! Nothing in this crate performs I/O: it holds the error taxonomy, the
//! boundary parsing of point submissions, the upload policy and the rules
//! for turning stored image references into public URLs.

pub mod error;
pub mod images;
pub mod points;
pub mod types;
pub mod uploads;
