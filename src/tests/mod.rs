//! Test modules for the Mauka router.
//!
//! Crate-level suites that exercise several modules together. Tests local
//! to a single module live next to it.

pub mod route_table_tests;
pub mod test_utils;
