//! fmstrack-screen
//!
//! The Functional Movement Screen engine. Pure data and computation, no
//! I/O: the fixed seven-exercise catalog, per-exercise score entry rules,
//! the in-progress assessment session, and the scoring/interpretation
//! functions.

pub mod catalog;
pub mod entry;
pub mod error;
pub mod scoring;
pub mod session;
