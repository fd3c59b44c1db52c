//! Rutter Core Library
//!
//! Core domain logic for the rutter route query tool: an in-memory
//! directed weighted graph and the search engine answering route
//! existence, enumeration, and shortest-path queries over it.

pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
