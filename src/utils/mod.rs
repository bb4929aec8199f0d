//! Browser utility functions.

pub mod dom;
