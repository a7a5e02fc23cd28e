//! Creates a [`Forest`](crate::structure::Forest) on disk.

mod created_path;
mod materializer;

pub use created_path::CreatedPath;
pub use materializer::{MaterializeError, Materializer};
