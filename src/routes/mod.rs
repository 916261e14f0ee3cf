//! Route tables. Paths are relative; the application factory nests them under `/api`.

mod common;
mod registry;

pub use common::common_routes;
pub use registry::registry_routes;
