//! Tower middleware for the site.

pub mod request_id;

pub use request_id::request_id_middleware;
