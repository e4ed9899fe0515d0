//! Page addressing.

mod route;

pub use route::Route;
