//! Navigation for the clinic scheduling dashboard.
//!
//! The host UI owns rendering; this crate only knows which paths exist, which
//! page each one shows, and the title the window should carry once there.

pub mod routes;

pub use routes::*;
