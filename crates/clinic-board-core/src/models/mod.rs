//! Domain models for the clinic dashboard.

mod doctor;
mod weekday;

pub use doctor::*;
pub use weekday::*;
