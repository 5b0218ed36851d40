//! Domain models for the KrishiMitra Platform

mod crops;
mod price;
mod weather;

pub use crops::*;
pub use price::*;
pub use weather::*;
