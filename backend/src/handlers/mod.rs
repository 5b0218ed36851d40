//! HTTP handlers for the KrishiMitra Platform

pub mod crops;
pub mod disease;
pub mod health;
pub mod prices;
pub mod weather;

pub use crops::*;
pub use disease::*;
pub use health::*;
pub use prices::*;
pub use weather::*;
