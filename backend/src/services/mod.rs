//! Business services for the KrishiMitra Platform

pub mod advisory;
pub mod prompts;
pub mod weather;
