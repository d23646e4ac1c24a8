//! # Wormbrain
//!
//! Headless driver around [`wormbrain_core`]: a simulated clock, the sensory
//! latches of the host world and steering read-back.

pub mod app;
