//! Core library for the aircraft performance calculator.
//!
//! Published multi-panel performance nomographs are digitized as scattered
//! `(x, y, z)` sample clouds and evaluated by locating a bracketing triangle
//! around each query point, fitting a plane through it and feeding every
//! panel's result into the next panel as one of its inputs.

pub mod geometry;
pub mod chart;
pub mod performance;
pub mod runway;
pub mod io;
