//! The pixel canvas and its serialization.

pub mod canvas;
pub mod ppm;
