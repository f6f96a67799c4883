//! Lane Rush Library
//!
//! A two-player lane-dodging game whose simulation can run independently or
//! with a Bevy UI.

pub mod audio;
pub mod simulation;

#[cfg(feature = "ui")]
pub mod ui;
