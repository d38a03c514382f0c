//! Priority-ordered lighting effects for addressable LED strips.
//!
//! A [`PriorityShaderEngine`] holds a list of [`PixelEffect`]s and, on every tick, lets
//! the first one that wants to paint the strip do so.

pub mod color;
pub mod config;
pub mod cyclecounter;
pub mod effects;
pub mod intervaltimer;
pub mod shaderengine;
pub mod strip;
pub mod termoutput;
pub mod valueslider;

pub use color::Rgb;
pub use cyclecounter::{CycleCounter, PhaseSource};
pub use effects::{PixelEffect, ProcessingStatus};
pub use shaderengine::PriorityShaderEngine;
pub use strip::{PixelBuffer, PixelStrip};
pub use valueslider::{LitCount, ValueSlider};
