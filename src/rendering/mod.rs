//! Rendering subsystem for drawing the timeline
//!
//! This module contains the low-level drawing logic for the timeline viewer:
//! - Item rendering (boxes with title and organization)
//! - Time axis rendering (year labels and month ticks)
//! - Text utilities (label truncation)

pub mod item_renderer;
pub mod time_axis_renderer;
pub mod text_utils;
