//! Domain logic modules for the timeline viewer.
//!
//! This module contains viewer-side calculations that do not touch egui state:
//! - Canvas operations (layout-to-screen mapping, axis ticks)

pub mod canvas_operations;
