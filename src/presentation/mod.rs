//! Presentation layer for visual styling and color mapping.
//!
//! This module contains presentation logic separated from layout logic:
//! - Fill and outline colors for timeline items
//! - Hover and focus emphasis

pub mod color_mapping;
