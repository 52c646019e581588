//! Rendering subsystem for the slide control
//!
//! This module contains all painting logic:
//! - Text utilities (ellipsis truncation)
//! - Caption placement and painting
//! - Frame orchestration (background, caption, thumb, retract step)

pub mod text_utils;
pub mod caption_renderer;
pub mod frame;
