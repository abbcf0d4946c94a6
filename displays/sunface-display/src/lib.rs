//! embedded-graphics backend for the Sunface watch face
//!
//! This crate provides:
//! - `GraphicsSurface`, a `DrawSurface` over any embedded-graphics `DrawTarget`
//! - `IconAtlas` trait for looking up weather icon bitmaps
//! - `IconSet`, an atlas backed by one image per icon category
//! - Font selection by text height
//!
//! # Architecture
//!
//! The core crate composes a `Frame` of draw commands and never touches
//! pixels. Board crates wrap their display driver in a `GraphicsSurface`
//! and hand it to `FaceEngine::draw`.

#![no_std]

pub mod backend;
pub mod fonts;
pub mod icons;

// Re-export key types
pub use backend::{GraphicsSurface, SurfaceError};
pub use fonts::font_for_height;
pub use icons::{IconAtlas, IconSet};
