//! Linkscape Core - Shared types for the Linkscape list visualizer
//!
//! This crate provides the small vocabulary used by both the layout projector
//! and the session binary:
//! - Mathematical primitives (re-exported from glam)
//! - Scene object identifiers
//! - RGB colors

pub mod types;

pub use glam::Vec3;
pub use types::{Color, ObjectId};
