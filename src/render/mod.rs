//! Module for anything related to rendering.
//!
//! This module contains the sandbox scene, the procedural texture generator
//! and the GLSL sources under `shaders/`.

pub mod scene;
pub mod texgen;
