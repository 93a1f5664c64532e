//! Core library for the icon-grid command line application.
//!
//! The composer turns a directory of SVG icons into a single grid document.
//! Icon discovery and file output live under [`io`], the icon collection in
//! [`model`], the grid arithmetic in [`layout`], markup generation in
//! [`render`], and the end-to-end pipeline in [`compose`].

pub mod compose;
pub mod error;
pub mod io;
pub mod layout;
pub mod model;
pub mod render;

pub use compose::{ComposeOutcome, LayoutReport, compose, plan};
pub use error::{ComposeError, Result};
pub use layout::{GridLayout, LayoutParams, compute_layout};
