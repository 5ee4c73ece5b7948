//! Core library for the parts-juggler command line application.
//!
//! The library converts LEGO parts lists between BrickOwl order exports, a
//! plain "standard" CSV list, and BrickLink XML. Reference tables live in
//! [`catalog`], the part-number extraction in [`resolve`], row
//! normalization in [`normalize`], duplicate merging in [`dedup`], file
//! formats under [`io`], and the end-to-end conversions in [`convert`].

pub mod catalog;
pub mod config;
pub mod convert;
pub mod dedup;
pub mod error;
pub mod io;
pub mod logging;
pub mod model;
pub mod normalize;
pub mod resolve;

pub use error::{Result, ToolError};
