#![cfg_attr(docsrs, feature(doc_cfg))]

//! This crate recovers the png image embedded in a Godot engine `.stex` texture
//! by stripping its fixed size header.
//!
//! The header is never interpreted and the payload is not validated, the first
//! [`HEADER_SIZE`] bytes are simply removed.
//!
//! # Optional Features
//!
//! The following are a list of [Cargo features](https://doc.rust-lang.org/stable/cargo/reference/features.html#the-features-section) that can be
//! enabled or disabled:
//!
//! - **read** (default): Enables async helpers for reading textures with progress notifications.

#[cfg(feature = "read")]
#[cfg_attr(docsrs, doc(cfg(feature = "read")))]
pub mod read;

mod convert;
mod error;
mod output;

pub use convert::{Conversion, HEADER_SIZE, convert};
pub use error::Error;
pub use output::{PngResource, has_stex_extension, output_filename};

/// A `Result` alias where the `Err` case is `stex::Error`.
pub type Result<T> = std::result::Result<T, Error>;
