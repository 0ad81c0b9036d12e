//! Prompt construction for pitch generation.
//!
//! ```text
//! idea + tone + audience + [section keys] → preamble → idea block → section headers
//! ```
//!
//! The builder is pure: identical inputs always produce byte-identical prompts, which is
//! what the endpoint tests rely on.

pub mod builder;
pub mod sections;
pub mod templates;

pub use builder::{build_prompt, resolve_sections};
pub use sections::{Section, SECTIONS};
pub use templates::{DEFAULT_AUDIENCE, DEFAULT_TONE};
