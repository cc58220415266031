//! # amdnamer
//!
//! A build-pipeline step that rewrites anonymous AMD/RequireJS module
//! definitions into named ones.
//!
//! Compilers that emit AMD modules leave the name slot empty and let
//! the loader infer it from the file path. That breaks the moment many
//! files are concatenated into one bundle: loaders like DurandalJS can
//! no longer tell the modules apart. This crate scans a batch of
//! source assets, finds anonymous `define([...], factory)` calls, and
//! injects an explicit name derived from each file's path:
//!
//! ```text
//! define(["require", "exports"], function(require, exports) { ... });
//! // becomes
//! define("MyFoo", ["require", "exports"], function(require, exports) { ... });
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use amdnamer::{Asset, NamedModules};
//!
//! let batch = vec![Asset::read("app/MyFoo.js").await?];
//! let outcomes = NamedModules::new().run(batch).await?;
//! ```

pub mod asset;
pub mod cli;
pub mod config;
pub mod detector;
pub mod error;
pub mod pipeline;
pub mod report;
pub mod resolver;
pub mod rewriter;

// Re-exports for convenience
pub use asset::Asset;
pub use error::{NamerError, Result};
pub use pipeline::{NamedModules, Outcome};
pub use rewriter::Rewrite;
