//! # jsonconf-core
//!
//! In-memory documents for semi-structured configuration data.
//!
//! A [`Document`] is a tree of [`Value`]s keyed by strings. The crate provides
//! the operations configuration-heavy programs keep rewriting by hand: reading
//! and writing documents as JSON, addressing values by nested key paths,
//! deep-merging one document into another, copying values between documents
//! through a path mapping, and comparing the shape of a document against a
//! reference.
//!
//! ## Quick start
//!
//! ```rust
//! use jsonconf_core::{parse, render, update};
//!
//! let mut settings = parse(r#"{"server":{"host":"localhost","port":8080}}"#).unwrap();
//! let overrides = parse(r#"{"server":{"port":9090},"debug":true}"#).unwrap();
//!
//! update(&mut settings, &overrides);
//!
//! assert_eq!(
//!     render(&settings).unwrap(),
//!     r#"{"debug":true,"server":{"host":"localhost","port":9090}}"#
//! );
//! assert_eq!(
//!     settings.get_path(&["server", "port"]).unwrap().and_then(|v| v.as_i64()),
//!     Some(9090)
//! );
//! ```
//!
//! ## Modules
//!
//! - [`value`] - `Value` / `Document` tree and `ValueKind` tags
//! - [`path`] - `get` / `set` / `has_key_nested` by key sequence
//! - [`merge`] - recursive, destructive `update`
//! - [`keymatch`] - unique, case-insensitive key prefix lookup
//! - [`translate`] - `Translation` path mappings between documents
//! - [`diff`] - structural type comparison against a reference
//! - [`io`] - JSON text and file collaborator
//! - [`error`] - `ConfigError` and the crate `Result` alias
//!
//! Every operation is synchronous and works on exclusively owned data; the
//! crate holds no global state and performs no internal locking.

pub mod diff;
pub mod error;
pub mod io;
pub mod keymatch;
pub mod merge;
pub mod path;
pub mod translate;
pub mod value;

pub use diff::{compare_types, compare_types_into, TypeDiff};
pub use error::{ConfigError, Result};
pub use io::{parse, parse_lenient, read, render, render_pretty, write};
pub use keymatch::{unique_key_match_of, KeyMatcher};
pub use merge::{merged, update};
pub use path::{get, get_mut, has_key, has_key_nested, set, Path};
pub use translate::Translation;
pub use value::{Document, Value, ValueKind};
