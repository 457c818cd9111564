//! Core generation pipeline.
//!
//! Discovery → extraction → aggregation → catalog merge. The CLI layer only
//! decides whether merged catalogs are written or compared.
//!
//! ## Module Structure
//!
//! - `discovery`: Find the `.proto` files selected by the source pattern
//! - `extract`: Keys and default messages from one file
//! - `keys`: Ordered, de-duplicated keys across files
//! - `catalog`: Read, merge, render and write per-language catalogs
//! - `context`: Resolved configuration plus extracted keys for one run

pub mod catalog;
pub mod context;
pub mod discovery;
pub mod extract;
pub mod keys;

pub use catalog::{Catalog, CatalogEntry, CatalogPlan, CatalogStatus, plan_catalog, read_catalog};
pub use context::GenerateContext;
pub use discovery::discover_proto_files;
pub use extract::{EnumFilter, ExtractOptions, FileKeys, extract_file, extract_keys};
pub use keys::KeySet;
