//! Hangar Site - Durable catalog and site configuration bridge
//!
//! The external web front end renders two kinds of documents this crate
//! owns the write side of: the append-only build catalog (one front-matter
//! document per build under `web/_builds/`) and the shared site
//! configuration object at `web/_data/config.json`.

mod catalog;
mod error;
mod record;
mod site_config;

pub use catalog::{CatalogBridge, CatalogStore};
pub use error::{Result, SiteError};
pub use record::BuildRecord;
pub use site_config::{SiteConfigStore, KEY_INITIALIZED, KEY_LOCAL_BASE_URL, KEY_WEB_BASE_URL};
