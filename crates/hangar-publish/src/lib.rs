//! Hangar Publish - The build submission pipeline
//!
//! Given a build artifact and submission options, this crate extracts
//! metadata (through `hangar-extract`), plans a unique storage location,
//! renders the iOS install manifest(s), places the artifact locally or in
//! remote object storage, and records the build in the catalog (through
//! `hangar-site`).
//!
//! Control flow: preconditions → extraction → platform branch → storage
//! plan → manifest render (iOS) → placement → catalog record.

mod error;
mod layout;
mod manifest;
mod placer;
mod remote;
mod submit;

pub use error::{PublishError, Result};
pub use layout::{plan, FolderId, StorageLayout};
pub use manifest::{load_template, render, BaseUrl, ManifestDocument, JEKYLL_FRONT_MATTER};
pub use placer::{copy_artifact, remove_source_best_effort};
pub use remote::{RemoteOverrides, RemoteSettings, RemoteStore, S3RemoteStore};
pub use submit::{submit, submit_with, SubmitOptions, SubmitOutcome};
