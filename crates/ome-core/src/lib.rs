//! Attribute-tree logic between `ome-api` and its consumers (the `ome` CLI).
//!
//! The appliance describes a template as a nested tree of named attribute
//! groups. This crate owns everything done with that tree once it has been
//! fetched:
//!
//! - **Domain model** ([`model`]) — [`AttributeGroup`] as a branch/leaf sum
//!   type, [`Attribute`], [`DisplayPath`], and the flat and VLAN views.
//!
//! - **[`resolve()`]** — resolves a comma-joined display path plus attribute
//!   id to exactly one attribute, or reports which segment failed.
//!
//! - **[`flatten_all()`]** — depth-first listing of every attribute with its
//!   fully qualified path; every emitted path resolves back to its attribute.
//!
//! - **[`vlan`]** — decodes the fixed NICModel → NIC → Port → Partition
//!   schema of the network view into [`VlanRecord`]s, and encodes edited
//!   records into the `UpdateNetworkConfig` body.
//!
//! - **[`TemplateService`]** — async facade that fetches trees through
//!   `ome-api`, runs the pure tree functions, and pushes updates back.

pub mod config;
pub mod convert;
pub mod error;
pub mod flatten;
pub mod model;
pub mod refresh;
pub mod resolve;
pub mod service;
pub mod update;
pub mod vlan;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::{ServerConfig, TlsVerification};
pub use error::CoreError;
pub use flatten::flatten_all;
pub use refresh::refresh_attributes;
pub use resolve::resolve;
pub use service::{TemplateService, VlanUpdate};
pub use update::{AttributeEdit, encode_attribute_update};

pub use ome_api::Credentials;

pub use model::{
    Attribute, AttributeGroup, AttributeRef, DisplayPath, FlatAttribute, GroupNode, VlanConfig,
    VlanRecord,
};
