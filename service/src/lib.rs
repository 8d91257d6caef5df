//! Service contains the client logic of the contract portal.
//!
//! List of available Cargo features:
#![doc = document_features::document_features!()]
#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod command;
pub mod domain;
pub mod infra;
pub mod query;

#[cfg(doc)]
use infra::Api;

pub use self::{command::Command, query::Query};

/// Client of the contract portal.
#[derive(Clone, Copy, Debug)]
pub struct Service<A> {
    /// Portal [`Api`] gateway of this [`Service`].
    api: A,
}

impl<A> Service<A> {
    /// Creates a new [`Service`] over the provided portal [`Api`] gateway.
    #[must_use]
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Returns the portal [`Api`] gateway of this [`Service`].
    #[must_use]
    pub fn api(&self) -> &A {
        &self.api
    }
}
