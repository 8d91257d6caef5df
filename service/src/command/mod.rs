//! [`Command`] definition.

pub mod sign_contract;

/// [`Command`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Command;

pub use self::sign_contract::SignContract;
