//! [`Query`] collection related to a single [`Contract`].

use common::operations::By;

use crate::domain::{contract, Contract};
#[cfg(doc)]
use crate::Query;

use super::ApiQuery;

/// Queries a [`Contract`] by its [`contract::Ref`].
pub type ByRef = ApiQuery<By<Contract, contract::Ref>>;
