//! Contract [`View`] definitions.

use common::operations::{By, Perform, Select};
use derive_more::Display;
use service::{
    command::{sign_contract, SignContract},
    domain::{contract, Contract},
    infra::{api, Api},
    query, Service,
};
use tracerr::Traced;
use tracing as log;

/// Validation message for a missing contract reference number.
pub const REFERENCE_REQUIRED: &str = "الرقم المرجعي للعقد مطلوب";

/// Validation message for a missing signature.
pub const SIGNATURE_REQUIRED: &str = "التوقيع مطلوب";

/// Generic message shown when a lookup fails without a portal message.
pub const FETCH_FAILED: &str = "فشل في جلب العقد";

/// Generic message shown when signing fails without a portal message.
pub const SIGN_FAILED: &str = "فشل في توقيع العقد";

/// Message shown once signing succeeds.
pub const SIGN_SUCCEEDED: &str = "تم توقيع العقد بنجاح!";

/// Terminal view over the contract portal.
///
/// Holds at most one [`Contract`] and one [`Alert`] at a time. Both are
/// replaced wholesale by every action, never partially mutated, so no state
/// of a previous lookup can bleed into the next one.
#[derive(Debug)]
pub struct View<A> {
    /// [`Service`] executing the portal operations.
    service: Service<A>,

    /// Currently displayed [`Contract`], if any.
    contract: Option<Contract>,

    /// Currently displayed [`Alert`], if any.
    alert: Option<Alert>,

    /// Current [`State`] of this [`View`].
    state: State,
}

impl<A> View<A>
where
    A: Api<
            Select<By<Contract, contract::Ref>>,
            Ok = Contract,
            Err = Traced<api::Error>,
        > + Api<Perform<contract::Signing>, Ok = (), Err = Traced<api::Error>>,
{
    /// Creates a new [`State::Idle`] [`View`] over the provided [`Service`].
    #[must_use]
    pub fn new(service: Service<A>) -> Self {
        Self {
            service,
            contract: None,
            alert: None,
            state: State::Idle,
        }
    }

    /// Submits a [`Contract`] lookup by its reference number.
    ///
    /// A blank `input` never reaches the portal: a validation [`Alert`] is
    /// shown instead. Otherwise, the previous [`Contract`] and [`Alert`] are
    /// cleared, and the lookup outcome replaces them.
    pub async fn submit_reference(&mut self, input: &str) {
        self.alert = None;

        let Some(reference) = contract::Ref::new(input.trim()) else {
            self.alert = Some(Alert::Error(REFERENCE_REQUIRED.to_owned()));
            return;
        };

        self.contract = None;
        self.state = State::Loading;
        self.lookup(reference).await;
    }

    /// Submits a [`contract::Signature`] for the displayed [`Contract`].
    ///
    /// No-op unless an unsigned [`Contract`] is displayed. On success, the
    /// [`Contract`] is immediately refetched: signing never mutates the
    /// local data optimistically.
    pub async fn submit_signature(&mut self, input: &str) {
        use sign_contract::ExecutionError as E;

        let contract_ref = match &self.contract {
            Some(c) if !c.is_signed => c.reference.clone(),
            Some(_) | None => return,
        };

        self.alert = None;

        let Some(signature) = contract::Signature::new(input.trim()) else {
            self.alert = Some(Alert::Error(SIGNATURE_REQUIRED.to_owned()));
            return;
        };

        self.state = State::Signing;
        match self
            .service
            .execute(SignContract {
                contract_ref: contract_ref.clone(),
                signature,
            })
            .await
        {
            Ok(()) => {
                self.state = State::Loading;
                self.lookup(contract_ref).await;
                if self.state == State::Loaded {
                    self.alert =
                        Some(Alert::Success(SIGN_SUCCEEDED.to_owned()));
                }
            }
            Err(e) => {
                log::warn!(
                    "failed to sign `Contract(ref: {contract_ref})`: {e}",
                );
                let E::Api(cause) = e.as_ref();
                self.alert =
                    Some(Alert::Error(display_message(cause, SIGN_FAILED)));
                self.state = State::SignFailed;
            }
        }
    }

    /// Runs a [`Contract`] lookup and applies its outcome to this [`View`].
    async fn lookup(&mut self, reference: contract::Ref) {
        match self
            .service
            .execute(query::contract::ByRef::by(reference.clone()))
            .await
        {
            Ok(contract) => {
                self.contract = Some(contract);
                self.state = State::Loaded;
            }
            Err(e) => {
                log::warn!(
                    "failed to fetch `Contract(ref: {reference})`: {e}",
                );
                self.contract = None;
                self.alert =
                    Some(Alert::Error(display_message(e.as_ref(), FETCH_FAILED)));
                self.state = State::LookupFailed;
            }
        }
    }

    /// Returns the currently displayed [`Contract`], if any.
    #[must_use]
    pub fn contract(&self) -> Option<&Contract> {
        self.contract.as_ref()
    }

    /// Returns the currently displayed [`Alert`], if any.
    #[must_use]
    pub fn alert(&self) -> Option<&Alert> {
        self.alert.as_ref()
    }

    /// Returns the current [`State`] of this [`View`].
    #[must_use]
    pub fn state(&self) -> State {
        self.state
    }

    /// Indicates whether the signing form should be offered.
    ///
    /// `true` if and only if an unsigned [`Contract`] is displayed.
    #[must_use]
    pub fn can_sign(&self) -> bool {
        self.contract.as_ref().is_some_and(|c| !c.is_signed)
    }
}

/// State of a [`View`], per lookup/sign cycle.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum State {
    /// No lookup has been submitted yet.
    Idle,

    /// Lookup is in flight.
    Loading,

    /// [`Contract`] is displayed.
    Loaded,

    /// Signing is in flight.
    Signing,

    /// Lookup failed: only an [`Alert`] is displayed.
    LookupFailed,

    /// Signing failed: the unsigned [`Contract`] is still displayed.
    SignFailed,
}

/// Single message shown in the alert area of a [`View`].
///
/// Only one [`Alert`] is displayed at a time: a new action clears the
/// previous one before starting.
#[derive(Clone, Debug, Display, Eq, PartialEq)]
pub enum Alert {
    /// Successful outcome.
    #[display("{_0}")]
    Success(String),

    /// Failed outcome.
    #[display("{_0}")]
    Error(String),
}

/// Reduces the provided [`api::Error`] to a single display message,
/// preferring the portal-provided one over the `fallback`.
fn display_message(e: &api::Error, fallback: &str) -> String {
    e.server_message()
        .map_or_else(|| fallback.to_owned(), ToOwned::to_owned)
}
