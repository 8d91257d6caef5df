//! [`Command`] for signing a [`Contract`].

use common::operations::Perform;
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::contract,
    infra::{api, Api},
    Service,
};
#[cfg(doc)]
use crate::domain::Contract;

use super::Command;

/// [`Command`] for signing a [`Contract`] with a [`contract::Signature`].
///
/// Only posts the [`contract::Signature`]: the portal never returns the
/// updated [`Contract`], so the caller is expected to re-run a lookup for
/// the same [`contract::Ref`] right afterwards.
#[derive(Clone, Debug)]
pub struct SignContract {
    /// [`contract::Ref`] of the [`Contract`] to be signed.
    pub contract_ref: contract::Ref,

    /// [`contract::Signature`] to attach.
    pub signature: contract::Signature,
}

impl<A> Command<SignContract> for Service<A>
where
    A: Api<Perform<contract::Signing>, Ok = (), Err = Traced<api::Error>>,
{
    type Ok = ();
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: SignContract) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let SignContract {
            contract_ref,
            signature,
        } = cmd;

        self.api()
            .execute(Perform(contract::Signing {
                contract_ref,
                signature,
            }))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
    }
}

/// Error of [`SignContract`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// Portal [`Api`] operation failed.
    #[display("portal `Api` operation failed: {_0}")]
    #[from]
    Api(api::Error),
}

#[cfg(test)]
mod spec {
    use std::sync::Mutex;

    use common::operations::Perform;
    use tracerr::Traced;

    use crate::{
        domain::contract,
        infra::{api, Api},
        Command as _, Service,
    };

    use super::{ExecutionError, SignContract};

    /// Portal [`Api`] double recording the operations it receives.
    #[derive(Debug, Default)]
    struct MockApi {
        /// [`contract::Signing`]s this [`MockApi`] has received.
        performed: Mutex<Vec<contract::Signing>>,

        /// Queued responses to the upcoming operations.
        responses: Mutex<Vec<Result<(), api::Error>>>,
    }

    impl Api<Perform<contract::Signing>> for MockApi {
        type Ok = ();
        type Err = Traced<api::Error>;

        async fn execute(
            &self,
            Perform(signing): Perform<contract::Signing>,
        ) -> Result<Self::Ok, Self::Err> {
            self.performed.lock().unwrap().push(signing);
            self.responses
                .lock()
                .unwrap()
                .remove(0)
                .map_err(|e| tracerr::new!(e))
        }
    }

    fn signing() -> SignContract {
        SignContract {
            contract_ref: contract::Ref::new("C-1").unwrap(),
            signature: contract::Signature::new("sig123").unwrap(),
        }
    }

    #[tokio::test]
    async fn posts_signing_payload() {
        let service = Service::new(MockApi::default());
        *service.api().responses.lock().unwrap() = vec![Ok(())];

        service.execute(signing()).await.unwrap();

        assert_eq!(
            *service.api().performed.lock().unwrap(),
            vec![contract::Signing {
                contract_ref: contract::Ref::new("C-1").unwrap(),
                signature: contract::Signature::new("sig123").unwrap(),
            }],
        );
    }

    #[tokio::test]
    async fn surfaces_portal_error() {
        let service = Service::new(MockApi::default());
        *service.api().responses.lock().unwrap() =
            vec![Err(api::Error::Server {
                status: 500,
                message: Some("boom".to_owned()),
            })];

        let err = service.execute(signing()).await.unwrap_err();

        assert!(matches!(
            err.as_ref(),
            ExecutionError::Api(api::Error::Server { status: 500, .. }),
        ));
    }
}
