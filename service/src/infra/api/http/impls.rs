//! [`Contract`]-related portal [`Api`] implementations.

use common::operations::{By, Perform, Select};
use serde::Deserialize;
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{contract, Contract},
    infra::{api, Api},
};

use super::Http;

impl Api<Select<By<Contract, contract::Ref>>> for Http {
    type Ok = Contract;
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Contract, contract::Ref>>,
    ) -> Result<Self::Ok, Self::Err> {
        let reference = by.into_inner();
        let url = self.contract_url(&reference);

        log::debug!("fetching `Contract(ref: {reference})` from `{url}`");

        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| tracerr::new!(transport(&e)))?;
        if !resp.status().is_success() {
            return Err(tracerr::new!(status_error(resp).await));
        }

        resp.json::<Contract>().await.map_err(|e| {
            tracerr::new!(api::Error::MalformedResponse(e.to_string()))
        })
    }
}

impl Api<Perform<contract::Signing>> for Http {
    type Ok = ();
    type Err = Traced<api::Error>;

    async fn execute(
        &self,
        Perform(signing): Perform<contract::Signing>,
    ) -> Result<Self::Ok, Self::Err> {
        // The `Signature` is carried by the request target, so the body is
        // deliberately left empty.
        let url = self.sign_url(&signing);

        log::debug!("signing `Contract(ref: {})`", signing.contract_ref);

        let resp = self
            .client
            .post(url)
            .send()
            .await
            .map_err(|e| tracerr::new!(transport(&e)))?;
        if !resp.status().is_success() {
            return Err(tracerr::new!(status_error(resp).await));
        }

        Ok(())
    }
}

/// Classifies the provided transport failure as an [`api::Error`].
fn transport(e: &reqwest::Error) -> api::Error {
    if e.is_timeout() {
        api::Error::Timeout
    } else {
        api::Error::Network(e.to_string())
    }
}

/// Builds an [`api::Error`] out of the provided non-2xx response.
async fn status_error(resp: reqwest::Response) -> api::Error {
    let status = resp.status();
    let message = resp.json::<ErrorBody>().await.ok().and_then(|b| b.message);

    if status == reqwest::StatusCode::NOT_FOUND {
        api::Error::NotFound { message }
    } else {
        api::Error::Server {
            status: status.as_u16(),
            message,
        }
    }
}

/// Body shape of a non-2xx portal response.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ErrorBody {
    /// Human-readable message to surface to the user.
    message: Option<String>,
}
