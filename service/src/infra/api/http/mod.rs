//! HTTP portal [`Api`] implementation.

mod impls;

use std::time::Duration;

use smart_default::SmartDefault;
use tracerr::Traced;
use url::Url;

use crate::{domain::contract, infra::api};
#[cfg(doc)]
use crate::{domain::Contract, infra::Api};

/// Default base URL of the portal API deployment.
pub const DEFAULT_BASE_URL: &str =
    "https://oupoun-test-272677622251.me-central1.run.app/api/v2";

/// HTTP portal [`Api`] gateway.
#[derive(Clone, Debug)]
pub struct Http {
    /// HTTP client issuing the requests.
    client: reqwest::Client,

    /// Base [`Url`] all portal paths are relative to.
    base_url: Url,
}

impl Http {
    /// Creates a new [`Http`] gateway with the provided [`Config`].
    ///
    /// # Errors
    ///
    /// If the [`Config`] contains an invalid base URL, or the underlying
    /// HTTP client cannot be initialized.
    pub fn new(conf: &Config) -> Result<Self, Traced<api::Error>> {
        use api::Error as E;

        let base_url = Url::parse(&conf.base_url).map_err(|e| {
            tracerr::new!(E::InvalidConfig(format!(
                "cannot parse base URL `{}`: {e}",
                conf.base_url,
            )))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(tracerr::new!(E::InvalidConfig(format!(
                "`{base_url}` cannot be used as a base URL",
            ))));
        }

        let client = reqwest::Client::builder()
            .timeout(conf.timeout)
            .build()
            .map_err(|e| {
                tracerr::new!(E::InvalidConfig(format!(
                    "cannot initialize HTTP client: {e}",
                )))
            })?;

        Ok(Self { client, base_url })
    }

    /// Returns the [`Url`] of the [`Contract`] lookup endpoint.
    fn contract_url(&self, reference: &contract::Ref) -> Url {
        let mut url = self.base_url.clone();
        _ = url
            .path_segments_mut()
            .expect("checked in `Http::new()`")
            .extend(["portal", "contract", reference.as_ref()]);
        url
    }

    /// Returns the [`Url`] of the [`Contract`] signing endpoint.
    ///
    /// The [`contract::Signature`] travels in the request target (query
    /// string), not the body. This is the wire shape of the portal API and
    /// is preserved bit-for-bit.
    fn sign_url(&self, signing: &contract::Signing) -> Url {
        let mut url = self.contract_url(&signing.contract_ref);
        _ = url
            .path_segments_mut()
            .expect("checked in `Http::new()`")
            .push("sign");
        _ = url
            .query_pairs_mut()
            .append_pair("signature", signing.signature.as_ref());
        url
    }
}

/// [`Http`] gateway configuration.
#[derive(Clone, Debug, SmartDefault)]
pub struct Config {
    /// Base URL of the portal API.
    #[default(DEFAULT_BASE_URL.to_owned())]
    pub base_url: String,

    /// Timeout of a single request.
    #[default(Duration::from_secs(30))]
    pub timeout: Duration,
}
