//! [`Contract`] definitions.

use std::str::FromStr;

use common::{unit, DateTimeOf, Percent};
use derive_more::{AsRef, Display};
use serde::Deserialize;

#[cfg(doc)]
use common::DateTime;

/// Contract record fetched from the portal.
///
/// Received wholesale from the portal API and treated as a read-mostly
/// payload: every nested field is defensively optional, and the whole value
/// is only ever replaced by a subsequent lookup, never partially mutated.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct Contract {
    /// Reference number identifying this [`Contract`], also its lookup key.
    #[serde(rename = "ref")]
    pub reference: Ref,

    /// Indicator whether this [`Contract`] has been signed.
    #[serde(default)]
    pub is_signed: bool,

    /// Commission percentage of this [`Contract`].
    #[serde(default)]
    pub commission_percentage: Option<Percent>,

    /// [`DateTime`] when this [`Contract`] comes into force.
    #[serde(default, with = "common::datetime::serde::rfc3339::option")]
    pub start_date: Option<StartDateTime>,

    /// [`DateTime`] when this [`Contract`] expires.
    #[serde(default, with = "common::datetime::serde::rfc3339::option")]
    pub end_date: Option<EndDateTime>,

    /// Details of the business party of this [`Contract`].
    #[serde(default)]
    pub business_details: Option<BusinessDetails>,

    /// Highlighted [`Term`]s of this [`Contract`].
    #[serde(default)]
    pub highlighted_terms: Vec<Term>,

    /// Obligation [`Term`]s of this [`Contract`].
    #[serde(default)]
    pub obligations: Vec<Term>,

    /// Service [`Term`]s of this [`Contract`].
    #[serde(default)]
    pub services: Vec<Term>,
}

/// Reference number of a [`Contract`].
#[derive(
    AsRef, Clone, Debug, Deserialize, Display, Eq, Hash, PartialEq,
)]
#[as_ref(str, String)]
#[serde(try_from = "String")]
pub struct Ref(String);

impl Ref {
    /// Creates a new [`Ref`] if the given `reference` is valid.
    #[must_use]
    pub fn new(reference: impl Into<String>) -> Option<Self> {
        let reference = reference.into();
        Self::check(&reference).then_some(Self(reference))
    }

    /// Checks whether the given `reference` is a valid [`Ref`].
    fn check(reference: impl AsRef<str>) -> bool {
        let reference = reference.as_ref();
        reference.trim() == reference
            && !reference.is_empty()
            && reference.len() <= 64
    }
}

impl FromStr for Ref {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Ref`")
    }
}

impl TryFrom<String> for Ref {
    type Error = &'static str;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s).ok_or("invalid `Ref`")
    }
}

/// Digital [`Signature`] attached to a [`Contract`] by its signer.
///
/// Opaque to this system: supplied by the user and transmitted to the portal
/// as is.
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[as_ref(str, String)]
pub struct Signature(String);

impl Signature {
    /// Creates a new [`Signature`] if the given `signature` is valid.
    #[must_use]
    pub fn new(signature: impl Into<String>) -> Option<Self> {
        let signature = signature.into();
        Self::check(&signature).then_some(Self(signature))
    }

    /// Checks whether the given `signature` is a valid [`Signature`].
    fn check(signature: impl AsRef<str>) -> bool {
        let signature = signature.as_ref();
        signature.trim() == signature && !signature.is_empty()
    }
}

impl FromStr for Signature {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Signature`")
    }
}

/// Payload of attaching a [`Signature`] to a [`Contract`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Signing {
    /// [`Ref`] of the [`Contract`] to be signed.
    pub contract_ref: Ref,

    /// [`Signature`] to attach.
    pub signature: Signature,
}

/// Bilingual term of a [`Contract`].
///
/// Order of [`Term`]s within a group is meaningful and is preserved exactly
/// as received.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default)]
pub struct Term {
    /// Arabic variant of this [`Term`].
    pub ar: Option<String>,

    /// English variant of this [`Term`].
    pub en: Option<String>,
}

/// Details of the business party of a [`Contract`].
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default)]
pub struct BusinessDetails {
    /// Bilingual name of the business.
    pub business_name: Option<BusinessName>,

    /// Commercial registration number of the business.
    pub cr_number: Option<String>,
}

/// Bilingual name of a business.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default)]
pub struct BusinessName {
    /// Arabic variant of the name.
    pub ar: Option<String>,

    /// English variant of the name.
    pub en: Option<String>,
}

/// [`DateTime`] when a [`Contract`] comes into force.
pub type StartDateTime = DateTimeOf<(Contract, unit::Start)>;

/// [`DateTime`] when a [`Contract`] expires.
pub type EndDateTime = DateTimeOf<(Contract, unit::End)>;

#[cfg(test)]
mod spec {
    use serde_json::json;

    use super::{Contract, Ref, Signature};

    #[test]
    fn deserializes_full_payload() {
        let contract: Contract = serde_json::from_value(json!({
            "ref": "C-100",
            "is_signed": true,
            "commission_percentage": 12.5,
            "start_date": "2024-05-01T10:30:00Z",
            "end_date": "2025-05-01T10:30:00Z",
            "business_details": {
                "business_name": {"ar": "شركة", "en": "Company"},
                "cr_number": "1010101010",
            },
            "highlighted_terms": [{"ar": "أ", "en": "A"}],
            "obligations": [{"ar": "ب", "en": "B"}, {"ar": "ج", "en": "C"}],
            "services": [],
        }))
        .unwrap();

        assert_eq!(contract.reference, Ref::new("C-100").unwrap());
        assert!(contract.is_signed);
        assert_eq!(
            contract.commission_percentage.unwrap().to_string(),
            "12.5",
        );
        assert_eq!(
            contract.start_date.unwrap().to_rfc3339(),
            "2024-05-01T10:30:00Z",
        );
        let business = contract.business_details.unwrap();
        assert_eq!(business.cr_number.as_deref(), Some("1010101010"));
        assert_eq!(
            business.business_name.unwrap().en.as_deref(),
            Some("Company"),
        );
        assert_eq!(contract.highlighted_terms.len(), 1);
        assert_eq!(contract.obligations.len(), 2);
        assert_eq!(contract.obligations[0].en.as_deref(), Some("B"));
        assert_eq!(contract.obligations[1].en.as_deref(), Some("C"));
        assert!(contract.services.is_empty());
    }

    #[test]
    fn deserializes_minimal_payload() {
        let contract: Contract =
            serde_json::from_value(json!({"ref": "C-1"})).unwrap();

        assert_eq!(contract.reference, Ref::new("C-1").unwrap());
        assert!(!contract.is_signed);
        assert!(contract.commission_percentage.is_none());
        assert!(contract.start_date.is_none());
        assert!(contract.end_date.is_none());
        assert!(contract.business_details.is_none());
        assert!(contract.highlighted_terms.is_empty());
        assert!(contract.obligations.is_empty());
        assert!(contract.services.is_empty());
    }

    #[test]
    fn tolerates_null_dates() {
        let contract: Contract = serde_json::from_value(json!({
            "ref": "C-1",
            "start_date": null,
            "end_date": null,
        }))
        .unwrap();

        assert!(contract.start_date.is_none());
        assert!(contract.end_date.is_none());
    }

    #[test]
    fn rejects_blank_reference() {
        assert!(
            serde_json::from_value::<Contract>(json!({"ref": "  "})).is_err(),
        );
    }

    #[test]
    fn validates_reference_input() {
        assert!(Ref::new("C-1").is_some());
        assert!(Ref::new("").is_none());
        assert!(Ref::new("  ").is_none());
        assert!(Ref::new(" C-1").is_none());
        assert!(Ref::new("x".repeat(65)).is_none());
    }

    #[test]
    fn validates_signature_input() {
        assert!(Signature::new("sig123").is_some());
        assert!(Signature::new("").is_none());
        assert!(Signature::new("   ").is_none());
    }
}
