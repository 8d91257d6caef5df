//! [`Percent`]-related definitions.

use std::str::FromStr;

use derive_more::Display;
use rust_decimal::Decimal;

/// Floating-point percentage.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub struct Percent(Decimal);

impl Percent {
    /// Creates a new [`Percent`] if the provided value lies within the
    /// `0..=100` range.
    #[must_use]
    pub fn new(val: Decimal) -> Option<Self> {
        if val < Decimal::ZERO || val > Decimal::ONE_HUNDRED {
            None
        } else {
            Some(Self(val))
        }
    }
}

impl FromStr for Percent {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s)
            .ok()
            .and_then(Self::new)
            .ok_or("invalid percent value")
    }
}

#[cfg(feature = "serde")]
mod serde {
    //! Module providing integration with [`serde`] crate.

    use rust_decimal::{
        prelude::{FromPrimitive as _, ToPrimitive as _},
        Decimal,
    };
    use serde::{
        de::Error as _, ser::Error as _, Deserialize, Deserializer, Serialize,
        Serializer,
    };

    use super::Percent;

    impl Serialize for Percent {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_f64(self.0.to_f64().ok_or_else(|| {
                S::Error::custom("`Percent` is not representable as `f64`")
            })?)
        }
    }

    impl<'de> Deserialize<'de> for Percent {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let val = f64::deserialize(deserializer)?;
            Decimal::from_f64(val)
                .and_then(Percent::new)
                .ok_or_else(|| {
                    D::Error::custom(format!("invalid percent value: {val}"))
                })
        }
    }
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use rust_decimal::Decimal;

    use super::Percent;

    #[test]
    fn accepts_bounds() {
        assert!(Percent::new(Decimal::ZERO).is_some());
        assert!(Percent::new(Decimal::ONE_HUNDRED).is_some());
        assert!(Percent::new(Decimal::from_str("12.5").unwrap()).is_some());
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(Percent::new(Decimal::from_str("-0.1").unwrap()).is_none());
        assert!(Percent::new(Decimal::from_str("100.1").unwrap()).is_none());
    }

    #[test]
    fn from_str() {
        assert_eq!(
            Percent::from_str("12.5").unwrap().to_string(),
            "12.5".to_owned(),
        );
        assert!(Percent::from_str("101").is_err());
        assert!(Percent::from_str("twelve").is_err());
    }
}
