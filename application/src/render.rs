//! Text rendering of a [`Contract`].

use std::fmt::Write as _;

use common::DateTimeOf;
use service::domain::{contract::Term, Contract};
use time::{
    format_description::FormatItem, macros::format_description, OffsetDateTime,
};

/// Placeholder rendered in place of any absent optional value.
pub const NOT_AVAILABLE: &str = "غير متاح";

/// Label of a signed [`Contract`].
const SIGNED: &str = "موقع";

/// Label of an unsigned [`Contract`].
const UNSIGNED: &str = "غير موقع";

/// Display-only format of the [`Contract`] dates.
const DATE_FORMAT: &[FormatItem<'static>] =
    format_description!("[day]-[month]-[year] [hour]:[minute]");

/// Renders the provided [`Contract`] as a displayable text block.
///
/// A term group with no [`Term`]s is omitted entirely, independently of the
/// other groups, while any absent scalar value is rendered as a placeholder.
#[must_use]
pub fn contract(c: &Contract) -> String {
    let mut out = String::new();
    let status = if c.is_signed { SIGNED } else { UNSIGNED };
    _ = writeln!(out, "تفاصيل العقد ({status})");
    _ = writeln!(out, "الرقم المرجعي: {}", c.reference);
    _ = writeln!(
        out,
        "العمولة: {}",
        c.commission_percentage
            .map_or_else(|| NOT_AVAILABLE.to_owned(), |p| format!("%{p}")),
    );
    _ = writeln!(out, "تاريخ البدء: {}", date(c.start_date));
    _ = writeln!(out, "تاريخ الانتهاء: {}", date(c.end_date));

    if let Some(business) = &c.business_details {
        let name = business.business_name.as_ref();
        _ = writeln!(out, "\nتفاصيل العمل");
        _ = writeln!(
            out,
            "اسم العمل: {}",
            name.and_then(|n| n.ar.as_deref()).unwrap_or(NOT_AVAILABLE),
        );
        _ = writeln!(
            out,
            "Business name: {}",
            name.and_then(|n| n.en.as_deref()).unwrap_or(NOT_AVAILABLE),
        );
        _ = writeln!(
            out,
            "رقم السجل التجاري: {}",
            business.cr_number.as_deref().unwrap_or(NOT_AVAILABLE),
        );
    }

    term_group(&mut out, "شروط هامة", &c.highlighted_terms);
    term_group(&mut out, "الالتزامات", &c.obligations);
    term_group(&mut out, "الخدمات", &c.services);

    out
}

/// Renders a titled group of [`Term`]s, preserving their order.
fn term_group(out: &mut String, title: &str, terms: &[Term]) {
    if terms.is_empty() {
        return;
    }
    _ = writeln!(out, "\n{title}");
    for term in terms {
        _ = writeln!(
            out,
            "• {}",
            term.ar.as_deref().unwrap_or(NOT_AVAILABLE),
        );
        _ = writeln!(
            out,
            "  {}",
            term.en.as_deref().unwrap_or(NOT_AVAILABLE),
        );
    }
}

/// Formats an optional [`DateTimeOf`] for display.
fn date<Of: ?Sized>(dt: Option<DateTimeOf<Of>>) -> String {
    dt.and_then(|dt| OffsetDateTime::from(dt).format(DATE_FORMAT).ok())
        .unwrap_or_else(|| NOT_AVAILABLE.to_owned())
}

#[cfg(test)]
mod spec {
    use serde_json::json;
    use service::domain::Contract;

    use super::{contract, NOT_AVAILABLE};

    fn parse(payload: serde_json::Value) -> Contract {
        serde_json::from_value(payload).unwrap()
    }

    #[test]
    fn renders_full_contract() {
        let out = contract(&parse(json!({
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
            "obligations": [{"ar": "ب", "en": "B"}],
            "services": [{"ar": "ج", "en": "C"}],
        })));

        assert!(out.contains("موقع"));
        assert!(out.contains("C-100"));
        assert!(out.contains("%12.5"));
        assert!(out.contains("01-05-2024 10:30"));
        assert!(out.contains("01-05-2025 10:30"));
        assert!(out.contains("تفاصيل العمل"));
        assert!(out.contains("شركة"));
        assert!(out.contains("Company"));
        assert!(out.contains("1010101010"));
        assert!(out.contains("شروط هامة"));
        assert!(out.contains("الالتزامات"));
        assert!(out.contains("الخدمات"));
        assert!(!out.contains(NOT_AVAILABLE));
    }

    #[test]
    fn marks_unsigned_contract() {
        let out = contract(&parse(json!({"ref": "C-1"})));

        assert!(out.contains("غير موقع"));
    }

    #[test]
    fn substitutes_placeholders_for_absent_values() {
        let out = contract(&parse(json!({
            "ref": "C-1",
            "business_details": {},
            "obligations": [{}],
        })));

        assert!(out.contains(NOT_AVAILABLE));
        // Commission, both dates, both business names, CR number, and both
        // variants of the single term.
        assert_eq!(out.matches(NOT_AVAILABLE).count(), 8);
    }

    #[test]
    fn omits_empty_term_groups_independently() {
        let out = contract(&parse(json!({
            "ref": "C-1",
            "obligations": [{"ar": "ب", "en": "B"}],
        })));

        assert!(!out.contains("شروط هامة"));
        assert!(out.contains("الالتزامات"));
        assert!(!out.contains("الخدمات"));
        assert!(!out.contains("تفاصيل العمل"));
    }

    #[test]
    fn preserves_term_order() {
        let out = contract(&parse(json!({
            "ref": "C-1",
            "services": [{"en": "First"}, {"en": "Second"}, {"en": "Third"}],
        })));

        let first = out.find("First").unwrap();
        let second = out.find("Second").unwrap();
        let third = out.find("Third").unwrap();
        assert!(first < second && second < third);
    }
}
