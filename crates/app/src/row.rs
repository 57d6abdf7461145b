//! Pure row presentation: one record in, display fields out.
//!
//! Expiration classification is time-dependent and recomputed on every call;
//! the caller passes `today` so tests stay deterministic.

use chrono::{Duration, NaiveDate};
use farmdesk_inventory::InventoryRecord;

/// Days ahead of today that count as "expiring soon".
pub const EXPIRING_SOON_WINDOW_DAYS: i64 = 7;

/// Badge styling hint for the expiration status.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BadgeVariant {
    Secondary,
    Destructive,
    Warning,
    Success,
}

/// Time-dependent expiration label; never persisted.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ExpirationStatus {
    NoExpiration,
    Expired,
    ExpiringSoon,
    Fresh,
    InvalidDate,
}

impl ExpirationStatus {
    pub fn text(&self) -> &'static str {
        match self {
            Self::NoExpiration => "No expiration",
            Self::Expired => "Expired",
            Self::ExpiringSoon => "Expiring soon",
            Self::Fresh => "Fresh",
            Self::InvalidDate => "Invalid date",
        }
    }

    pub fn badge(&self) -> BadgeVariant {
        match self {
            Self::NoExpiration | Self::InvalidDate => BadgeVariant::Secondary,
            Self::Expired => BadgeVariant::Destructive,
            Self::ExpiringSoon => BadgeVariant::Warning,
            Self::Fresh => BadgeVariant::Success,
        }
    }
}

/// Classify an optional ISO date against `today`.
///
/// `[today, today + 7d)` is expiring-soon; exactly `today + 7d` is fresh.
pub fn classify_expiration(date: Option<&str>, today: NaiveDate) -> ExpirationStatus {
    let Some(raw) = date.map(str::trim).filter(|s| !s.is_empty()) else {
        return ExpirationStatus::NoExpiration;
    };

    let Ok(parsed) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") else {
        return ExpirationStatus::InvalidDate;
    };

    if parsed < today {
        ExpirationStatus::Expired
    } else if parsed < today + Duration::days(EXPIRING_SOON_WINDOW_DAYS) {
        ExpirationStatus::ExpiringSoon
    } else {
        ExpirationStatus::Fresh
    }
}

/// Display fields for one inventory row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub item_label: String,
    pub tags: Vec<String>,
    pub quantity_display: String,
    pub farm_display: String,
    pub expiration_display: String,
    pub status: ExpirationStatus,
}

fn format_date(date: Option<&str>) -> String {
    let Some(raw) = date.map(str::trim).filter(|s| !s.is_empty()) else {
        return "N/A".to_string();
    };
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(parsed) => parsed.format("%b %d, %Y").to_string(),
        Err(_) => "Invalid date".to_string(),
    }
}

/// Project one record into its display fields.
pub fn render_row(record: &InventoryRecord, today: NaiveDate) -> RowView {
    let item_label = if !record.item_name.is_empty() {
        record.item_name.clone()
    } else if !record.display_name.is_empty() {
        record.display_name.clone()
    } else {
        "Unnamed Item".to_string()
    };

    let tags: Vec<String> = record
        .tags
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect();

    let unit = if record.unit_of_measure.is_empty() {
        "units"
    } else {
        record.unit_of_measure.as_str()
    };

    let farm_display = record
        .farm
        .as_ref()
        .map(|f| f.name.clone())
        .unwrap_or_else(|| "No farm assigned".to_string());

    RowView {
        item_label,
        tags,
        quantity_display: format!("{} {}", record.quantity, unit),
        farm_display,
        expiration_display: format_date(record.expiration_date.as_deref()),
        status: classify_expiration(record.expiration_date.as_deref(), today),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use farmdesk_core::{FarmRef, RecordId};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 28).unwrap()
    }

    fn record(expiration: Option<&str>) -> InventoryRecord {
        InventoryRecord {
            id: RecordId::new(1),
            display_name: "Feed".into(),
            item_name: "Feed".into(),
            quantity: 3,
            unit_of_measure: "bags".into(),
            farm: Some(FarmRef {
                id: RecordId::new(2),
                name: "North Field".into(),
            }),
            expiration_date: expiration.map(String::from),
            tags: "organic, bulk".into(),
        }
    }

    #[test]
    fn no_date_is_never_expired() {
        assert_eq!(
            classify_expiration(None, today()),
            ExpirationStatus::NoExpiration
        );
        assert_eq!(
            classify_expiration(Some("  "), today()),
            ExpirationStatus::NoExpiration
        );
    }

    #[test]
    fn yesterday_is_expired() {
        assert_eq!(
            classify_expiration(Some("2026-08-27"), today()),
            ExpirationStatus::Expired
        );
    }

    #[test]
    fn today_is_expiring_soon() {
        assert_eq!(
            classify_expiration(Some("2026-08-28"), today()),
            ExpirationStatus::ExpiringSoon
        );
    }

    #[test]
    fn six_days_out_is_expiring_soon() {
        assert_eq!(
            classify_expiration(Some("2026-09-03"), today()),
            ExpirationStatus::ExpiringSoon
        );
    }

    #[test]
    fn exactly_seven_days_out_is_fresh() {
        assert_eq!(
            classify_expiration(Some("2026-09-04"), today()),
            ExpirationStatus::Fresh
        );
    }

    #[test]
    fn malformed_date_classifies_invalid() {
        assert_eq!(
            classify_expiration(Some("soonish"), today()),
            ExpirationStatus::InvalidDate
        );
    }

    #[test]
    fn renders_formatted_date_and_badge() {
        let view = render_row(&record(Some("2026-08-27")), today());
        assert_eq!(view.expiration_display, "Aug 27, 2026");
        assert_eq!(view.status, ExpirationStatus::Expired);
        assert_eq!(view.status.text(), "Expired");
        assert_eq!(view.status.badge(), BadgeVariant::Destructive);
    }

    #[test]
    fn renders_placeholders_for_missing_and_invalid_dates() {
        assert_eq!(render_row(&record(None), today()).expiration_display, "N/A");
        let view = render_row(&record(Some("not-a-date")), today());
        assert_eq!(view.expiration_display, "Invalid date");
        assert_eq!(view.status, ExpirationStatus::InvalidDate);
    }

    #[test]
    fn splits_and_trims_tags() {
        let view = render_row(&record(None), today());
        assert_eq!(view.tags, vec!["organic", "bulk"]);
    }

    #[test]
    fn falls_back_through_name_fields() {
        let mut rec = record(None);
        rec.item_name.clear();
        assert_eq!(render_row(&rec, today()).item_label, "Feed");
        rec.display_name.clear();
        assert_eq!(render_row(&rec, today()).item_label, "Unnamed Item");
    }

    #[test]
    fn missing_unit_renders_generic_units() {
        let mut rec = record(None);
        rec.unit_of_measure.clear();
        assert_eq!(render_row(&rec, today()).quantity_display, "3 units");
    }

    #[test]
    fn missing_farm_renders_placeholder() {
        let mut rec = record(None);
        rec.farm = None;
        assert_eq!(render_row(&rec, today()).farm_display, "No farm assigned");
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// No expiration date stays "No expiration" whatever today is.
            #[test]
            fn no_date_independent_of_time(days in 0i64..20000) {
                let day = NaiveDate::from_ymd_opt(1990, 1, 1).unwrap() + Duration::days(days);
                prop_assert_eq!(
                    classify_expiration(None, day),
                    ExpirationStatus::NoExpiration
                );
            }

            /// Dates strictly before today always classify expired.
            #[test]
            fn past_dates_always_expired(offset in 1i64..5000) {
                let now = today();
                let date = (now - Duration::days(offset)).format("%Y-%m-%d").to_string();
                prop_assert_eq!(
                    classify_expiration(Some(&date), now),
                    ExpirationStatus::Expired
                );
            }

            /// Dates in [today, today+7d) always classify expiring-soon.
            #[test]
            fn window_dates_always_expiring_soon(offset in 0i64..EXPIRING_SOON_WINDOW_DAYS) {
                let now = today();
                let date = (now + Duration::days(offset)).format("%Y-%m-%d").to_string();
                prop_assert_eq!(
                    classify_expiration(Some(&date), now),
                    ExpirationStatus::ExpiringSoon
                );
            }
        }
    }
}
