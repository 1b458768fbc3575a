//! JSON document codec for the expense tracker
//!
//! The persisted document is an object with a single `expenses` array:
//!
//! ```json
//! {
//!     "expenses": [
//!         { "amount": 5, "category": "food", "date": "2025-10-04" }
//!     ]
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::audit::ActivityLog;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{BudgetConfig, Expense};
use crate::services::ExpenseTracker;

#[derive(Serialize)]
struct DocumentRef<'a> {
    expenses: &'a [Expense],
}

#[derive(Deserialize)]
struct Document {
    expenses: Vec<Expense>,
}

/// Serialize a tracker to a pretty-printed JSON document (4-space indent)
pub fn serialize(tracker: &ExpenseTracker) -> ExpenseResult<String> {
    let document = DocumentRef {
        expenses: tracker.expenses(),
    };

    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    document
        .serialize(&mut serializer)
        .map_err(|e| ExpenseError::Format(format!("Failed to serialize expenses: {}", e)))?;

    String::from_utf8(buf)
        .map_err(|e| ExpenseError::Format(format!("Serialized document is not UTF-8: {}", e)))
}

/// Parse a JSON document into its expenses, in document order
pub fn parse(document: &str) -> ExpenseResult<Vec<Expense>> {
    let parsed: Document = serde_json::from_str(document)
        .map_err(|e| ExpenseError::Format(format!("Invalid expense document: {}", e)))?;
    Ok(parsed.expenses)
}

/// Build a fresh tracker by replaying expenses through `ExpenseTracker::add`
pub fn replay(expenses: Vec<Expense>, budget: BudgetConfig, log: ActivityLog) -> ExpenseTracker {
    let mut tracker = ExpenseTracker::new(budget, log);
    for expense in expenses {
        tracker.add(expense);
    }
    tracker
}

/// Deserialize a JSON document into a fresh tracker
///
/// Every entry is parsed before the tracker is built, so a malformed
/// document never produces a partially populated tracker.
pub fn deserialize(
    document: &str,
    budget: BudgetConfig,
    log: ActivityLog,
) -> ExpenseResult<ExpenseTracker> {
    Ok(replay(parse(document)?, budget, log))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn decode(document: &str) -> ExpenseResult<ExpenseTracker> {
        deserialize(document, BudgetConfig::default(), ActivityLog::new())
    }

    #[test]
    fn test_serialize_empty_tracker() {
        let tracker = ExpenseTracker::default();
        let json = serialize(&tracker).unwrap();
        assert_eq!(json, "{\n    \"expenses\": []\n}");
    }

    #[test]
    fn test_serialize_field_layout() {
        let mut tracker = ExpenseTracker::default();
        tracker.add(Expense::new(5, "food", date(2025, 10, 4)));

        let json = serialize(&tracker).unwrap();
        let expected = "{\n    \"expenses\": [\n        {\n            \"amount\": 5,\n            \"category\": \"food\",\n            \"date\": \"2025-10-04\"\n        }\n    ]\n}";
        assert_eq!(json, expected);
    }

    #[test]
    fn test_round_trip_preserves_order() {
        let mut tracker = ExpenseTracker::default();
        tracker.add(Expense::new(900, "fun", date(2025, 11, 6)));
        tracker.add(Expense::new(5, "food", date(2025, 10, 4)));
        tracker.add(Expense::new(-3, "travel", date(2099, 1, 31)));

        let restored = decode(&serialize(&tracker).unwrap()).unwrap();
        assert_eq!(restored.expenses(), tracker.expenses());
    }

    #[test]
    fn test_round_trip_empty() {
        let restored = decode(&serialize(&ExpenseTracker::default()).unwrap()).unwrap();
        assert!(restored.is_empty());
    }

    #[test]
    fn test_deserialize_compact_document() {
        let tracker = decode(
            r#"{"expenses":[{"date":"2025-10-04","category":"clothes","amount":15}]}"#,
        )
        .unwrap();
        assert_eq!(tracker.len(), 1);
        assert_eq!(tracker.get(0).unwrap(), &Expense::new(15, "clothes", date(2025, 10, 4)));
    }

    #[test]
    fn test_deserialize_replays_adds_into_log() {
        let log = ActivityLog::new();
        let document = r#"{"expenses":[
            {"amount":1,"category":"food","date":"2025-01-01"},
            {"amount":2,"category":"food","date":"2025-01-02"}
        ]}"#;
        deserialize(document, BudgetConfig::default(), log.clone()).unwrap();
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_loaded_extreme_amounts_are_queryable() {
        let tracker = decode(
            r#"{"expenses":[
                {"amount":9223372036854775807,"category":"food","date":"2025-10-04"},
                {"amount":1,"category":"food","date":"2025-10-04"}
            ]}"#,
        )
        .unwrap();

        assert_eq!(tracker.len(), 2);
        assert_eq!(tracker.daily_total(date(2025, 10, 4)), i64::MAX);
        assert_eq!(tracker.monthly_total(10), i64::MAX);
        assert_eq!(tracker.most_spent_category_label(10), "food");
    }

    #[test]
    fn test_missing_expenses_key() {
        let err = decode(r#"{"items": []}"#).unwrap_err();
        assert!(err.is_format());
    }

    #[test]
    fn test_missing_record_field() {
        let err = decode(r#"{"expenses":[{"amount":1,"date":"2025-01-01"}]}"#).unwrap_err();
        assert!(err.is_format());
    }

    #[test]
    fn test_non_iso_date() {
        let err =
            decode(r#"{"expenses":[{"amount":1,"category":"food","date":"04/10/2025"}]}"#)
                .unwrap_err();
        assert!(err.is_format());
    }

    #[test]
    fn test_invalid_calendar_date() {
        let err =
            decode(r#"{"expenses":[{"amount":1,"category":"food","date":"2025-02-30"}]}"#)
                .unwrap_err();
        assert!(err.is_format());
    }

    #[test]
    fn test_failure_leaves_log_untouched() {
        let log = ActivityLog::new();
        let document = r#"{"expenses":[
            {"amount":1,"category":"food","date":"2025-01-01"},
            {"amount":2,"category":"food","date":"not a date"}
        ]}"#;

        assert!(deserialize(document, BudgetConfig::default(), log.clone()).is_err());
        assert!(log.is_empty());
    }

    #[test]
    fn test_malformed_json() {
        assert!(decode("{\"expenses\": [").unwrap_err().is_format());
    }
}
