use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

pub const TRANSACTION_TYPES: [&str; 2] = ["BORROW", "PURCHASE"];

/// A lending transaction. The transactions backend already speaks camelCase,
/// so the wire shape and the public shape coincide; the date is an opaque
/// ISO-8601 string passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    pub id: i64,
    pub user_id: i64,
    pub book_id: i64,
    pub transaction_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_date: Option<String>,
    /// Present on create responses only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub book_id: Option<i64>,
    #[serde(default)]
    pub transaction_type: String,
}

impl NewTransaction {
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.user_id.is_none() || self.book_id.is_none() || self.transaction_type.is_empty() {
            return Err(ModelError::Validation(
                "userId, bookId, and transactionType are required".into(),
            ));
        }
        if !TRANSACTION_TYPES.contains(&self.transaction_type.as_str()) {
            return Err(ModelError::Validation(
                "transactionType must be BORROW or PURCHASE".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_camel_case() {
        let record: TransactionRecord = serde_json::from_str(
            r#"{"id":1,"userId":2,"bookId":3,"transactionType":"BORROW",
                "transactionDate":"2024-11-05T10:00:00"}"#,
        )
        .unwrap();
        assert_eq!(record.user_id, 2);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["bookId"], 3);
        assert_eq!(json["transactionDate"], "2024-11-05T10:00:00");
    }

    #[test]
    fn unknown_transaction_type_rejected() {
        let input = NewTransaction {
            user_id: Some(1),
            book_id: Some(2),
            transaction_type: "LEASE".into(),
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn borrow_and_purchase_accepted() {
        for kind in TRANSACTION_TYPES {
            let input = NewTransaction {
                user_id: Some(1),
                book_id: Some(2),
                transaction_type: kind.into(),
            };
            assert!(input.validate().is_ok());
        }
    }
}
