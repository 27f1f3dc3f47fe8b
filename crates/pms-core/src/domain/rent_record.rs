//! Rent ledger entry
//!
//! One row per (tenant, calendar month). `total_amount` is computed when the
//! row is written and never re-derived on read.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PaymentStatus {
    #[default]
    Pending,
    Paid,
    Late,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Paid => "Paid",
            Self::Late => "Late",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Pending" => Some(Self::Pending),
            "Paid" => Some(Self::Paid),
            "Late" => Some(Self::Late),
            _ => None,
        }
    }
}

/// A month token is a `YYYY-MM` string naming a real calendar month.
pub fn is_valid_month(month: &str) -> bool {
    month.len() == 7
        && NaiveDate::parse_from_str(&format!("{month}-01"), "%Y-%m-%d").is_ok()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentRecord {
    pub id: Uuid,
    pub tenant_id: Uuid,
    /// Unit the tenant occupied when the row was written; kept even after
    /// the tenant vacates or moves.
    pub unit_id: Uuid,

    pub month: String,
    pub rent_amount: i64,
    pub maintenance_amount: i64,
    pub total_amount: i64,

    pub payment_status: PaymentStatus,
    pub paid_on: Option<NaiveDate>,

    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
}

impl RentRecord {
    pub fn new(
        tenant_id: Uuid,
        unit_id: Uuid,
        month: String,
        rent_amount: i64,
        maintenance_amount: i64,
        payment_status: PaymentStatus,
        paid_on: Option<NaiveDate>,
    ) -> Result<Self, DomainError> {
        if !is_valid_month(&month) {
            return Err(DomainError::ValidationError(format!(
                "Month must be a YYYY-MM token, got: {month}"
            )));
        }
        if rent_amount < 0 || maintenance_amount < 0 {
            return Err(DomainError::ValidationError(
                "Amounts cannot be negative".to_string(),
            ));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            tenant_id,
            unit_id,
            month,
            rent_amount,
            maintenance_amount,
            total_amount: rent_amount + maintenance_amount,
            payment_status,
            paid_on,
            created_at: Utc::now(),
            modified_at: None,
        })
    }

    /// Overwrite provided amounts and recompute the total.
    pub fn apply_amounts(
        &mut self,
        rent_amount: Option<i64>,
        maintenance_amount: Option<i64>,
    ) -> Result<(), DomainError> {
        if let Some(rent) = rent_amount {
            if rent < 0 {
                return Err(DomainError::ValidationError(
                    "Rent amount cannot be negative".to_string(),
                ));
            }
            self.rent_amount = rent;
        }
        if let Some(maintenance) = maintenance_amount {
            if maintenance < 0 {
                return Err(DomainError::ValidationError(
                    "Maintenance amount cannot be negative".to_string(),
                ));
            }
            self.maintenance_amount = maintenance;
        }
        self.total_amount = self.rent_amount + self.maintenance_amount;
        Ok(())
    }

    pub fn is_paid(&self) -> bool {
        self.payment_status == PaymentStatus::Paid
    }
}

/// Flattened ledger row for the payments overview; joined names are `None`
/// when the referenced entity is missing or soft-deleted.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSummary {
    pub id: Uuid,
    pub tenant_name: Option<String>,
    pub property_name: Option<String>,
    pub unit_number: Option<String>,
    pub month: String,
    pub rent_amount: i64,
    pub maintenance_amount: i64,
    pub total_amount: i64,
    pub payment_status: PaymentStatus,
    pub paid_on: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_token() {
        assert!(is_valid_month("2024-01"));
        assert!(is_valid_month("1999-12"));
        assert!(!is_valid_month("2024-13"));
        assert!(!is_valid_month("2024-1"));
        assert!(!is_valid_month("202401"));
        assert!(!is_valid_month("Jan 2024"));
        assert!(!is_valid_month(""));
    }

    #[test]
    fn test_total_computed_at_write() {
        let record = RentRecord::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            "2024-01".into(),
            10_000,
            500,
            PaymentStatus::Pending,
            None,
        )
        .unwrap();
        assert_eq!(record.total_amount, 10_500);
    }

    #[test]
    fn test_total_recomputed_on_amount_change() {
        let mut record = RentRecord::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            "2024-01".into(),
            10_000,
            500,
            PaymentStatus::Pending,
            None,
        )
        .unwrap();

        record.apply_amounts(Some(12_000), None).unwrap();
        assert_eq!(record.total_amount, 12_500);

        record.apply_amounts(None, Some(0)).unwrap();
        assert_eq!(record.total_amount, 12_000);
    }

    #[test]
    fn test_negative_amounts_rejected() {
        let result = RentRecord::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            "2024-01".into(),
            -1,
            0,
            PaymentStatus::Pending,
            None,
        );
        assert!(result.is_err());
    }
}
