//! Query validation.
//!
//! Checks syntax only: `2024-13-45` passes the date check, since calendar
//! validity is left to the upstream API.

use crate::errors::{FxRatesError, Result};
use crate::models::{RateQuery, NATIVE_CURRENCY};

/// Validates caller queries before any request is built.
#[derive(Clone, Debug, Default)]
pub struct QueryValidator;

impl QueryValidator {
    pub fn new() -> Self {
        Self
    }

    /// Validates a query.
    ///
    /// Every broken rule is reported, joined by `"; "`. An absent
    /// `base_currency` is treated as EUR.
    pub fn validate(&self, query: &RateQuery) -> Result<()> {
        let mut issues: Vec<String> = Vec::new();

        if query.currencies.is_empty() {
            issues.push("At least one currency is required".to_string());
        }
        for code in &query.currencies {
            if !is_currency_code(code) {
                issues.push(format!("Invalid currency code: {:?}", code));
            }
        }

        if !is_date_label(&query.start_date) {
            issues.push(format!(
                "Invalid start date: {:?} (expected YYYY-MM-DD)",
                query.start_date
            ));
        }
        if let Some(end_date) = &query.end_date {
            if !is_date_label(end_date) {
                issues.push(format!(
                    "Invalid end date: {:?} (expected YYYY-MM-DD)",
                    end_date
                ));
            } else if is_date_label(&query.start_date) && query.start_date > *end_date {
                issues.push(format!(
                    "Start date {} is after end date {}",
                    query.start_date, end_date
                ));
            }
        }

        if let Some(base) = &query.base_currency {
            if !is_currency_code(base) {
                issues.push(format!("Invalid base currency: {:?}", base));
            }
        }

        let effective_base = query.base_currency.as_deref().unwrap_or(NATIVE_CURRENCY);
        if let [only] = query.currencies.as_slice() {
            if only == effective_base {
                issues.push(format!("Cannot get rate of {} against itself", only));
            }
        }

        if issues.is_empty() {
            Ok(())
        } else {
            Err(FxRatesError::validation(issues.join("; ")))
        }
    }
}

/// Exactly three ASCII uppercase letters.
pub fn is_currency_code(code: &str) -> bool {
    code.len() == 3 && code.bytes().all(|b| b.is_ascii_uppercase())
}

/// `YYYY-MM-DD` shape: digits with dashes at positions 4 and 7.
pub fn is_date_label(date: &str) -> bool {
    let bytes = date.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}
