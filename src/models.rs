use serde::{Deserialize, Deserializer};
use std::collections::HashMap;
use std::fmt;

use crate::error::{Error, Result};

pub const SUCCESS: &str = "success";

/// One `/latest/{base}` response. Rates are units of each currency per one
/// unit of `base_code`.
///
/// Error responses carry only `result` and `error-type`, so every field
/// falls back to its default when absent or `null`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ExchangeRateSnapshot {
    #[serde(default, deserialize_with = "null_as_default")]
    pub result: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub documentation: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub terms_of_use: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub time_last_update_unix: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub time_next_update_unix: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub base_code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub conversion_rates: HashMap<String, f64>,
    #[serde(rename = "error-type", default)]
    pub error_type: Option<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl ExchangeRateSnapshot {
    pub fn new(base_code: &str, conversion_rates: HashMap<String, f64>) -> Self {
        ExchangeRateSnapshot {
            result: SUCCESS.to_string(),
            base_code: base_code.to_string(),
            conversion_rates,
            ..Default::default()
        }
    }

    pub fn is_success(&self) -> bool {
        self.result == SUCCESS
    }

    pub fn rate(&self, code: &str) -> Option<f64> {
        self.conversion_rates.get(code).copied()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    pub amount: f64,
    pub from: String,
    pub to: String,
}

impl ConversionRequest {
    pub fn new(amount: f64, from: &str, to: &str) -> Result<Self> {
        if !amount.is_finite() {
            return Err(Error::Argument(format!("amount must be a finite number, got {amount}")));
        }

        Ok(ConversionRequest {
            amount,
            from: normalize_code(from)?,
            to: normalize_code(to)?,
        })
    }
}

fn normalize_code(code: &str) -> Result<String> {
    let code = code.trim();
    if code.is_empty() {
        return Err(Error::Argument("currency code must not be empty".into()));
    }
    Ok(code.to_uppercase())
}

/// A finished conversion, printed as `100.00 USD = 90.00 EUR`.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub request: ConversionRequest,
    pub converted: f64,
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.2} {} = {:.2} {}",
            self.request.amount, self.request.from, self.converted, self.request.to
        )
    }
}
