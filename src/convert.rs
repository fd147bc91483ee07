use crate::error::{Error, Result};
use crate::models::{Conversion, ConversionRequest, ExchangeRateSnapshot};

/// Converts `amount` of `from` into `to` through the snapshot's base currency.
///
/// Both codes must be present in the snapshot; `from` is checked first.
/// The result is not rounded.
pub fn convert(amount: f64, from: &str, to: &str, snapshot: &ExchangeRateSnapshot) -> Result<f64> {
    let from_rate = snapshot
        .rate(from)
        .ok_or_else(|| Error::UnknownCurrency(from.to_string()))?;
    let to_rate = snapshot
        .rate(to)
        .ok_or_else(|| Error::UnknownCurrency(to.to_string()))?;

    Ok((amount / from_rate) * to_rate)
}

impl ConversionRequest {
    pub fn convert(self, snapshot: &ExchangeRateSnapshot) -> Result<Conversion> {
        let converted = convert(self.amount, &self.from, &self.to, snapshot)?;
        Ok(Conversion {
            request: self,
            converted,
        })
    }
}
