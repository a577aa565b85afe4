//! Investment calculators
//!
//! Future value of a monthly SIP and of a one-off lumpsum, compounded at a
//! fixed annual rate. Results are plain floats in currency units; they are
//! projections, not stored amounts.

use crate::error::{FinanceError, FinanceResult};

/// Annual return assumed when none is given
pub const DEFAULT_ANNUAL_RATE: f64 = 12.0;

/// What was put in, what it earned, and the final value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub invested: f64,
    pub returns: f64,
    pub total: f64,
}

fn check_inputs(principal: f64, rate_percent: f64, years: f64) -> FinanceResult<()> {
    if !principal.is_finite() || principal <= 0.0 {
        return Err(FinanceError::Validation(
            "Investment amount must be greater than zero".into(),
        ));
    }
    if !years.is_finite() || years <= 0.0 {
        return Err(FinanceError::Validation(
            "Investment period must be greater than zero".into(),
        ));
    }
    if !rate_percent.is_finite() {
        return Err(FinanceError::Validation("Invalid rate of return".into()));
    }
    Ok(())
}

/// Monthly SIP of `monthly` for `years` at `rate_percent` a year
///
/// `M = P × ((1 + r)^n − 1) / r × (1 + r)` with `r` the monthly rate and
/// `n` the number of instalments. At a zero rate the value is `P × n`.
pub fn sip(monthly: f64, rate_percent: f64, years: f64) -> FinanceResult<Projection> {
    check_inputs(monthly, rate_percent, years)?;

    let r = rate_percent / 12.0 / 100.0;
    let n = years * 12.0;
    let invested = monthly * n;
    let total = if r == 0.0 {
        invested
    } else {
        monthly * (((1.0 + r).powf(n) - 1.0) / r) * (1.0 + r)
    };

    Ok(Projection {
        invested,
        returns: total - invested,
        total,
    })
}

/// One-off investment of `principal` for `years` at `rate_percent` a year
pub fn lumpsum(principal: f64, rate_percent: f64, years: f64) -> FinanceResult<Projection> {
    check_inputs(principal, rate_percent, years)?;

    let total = principal * (1.0 + rate_percent / 100.0).powf(years);
    Ok(Projection {
        invested: principal,
        returns: total - principal,
        total,
    })
}
