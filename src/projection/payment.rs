//! Standard annuity mortgage payment
//!
//! Informational comparison point only; the projection itself uses the
//! constant-amortization model.

/// Level monthly payment that repays `principal` over `years` at `annual_rate`.
///
/// # Arguments
/// * `principal` - Loan amount
/// * `annual_rate` - Nominal annual rate as a decimal, compounded monthly
/// * `years` - Loan term in years
///
/// # Returns
/// * `Option<f64>` - Monthly payment, or None for a zero-length term
pub fn monthly_mortgage_payment(principal: f64, annual_rate: f64, years: u32) -> Option<f64> {
    let num_payments = years * 12;
    if num_payments == 0 {
        return None;
    }

    let monthly_rate = annual_rate / 12.0;
    if monthly_rate == 0.0 {
        return Some(principal / num_payments as f64);
    }

    let growth = (1.0 + monthly_rate).powi(num_payments as i32);
    Some(principal * (monthly_rate * growth) / (growth - 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_rate_is_straight_line() {
        let payment = monthly_mortgage_payment(1_200_000.0, 0.0, 10).unwrap();
        assert_relative_eq!(payment, 10_000.0);
    }

    #[test]
    fn test_known_annuity() {
        // 300,000 over 30 years at 6%: 1,798.65 per month
        let payment = monthly_mortgage_payment(300_000.0, 0.06, 30).unwrap();
        assert!((payment - 1_798.65).abs() < 0.01, "got {}", payment);
    }

    #[test]
    fn test_zero_term() {
        assert!(monthly_mortgage_payment(100_000.0, 0.03, 0).is_none());
    }
}
