use rust_decimal::Decimal;

/// Result of a single tax calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct TaxBreakdown {
    pub tax_amount: Decimal,
    pub total: Decimal,
    pub rate: Decimal,
}

/// TaxCalculator computes the tax amount and total for a base amount.
pub struct TaxCalculator;

impl TaxCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Calculate tax for an already-validated amount and rate.
    ///
    /// tax_amount = base_amount × rate, total = base_amount + tax_amount.
    /// Inputs are assumed validated upstream (base_amount > 0, rate >= 0);
    /// there is no failure mode.
    pub fn calculate(&self, base_amount: Decimal, rate: Decimal) -> TaxBreakdown {
        let tax_amount = base_amount * rate;

        TaxBreakdown {
            tax_amount,
            total: base_amount + tax_amount,
            rate,
        }
    }
}

impl Default for TaxCalculator {
    fn default() -> Self {
        Self::new()
    }
}
