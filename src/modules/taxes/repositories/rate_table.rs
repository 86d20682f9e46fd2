use rust_decimal::Decimal;

/// A single tax rule keyed by (state, year, category).
///
/// Entries are stored pre-normalized: state codes upper-case, categories in
/// their canonical case. Lookup is case-sensitive against these values.
#[derive(Debug, Clone)]
pub struct TaxRule {
    pub state: String,
    pub year: i32,
    pub category: String,
    pub rate: Decimal,
}

impl TaxRule {
    pub fn new(state: impl Into<String>, year: i32, category: impl Into<String>, rate: Decimal) -> Self {
        Self {
            state: state.into(),
            year,
            category: category.into(),
            rate,
        }
    }
}

/// Read-only rate table, built once at startup and shared across requests.
#[derive(Debug, Clone)]
pub struct RateTable {
    rules: Vec<TaxRule>,
}

impl RateTable {
    pub fn new(rules: Vec<TaxRule>) -> Self {
        Self { rules }
    }

    /// Exact-match lookup; the caller normalizes the state code beforehand.
    ///
    /// `None` is a normal outcome (no rule configured), not a fault. When
    /// duplicate triples exist, the first rule in table order wins.
    pub fn find_rate(&self, state: &str, year: i32, category: &str) -> Option<Decimal> {
        self.rules
            .iter()
            .find(|rule| rule.state == state && rule.year == year && rule.category == category)
            .map(|rule| rule.rate)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RateTable {
    /// Seed rules shipped with the service.
    fn default() -> Self {
        Self::new(vec![
            TaxRule::new("NY", 2024, "electronics", Decimal::new(88, 3)),
            TaxRule::new("CA", 2024, "clothing", Decimal::new(75, 3)),
            TaxRule::new("TX", 2024, "services", Decimal::ZERO),
        ])
    }
}
