/// The five datasets one sync produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dataset {
    Historical,
    Overview,
    BalanceSheet,
    IncomeStatement,
    CashFlow,
}

impl Dataset {
    /// Write order used by `Ticker::sync`: historical first, then the
    /// fundamentals in fetch order.
    pub const ALL: [Dataset; 5] = [
        Dataset::Historical,
        Dataset::Overview,
        Dataset::BalanceSheet,
        Dataset::IncomeStatement,
        Dataset::CashFlow,
    ];

    pub fn suffix(self) -> &'static str {
        match self {
            Dataset::Historical => "historical",
            Dataset::Overview => "overview",
            Dataset::BalanceSheet => "balance_sheet",
            Dataset::IncomeStatement => "income_statement",
            Dataset::CashFlow => "cash_flow",
        }
    }

    /// Destination table for `symbol`, e.g. `msft_balance_sheet`.
    ///
    /// The symbol is lowercased and anything outside `[a-z0-9]` becomes `_`
    /// (`BRK.B` maps to `brk_b_*`), so two tickers never collide on a shared
    /// fixed table name. A leading digit gets a `t` prefix to stay a valid
    /// identifier.
    pub fn table_name(self, symbol: &str) -> String {
        let mut name: String = symbol
            .trim()
            .chars()
            .map(|c| {
                let c = c.to_ascii_lowercase();
                if c.is_ascii_alphanumeric() { c } else { '_' }
            })
            .collect();
        if name.is_empty() || name.starts_with(|c: char| c.is_ascii_digit()) {
            name.insert(0, 't');
        }
        format!("{name}_{}", self.suffix())
    }
}
