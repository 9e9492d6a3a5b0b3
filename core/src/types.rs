use std::fmt;

/// Cash amount held in a case, offered by the banker or earned in a round.
pub type Cash = f64;

/// Zero-based position of a case on the board.
pub type CaseIndex = usize;

/// Count of player actions taken in a game (choice, reveals and decisions).
pub type Stage = u32;

/// Displays an amount the way the game prints money: `1,234,567.89`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CashDisplay(pub Cash);

impl fmt::Display for CashDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cents = (self.0 * 100.0).round();
        let negative = cents < 0.0;
        // whole cents fit comfortably in u64 for any realistic board
        let cents = cents.abs() as u64;
        let (whole, frac) = (cents / 100, cents % 100);

        if negative {
            f.write_str("-")?;
        }
        write_grouped(f, whole)?;
        write!(f, ".{frac:02}")
    }
}

fn write_grouped(f: &mut fmt::Formatter<'_>, value: u64) -> fmt::Result {
    if value < 1000 {
        return write!(f, "{value}");
    }
    write_grouped(f, value / 1000)?;
    write!(f, ",{:03}", value % 1000)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cash_display_groups_thousands() {
        assert_eq!(CashDisplay(0.01).to_string(), "0.01");
        assert_eq!(CashDisplay(5.0).to_string(), "5.00");
        assert_eq!(CashDisplay(1000.0).to_string(), "1,000.00");
        assert_eq!(CashDisplay(1_000_000.0).to_string(), "1,000,000.00");
        assert_eq!(CashDisplay(12_345.678).to_string(), "12,345.68");
    }

    #[test]
    fn cash_display_rounds_to_cents() {
        assert_eq!(CashDisplay(999.999).to_string(), "1,000.00");
        assert_eq!(CashDisplay(-42.5).to_string(), "-42.50");
    }
}
