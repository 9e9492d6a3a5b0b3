use serde::{Deserialize, Serialize};

use crate::*;

/// The classic 26-case board.
pub const CLASSIC_VALUES: [Cash; 26] = [
    0.01, 1.0, 5.0, 10.0, 25.0, 50.0, 75.0, 100.0, 200.0, 300.0, 400.0, 500.0, 750.0, 1_000.0,
    5_000.0, 10_000.0, 25_000.0, 50_000.0, 75_000.0, 100_000.0, 200_000.0, 300_000.0, 400_000.0,
    500_000.0, 750_000.0, 1_000_000.0,
];

/// Validated set of cash values a board is dealt from, kept in ascending order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    values: Vec<Cash>,
}

impl BoardConfig {
    pub fn new(mut values: Vec<Cash>) -> Result<Self, ConfigError> {
        if values.len() < 2 {
            return Err(ConfigError::TooFewValues(values.len()));
        }
        for &value in &values {
            validate_amount(value)?;
        }
        values.sort_by(Cash::total_cmp);
        Ok(Self { values })
    }

    /// Parses cash values given as text, e.g. from the command line.
    pub fn parse<S: AsRef<str>>(args: &[S]) -> Result<Self, ConfigError> {
        let values = args
            .iter()
            .map(|arg| parse_amount(arg.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(values)
    }

    pub fn size(&self) -> usize {
        self.values.len()
    }

    /// Values in ascending order.
    pub fn values(&self) -> &[Cash] {
        &self.values
    }

    pub fn total(&self) -> Cash {
        self.values.iter().sum()
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            values: CLASSIC_VALUES.to_vec(),
        }
    }
}

/// Totals carried over from earlier sessions.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PriorTotals {
    pub earnings: Cash,
    pub possible_earnings: Cash,
}

impl PriorTotals {
    pub fn new(earnings: Cash, possible_earnings: Cash) -> Result<Self, ConfigError> {
        Ok(Self {
            earnings: validate_amount(earnings)?,
            possible_earnings: validate_amount(possible_earnings)?,
        })
    }

    pub fn parse(earnings: &str, possible_earnings: &str) -> Result<Self, ConfigError> {
        Self::new(parse_amount(earnings)?, parse_amount(possible_earnings)?)
    }
}

pub fn parse_amount(text: &str) -> Result<Cash, ConfigError> {
    let value: Cash = text
        .trim()
        .parse()
        .map_err(|_| ConfigError::NotANumber(text.to_owned()))?;
    validate_amount(value)
}

fn validate_amount(value: Cash) -> Result<Cash, ConfigError> {
    if !value.is_finite() {
        Err(ConfigError::NonFiniteValue(value))
    } else if value < 0.0 {
        Err(ConfigError::NegativeValue(value))
    } else {
        Ok(value)
    }
}
