// crates/agriverse-economics/src/token.rs
//
// AV (Agriverse) token amount type.
//
// The smallest unit is the micro-AV: 1 AV = 10^6 micro-AV. Amounts are held
// as integers so that sums and differences of displayed balances do not
// accumulate floating-point error.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// Number of micro-AV in one AV.
pub const MICRO_PER_AV: u64 = 1_000_000;

/// An AV token amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Av {
    /// Amount in micro-AV (1 AV = 10^6 micro-AV).
    pub micro: u64,
}

impl Av {
    /// Create an amount from a token value, rounded to the nearest micro-AV.
    ///
    /// Negative and NaN values map to zero; values beyond `u64::MAX` micro-AV
    /// saturate.
    ///
    /// # Example
    /// ```
    /// use agriverse_economics::token::Av;
    /// let amount = Av::from_tokens(1.5);
    /// assert_eq!(amount.micro, 1_500_000);
    /// ```
    pub fn from_tokens(amount: f64) -> Self {
        Self {
            micro: (amount * MICRO_PER_AV as f64).round() as u64,
        }
    }

    /// Create an amount from a micro-AV value.
    pub fn from_micro(micro: u64) -> Self {
        Self { micro }
    }

    /// Convert to whole tokens as a floating-point value.
    pub fn to_tokens(&self) -> f64 {
        self.micro as f64 / MICRO_PER_AV as f64
    }

    pub fn zero() -> Self {
        Self { micro: 0 }
    }
}

impl Add for Av {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            micro: self.micro.saturating_add(rhs.micro),
        }
    }
}

impl Sub for Av {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            micro: self.micro.saturating_sub(rhs.micro),
        }
    }
}

impl fmt::Display for Av {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.micro / MICRO_PER_AV;
        let frac = self.micro % MICRO_PER_AV;
        if frac == 0 {
            write!(f, "{} AV", whole)
        } else {
            let frac_str = format!("{:06}", frac);
            write!(f, "{}.{} AV", whole, frac_str.trim_end_matches('0'))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tokens() {
        assert_eq!(Av::from_tokens(1.0).micro, MICRO_PER_AV);
        assert_eq!(Av::from_tokens(0.5).micro, 500_000);
    }

    #[test]
    fn test_from_tokens_rounds_to_nearest() {
        // 0.3 * 10^6 is 299999.99999999994 in f64
        assert_eq!(Av::from_tokens(0.3).micro, 300_000);
        assert_eq!(Av::from_tokens(9.863013698630137).micro, 9_863_014);
    }

    #[test]
    fn test_negative_and_nan_are_zero() {
        assert_eq!(Av::from_tokens(-4.0), Av::zero());
        assert_eq!(Av::from_tokens(f64::NAN), Av::zero());
    }

    #[test]
    fn test_to_tokens() {
        let amount = Av::from_micro(1_500_000);
        assert!((amount.to_tokens() - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_add_and_saturating_sub() {
        let a = Av::from_tokens(1.0);
        let b = Av::from_tokens(2.5);
        assert_eq!((a + b).micro, 3_500_000);
        assert_eq!((a - b).micro, 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Av::from_tokens(80.0).to_string(), "80 AV");
        assert_eq!(Av::from_micro(9_863_014).to_string(), "9.863014 AV");
        assert_eq!(Av::from_micro(1_500_000).to_string(), "1.5 AV");
        assert_eq!(Av::zero().to_string(), "0 AV");
    }
}
