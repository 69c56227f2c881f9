//! Type-safe price representation using decimal arithmetic.

use core::fmt;
use core::iter::Sum;
use core::ops::Add;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A USD amount stored as a fixed-point decimal.
///
/// Amounts are kept in the currency's standard unit (dollars, not cents) so
/// that `19.99` reads the same in code, in storage, and in templates. All
/// arithmetic goes through [`Decimal`]; floats never touch money.
///
/// Serialization is transparent: a `Price` is written as its decimal amount
/// (a string on the wire) and read back from either a string or a bare JSON
/// number.
///
/// ## Examples
///
/// ```
/// use minimart_core::Price;
///
/// let unit = Price::from_cents(34_900);
/// assert_eq!(unit.to_string(), "$349.00");
/// assert_eq!(unit.times(2).to_string(), "$698.00");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// A price of $0.00.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a price from a decimal dollar amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a price from whole dollars.
    #[must_use]
    pub fn from_dollars(dollars: i64) -> Self {
        Self(Decimal::from(dollars))
    }

    /// Create a price from cents.
    #[must_use]
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// The underlying decimal amount in dollars.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Multiply by a unit count, e.g. a cart line quantity.
    #[must_use]
    pub fn times(&self, quantity: i64) -> Self {
        Self(self.0 * Decimal::from(quantity))
    }

    /// Whether this price is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl fmt::Display for Price {
    /// Formats as a dollar string fixed to two decimal places, e.g. `$19.99`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}
