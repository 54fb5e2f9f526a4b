//! Minor-unit money arithmetic with centralized rounding.
//!
//! All monetary state in the engine is [`Cents`]: `i64` amounts in the
//! smallest currency unit. Intermediate products and quotients are
//! [`Decimal`]; they become `Cents` only through [`cents_floor`] or
//! [`cents_round`], the sole rounding sites in the workspace. Native binary
//! floats never carry money.
//!
//! # Examples
//!
//! ```
//! use captable_core::money::{allocate, mul_multiple, Cents};
//! use rust_decimal::Decimal;
//!
//! // A 2.0x preference on $1,000.00 invested
//! let owed = mul_multiple(100_000, Decimal::TWO);
//! assert_eq!(owed, 200_000);
//!
//! // Splitting 101 cents over two equal holders loses nothing
//! let split: Vec<Cents> = allocate(101, &[Decimal::ONE, Decimal::ONE]);
//! assert_eq!(split.iter().sum::<Cents>(), 101);
//! ```

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Monetary amount in minor currency units (cents).
pub type Cents = i64;

/// Converts a decimal amount of cents to `Cents`, rounding down.
///
/// Used for pro-rata quotients, where flooring guarantees a pass never pays
/// out more than its pool.
///
/// # Examples
///
/// ```
/// use captable_core::money::cents_floor;
/// use rust_decimal::Decimal;
///
/// assert_eq!(cents_floor(Decimal::new(12999, 2)), 129); // 129.99 -> 129
/// ```
#[inline]
pub fn cents_floor(value: Decimal) -> Cents {
    value.floor().to_i64().unwrap_or(Cents::MAX)
}

/// Converts a decimal amount of cents to `Cents`, rounding half away from
/// zero.
///
/// Used for contractual products such as `liquidation_amount * multiple`,
/// where the conventional commercial rounding applies.
///
/// # Examples
///
/// ```
/// use captable_core::money::cents_round;
/// use rust_decimal::Decimal;
///
/// assert_eq!(cents_round(Decimal::new(1295, 1)), 130); // 129.5 -> 130
/// assert_eq!(cents_round(Decimal::new(1294, 1)), 129); // 129.4 -> 129
/// ```
#[inline]
pub fn cents_round(value: Decimal) -> Cents {
    value
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or(Cents::MAX)
}

/// Multiplies a cent amount by a contractual multiple (e.g. a 1.5x
/// liquidation preference), rounding at the write per [`cents_round`].
#[inline]
pub fn mul_multiple(amount: Cents, multiple: Decimal) -> Cents {
    cents_round(Decimal::from(amount) * multiple)
}

/// Splits `total` cents across `weights` pro rata, conserving `total`
/// exactly whenever the positive-weight pool is non-empty.
///
/// Largest-remainder method: each weight first receives the floored exact
/// share, then the residual cents go one each to the largest fractional
/// remainders (ties broken by input order). Zero and negative weights
/// receive nothing. A non-positive `total` or an empty pool yields all
/// zeros rather than an error: zero pools are a valid state of an exit
/// distribution, not a fault.
///
/// # Examples
///
/// ```
/// use captable_core::money::allocate;
/// use rust_decimal::Decimal;
///
/// let paid = allocate(100, &[Decimal::from(2), Decimal::from(1)]);
/// assert_eq!(paid, vec![67, 33]);
///
/// // Empty pool: nothing to divide by, nothing paid
/// assert_eq!(allocate(100, &[Decimal::ZERO]), vec![0]);
/// ```
pub fn allocate(total: Cents, weights: &[Decimal]) -> Vec<Cents> {
    let pool: Decimal = weights.iter().filter(|w| **w > Decimal::ZERO).sum();
    if total <= 0 || pool <= Decimal::ZERO {
        return vec![0; weights.len()];
    }

    let total_dec = Decimal::from(total);
    let mut amounts = vec![0 as Cents; weights.len()];
    let mut remainders: Vec<(Decimal, usize)> = Vec::with_capacity(weights.len());
    let mut distributed: Cents = 0;

    for (i, w) in weights.iter().enumerate() {
        if *w <= Decimal::ZERO {
            continue;
        }
        let exact = total_dec * *w / pool;
        let floored = cents_floor(exact);
        amounts[i] = floored;
        distributed += floored;
        remainders.push((exact - Decimal::from(floored), i));
    }

    // Hand out the residual cents, largest fractional remainder first.
    let mut residual = total - distributed;
    remainders.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));
    for (_, i) in &remainders {
        if residual <= 0 {
            break;
        }
        amounts[*i] += 1;
        residual -= 1;
    }

    amounts
}
