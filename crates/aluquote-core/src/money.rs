//! # Money Helpers
//!
//! Monetary amounts in AluQuote are plain `f64` values carried at full
//! precision through every calculation. Rounding to cents happens exactly
//! twice: when an amount is displayed, and when two amounts are compared
//! (payment vs. total).
//!
//! ## Why floats?
//! Prices here are per-square-meter rates multiplied by fractional areas
//! (`2.4 m² × 173.50/m²`), so intermediate values are inherently
//! fractional. Instead of forcing everything through integer cents and
//! losing the intermediate precision, amounts stay `f64` and the boundary
//! helpers below define the one sanctioned way to round and compare.
//!
//! ## The Rules
//! 1. NEVER compare raw `f64` amounts with `==` / `>=`. Use [`cents`].
//! 2. NEVER format with ad-hoc precision. Use [`format_amount`].
//! 3. Rounding is half-away-from-zero at 2 decimal places, matching
//!    `(x * 100).round() / 100`.

// =============================================================================
// Rounding
// =============================================================================

/// Rounds an amount to cent precision (2 decimal places).
///
/// ## Example
/// ```rust
/// use aluquote_core::money::round_cents;
///
/// assert_eq!(round_cents(10.006), 10.01);
/// assert_eq!(round_cents(10.004), 10.0);
/// ```
#[inline]
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Converts an amount to whole cents for exact comparison.
///
/// Two amounts are "the same money" when their cent values are equal;
/// this is how payment totals are checked against document totals.
#[inline]
pub fn cents(amount: f64) -> i64 {
    (amount * 100.0).round() as i64
}

// =============================================================================
// Formatting
// =============================================================================

/// Formats an amount with two decimal places, no currency symbol.
///
/// ## Example
/// ```rust
/// use aluquote_core::money::format_amount;
///
/// assert_eq!(format_amount(1234.5), "1234.50");
/// assert_eq!(format_amount(0.0), "0.00");
/// ```
#[inline]
pub fn format_amount(amount: f64) -> String {
    format!("{:.2}", amount)
}

// =============================================================================
// Unit Tests
// =============================================================================
