// This is a part of Chrono.
// See README.md and LICENSE.txt for details.

//! Integer division utilities.
//!
//! Plain `/` and `%` truncate toward zero, which is off by one for negative dividends
//! whenever the calendar needs a floored quotient (e.g. the year within a 400-year cycle).

// Algorithm from [Daan Leijen. _Division and Modulus for Computer Scientists_,
// December 2001](http://research.microsoft.com/pubs/151917/divmodnote-letter.pdf)

/// Calculates a floored integer quotient and modulo.
#[inline]
pub(crate) const fn div_mod_floor(a: i32, b: i32) -> (i32, i32) {
    let (d, r) = (a / b, a % b);
    if (r > 0 && b < 0) || (r < 0 && b > 0) {
        (d - 1, r + b)
    } else {
        (d, r)
    }
}

/// Calculates a floored modulo.
#[inline]
pub(crate) const fn mod_floor(a: i32, b: i32) -> i32 {
    div_mod_floor(a, b).1
}

/// Calculates a floored integer quotient and modulo for `i64`.
#[inline]
pub(crate) const fn div_mod_floor_64(a: i64, b: i64) -> (i64, i64) {
    let (d, r) = (a / b, a % b);
    if (r > 0 && b < 0) || (r < 0 && b > 0) {
        (d - 1, r + b)
    } else {
        (d, r)
    }
}
