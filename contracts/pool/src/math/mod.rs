//! Integer helpers for reserve and share calculations.
//! Every division rounds toward zero, i.e. in the pool's favour for the
//! non-negative values handled here.

/// `a * b / denominator` with overflow and zero-denominator detection.
pub fn mul_div(a: i128, b: i128, denominator: i128) -> Option<i128> {
    if denominator == 0 {
        return None;
    }
    a.checked_mul(b)?.checked_div(denominator)
}

/// Computed integer square root using Newton's method.
pub fn sqrt(value: i128) -> i128 {
    if value <= 0 {
        return 0;
    }
    let mut x = value;
    let mut y = x / 2 + x % 2;
    while y < x {
        x = y;
        y = (x + value / x) / 2;
    }
    x
}
