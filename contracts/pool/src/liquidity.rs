use crate::{
    errors::PoolError,
    math::{mul_div, sqrt},
    storage::PoolState,
};

/// Amounts a deposit actually takes and the shares it issues.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DepositQuote {
    pub amount0: i128,
    pub amount1: i128,
    pub shares: i128,
}

/// Prices a deposit of at most `max_amounts` against the current state.
///
/// The first deposit seeds the pool with both maxima in full and issues the
/// geometric mean `isqrt(amount0 * amount1)` as shares, which is symmetric in
/// token order.
///
/// Later deposits bind on the smaller of the two ratios `max[i] / reserve[i]`,
/// expressed in shares as `total_shares * max[i] / reserve[i]`. Each token is
/// then taken as `reserve[i] * shares / total_shares`, rounded down, so the
/// reserve ratio moves by at most one unit of rounding and never by price.
///
/// # Errors
/// | Error                   | Condition                                    |
/// |-------------------------|----------------------------------------------|
/// | `ZeroAmount`            | A maximum is not positive, or 0 shares result |
/// | `InsufficientLiquidity` | Shares outstanding but a reserve is empty     |
/// | `SlippageExceeded`      | An amount taken is below its minimum          |
/// | `Overflow`              | An intermediate product exceeds `i128`        |
pub fn quote_deposit(
    state: &PoolState,
    max_amounts: (i128, i128),
    min_amounts: (i128, i128),
) -> Result<DepositQuote, PoolError> {
    let (max0, max1) = max_amounts;
    if max0 <= 0 || max1 <= 0 {
        return Err(PoolError::ZeroAmount);
    }

    let quote = if state.total_shares == 0 {
        let product = max0.checked_mul(max1).ok_or(PoolError::Overflow)?;
        DepositQuote { amount0: max0, amount1: max1, shares: sqrt(product) }
    } else {
        if state.reserve0 == 0 || state.reserve1 == 0 {
            return Err(PoolError::InsufficientLiquidity);
        }
        let by0 = mul_div(state.total_shares, max0, state.reserve0).ok_or(PoolError::Overflow)?;
        let by1 = mul_div(state.total_shares, max1, state.reserve1).ok_or(PoolError::Overflow)?;
        let shares = by0.min(by1);

        DepositQuote {
            amount0: mul_div(state.reserve0, shares, state.total_shares)
                .ok_or(PoolError::Overflow)?,
            amount1: mul_div(state.reserve1, shares, state.total_shares)
                .ok_or(PoolError::Overflow)?,
            shares,
        }
    };

    if quote.shares <= 0 {
        return Err(PoolError::ZeroAmount);
    }
    if quote.amount0 < min_amounts.0 || quote.amount1 < min_amounts.1 {
        return Err(PoolError::SlippageExceeded);
    }
    Ok(quote)
}

/// Prices the burn of `shares` as `reserve[i] * shares / total_shares`,
/// rounded down. Burning every outstanding share returns the reserves exactly.
/// Rounding remainders of partial withdrawals stay in the pool, unattributed.
pub fn quote_withdraw(
    state: &PoolState,
    shares: i128,
    min_amounts: (i128, i128),
) -> Result<(i128, i128), PoolError> {
    if shares <= 0 {
        return Err(PoolError::ZeroAmount);
    }
    if shares > state.total_shares {
        return Err(PoolError::InsufficientBalance);
    }

    let amount0 = mul_div(state.reserve0, shares, state.total_shares).ok_or(PoolError::Overflow)?;
    let amount1 = mul_div(state.reserve1, shares, state.total_shares).ok_or(PoolError::Overflow)?;

    if amount0 < min_amounts.0 || amount1 < min_amounts.1 {
        return Err(PoolError::SlippageExceeded);
    }
    Ok((amount0, amount1))
}
