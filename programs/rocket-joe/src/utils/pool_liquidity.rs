use anchor_lang::prelude::*;
use ruint::aliases::{U256, U512};

use crate::errors::RocketJoeError;

// L = Δx * sqrt(P) * sqrt(P_upper) / (sqrt(P_upper) - sqrt(P))
fn get_initial_liquidity_from_delta_base(
    base_amount: u64,
    sqrt_max_price: u128,
    sqrt_price: u128,
) -> Result<U512> {
    let delta = sqrt_max_price
        .checked_sub(sqrt_price)
        .ok_or(RocketJoeError::InvalidPrice)?;
    let price_delta = U512::from(delta);

    let prod = U512::from(base_amount)
        .checked_mul(U512::from(sqrt_price))
        .ok_or(RocketJoeError::MathOverflow)?
        .checked_mul(U512::from(sqrt_max_price))
        .ok_or(RocketJoeError::MathOverflow)?;

    prod.checked_div(price_delta)
        .ok_or(error!(RocketJoeError::DivisionByZero))
}

// L = Δy * 2^128 / (sqrt(P) - sqrt(P_lower))
fn get_initial_liquidity_from_delta_quote(
    quote_amount: u64,
    sqrt_min_price: u128,
    sqrt_price: u128,
) -> Result<U256> {
    let delta = sqrt_price
        .checked_sub(sqrt_min_price)
        .ok_or(RocketJoeError::InvalidPrice)?;

    let quote_shifted = U256::from(quote_amount)
        .checked_shl(128)
        .ok_or(RocketJoeError::MathOverflow)?;

    quote_shifted
        .checked_div(U256::from(delta))
        .ok_or(error!(RocketJoeError::DivisionByZero))
}

/// Liquidity minted by depositing both amounts at `sqrt_price`, bounded by the
/// smaller of the two sides
pub fn get_liquidity_for_adding_liquidity(
    base_amount: u64,
    quote_amount: u64,
    sqrt_price: u128,
    min_sqrt_price: u128,
    max_sqrt_price: u128,
) -> Result<u128> {
    let liquidity_from_base =
        get_initial_liquidity_from_delta_base(base_amount, max_sqrt_price, sqrt_price)?;
    let liquidity_from_quote = U512::from(get_initial_liquidity_from_delta_quote(
        quote_amount,
        min_sqrt_price,
        sqrt_price,
    )?);

    let liquidity = if liquidity_from_base > liquidity_from_quote {
        liquidity_from_quote
    } else {
        liquidity_from_base
    };

    u128::try_from(liquidity).map_err(|_| error!(RocketJoeError::TypeCastFailed))
}

/// Q64.64 square root of `quote_amount / base_amount`
pub fn get_sqrt_price_from_amounts(base_amount: u64, quote_amount: u64) -> Result<u128> {
    require!(base_amount > 0, RocketJoeError::DivisionByZero);

    let ratio = U256::from(quote_amount)
        .checked_shl(128)
        .ok_or(RocketJoeError::MathOverflow)?
        / U256::from(base_amount);

    u128::try_from(isqrt(ratio)).map_err(|_| error!(RocketJoeError::TypeCastFailed))
}

/// Pool starting price, rejected when the config can't host it
pub fn get_initial_sqrt_price(
    base_amount: u64,
    quote_amount: u64,
    min_sqrt_price: u128,
    max_sqrt_price: u128,
) -> Result<u128> {
    let sqrt_price = get_sqrt_price_from_amounts(base_amount, quote_amount)?;
    require!(
        sqrt_price > min_sqrt_price && sqrt_price < max_sqrt_price,
        RocketJoeError::InvalidPrice
    );

    Ok(sqrt_price)
}

// Newton's method, floor(sqrt(n))
fn isqrt(n: U256) -> U256 {
    if n < U256::from(2u8) {
        return n;
    }

    let mut x = n;
    let mut y = (x + U256::from(1u8)) >> 1usize;
    while y < x {
        x = y;
        y = (x + n / x) >> 1usize;
    }
    x
}
