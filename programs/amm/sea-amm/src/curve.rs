// Constant Product Pricing
//
// dy = y * dx / (x + dx), rounded down. Flooring leaves the remainder in
// the pool, so x * y never decreases across a swap. No fee is charged.

use anchor_lang::prelude::*;

use crate::errors::*;

/// Output amount for swapping `amount_in` into a pool holding
/// `reserve_in` of the input asset and `reserve_out` of the output asset.
pub fn swap_output(reserve_in: u64, reserve_out: u64, amount_in: u64) -> Result<u64> {
    require!(amount_in > 0, AmmError::ZeroAmount);

    // The input vault must still fit in a token amount after the swap
    let new_reserve_in = reserve_in
        .checked_add(amount_in)
        .ok_or(AmmError::ArithmeticOverflow)?;

    let numerator = (reserve_out as u128)
        .checked_mul(amount_in as u128)
        .ok_or(AmmError::ArithmeticOverflow)?;

    let amount_out = numerator
        .checked_div(new_reserve_in as u128)
        .ok_or(AmmError::DivisionByZero)?;

    // amount_out <= reserve_out, so this never fails for valid reserves
    u64::try_from(amount_out).map_err(|_| error!(AmmError::ArithmeticOverflow))
}
