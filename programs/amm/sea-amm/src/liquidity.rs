// Liquidity Calculations
//
// Share issuance on deposit and payout on redemption. Every division
// rounds down, so rounding dust always stays in the vaults.

use anchor_lang::prelude::*;

use crate::errors::*;

/// Vault balances at the start of an instruction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reserves {
    pub a: u64,
    pub b: u64,
}

impl Reserves {
    pub fn new(a: u64, b: u64) -> Self {
        Self { a, b }
    }

    pub fn is_empty(&self) -> bool {
        self.a == 0 && self.b == 0
    }
}

/// Token amounts paid out for burned LP tokens.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Withdrawal {
    pub amount_a: u64,
    pub amount_b: u64,
}

// A deposit into a non-empty pool must not move the price:
// reserve_a / reserve_b == amount_a / amount_b, compared cross-multiplied.
pub fn check_proportional(reserves: Reserves, amount_a: u64, amount_b: u64) -> Result<()> {
    if reserves.is_empty() {
        return Ok(());
    }

    let lhs = (reserves.a as u128)
        .checked_mul(amount_b as u128)
        .ok_or(AmmError::ArithmeticOverflow)?;
    let rhs = (reserves.b as u128)
        .checked_mul(amount_a as u128)
        .ok_or(AmmError::ArithmeticOverflow)?;

    require!(lhs == rhs, AmmError::ImbalancedDeposit);
    Ok(())
}

/// LP tokens for the first deposit into a pool with no outstanding supply.
///
/// Mints `(amount_a * amount_b)^2`. The result is not on the same scale as
/// later proportional mints and overflows `u64` once `amount_a * amount_b`
/// reaches 2^32, in which case the deposit is rejected.
#[cfg(not(feature = "geometric-bootstrap"))]
pub fn bootstrap_shares(amount_a: u64, amount_b: u64) -> Result<u64> {
    let product = (amount_a as u128)
        .checked_mul(amount_b as u128)
        .ok_or(AmmError::ArithmeticOverflow)?;

    let squared = product
        .checked_mul(product)
        .ok_or(AmmError::ArithmeticOverflow)?;

    u64::try_from(squared).map_err(|_| error!(AmmError::ArithmeticOverflow))
}

/// LP tokens for the first deposit into a pool with no outstanding supply.
///
/// Geometric mean of the two amounts, `floor(sqrt(amount_a * amount_b))`.
#[cfg(feature = "geometric-bootstrap")]
pub fn bootstrap_shares(amount_a: u64, amount_b: u64) -> Result<u64> {
    let product = (amount_a as u128)
        .checked_mul(amount_b as u128)
        .ok_or(AmmError::ArithmeticOverflow)?;

    // sqrt of a u128 always fits in u64
    u64::try_from(isqrt(product)).map_err(|_| error!(AmmError::ArithmeticOverflow))
}

// Newton's method, integer only.
#[cfg(feature = "geometric-bootstrap")]
fn isqrt(n: u128) -> u128 {
    if n < 2 {
        return n;
    }
    let mut x = n;
    let mut y = (x + 1) / 2;
    while y < x {
        x = y;
        y = (x + n / x) / 2;
    }
    x
}

/// LP tokens for a deposit into a pool with outstanding supply:
/// `min(amount_a * supply / reserve_a, amount_b * supply / reserve_b)`.
///
/// Taking the smaller side means neither half of the deposit is credited
/// beyond what it contributes.
pub fn proportional_shares(
    reserves: Reserves,
    lp_supply: u64,
    amount_a: u64,
    amount_b: u64,
) -> Result<u64> {
    let lp_from_a = (amount_a as u128)
        .checked_mul(lp_supply as u128)
        .ok_or(AmmError::ArithmeticOverflow)?
        .checked_div(reserves.a as u128)
        .ok_or(AmmError::DivisionByZero)?;

    let lp_from_b = (amount_b as u128)
        .checked_mul(lp_supply as u128)
        .ok_or(AmmError::ArithmeticOverflow)?
        .checked_div(reserves.b as u128)
        .ok_or(AmmError::DivisionByZero)?;

    let lp_to_mint = std::cmp::min(lp_from_a, lp_from_b);

    u64::try_from(lp_to_mint).map_err(|_| error!(AmmError::ArithmeticOverflow))
}

/// LP tokens minted for depositing `amount_a` and `amount_b`.
pub fn shares_for_deposit(
    reserves: Reserves,
    lp_supply: u64,
    amount_a: u64,
    amount_b: u64,
) -> Result<u64> {
    require!(amount_a > 0 && amount_b > 0, AmmError::ZeroAmount);

    check_proportional(reserves, amount_a, amount_b)?;

    let lp_tokens = if lp_supply == 0 {
        bootstrap_shares(amount_a, amount_b)?
    } else {
        proportional_shares(reserves, lp_supply, amount_a, amount_b)?
    };

    require!(lp_tokens > 0, AmmError::NoSharesMinted);

    Ok(lp_tokens)
}

/// Tokens returned for burning `lp_to_burn` out of `lp_supply`:
/// `reserve * lp_to_burn / lp_supply` for each side.
pub fn withdrawal_amounts(
    reserves: Reserves,
    lp_supply: u64,
    lp_to_burn: u64,
) -> Result<Withdrawal> {
    require!(lp_to_burn > 0, AmmError::ZeroWithdrawal);
    require!(lp_supply > 0, AmmError::DivisionByZero);
    require!(lp_to_burn <= lp_supply, AmmError::InsufficientShares);

    let amount_a = (reserves.a as u128)
        .checked_mul(lp_to_burn as u128)
        .ok_or(AmmError::ArithmeticOverflow)?
        .checked_div(lp_supply as u128)
        .ok_or(AmmError::DivisionByZero)? as u64;

    let amount_b = (reserves.b as u128)
        .checked_mul(lp_to_burn as u128)
        .ok_or(AmmError::ArithmeticOverflow)?
        .checked_div(lp_supply as u128)
        .ok_or(AmmError::DivisionByZero)? as u64;

    require!(amount_a > 0 || amount_b > 0, AmmError::ZeroWithdrawal);

    Ok(Withdrawal { amount_a, amount_b })
}
