// Pool Operations
//
// Validate -> Compute -> Apply for each instruction. Reserves and supply
// are read once up front, and every check and every calculation finishes
// before the first balance moves. If a transfer fails midway the runtime
// discards the whole instruction.

use anchor_lang::prelude::*;

use crate::{
    curve,
    errors::*,
    ledger::{BurnShares, DepositToVault, MintShares, Side, VaultLedger, WithdrawFromVault},
    liquidity::{self, Reserves, Withdrawal},
};

fn reserves<L: VaultLedger>(ledger: &L) -> Reserves {
    Reserves::new(ledger.reserve(Side::A), ledger.reserve(Side::B))
}

/// Swaps `amount_in` of `side_in` for the other asset. Returns the amount paid out.
pub fn swap<L: DepositToVault + WithdrawFromVault>(
    ledger: &mut L,
    side_in: Side,
    amount_in: u64,
) -> Result<u64> {
    let reserve_in = ledger.reserve(side_in);
    let reserve_out = ledger.reserve(side_in.opposite());

    let amount_out = curve::swap_output(reserve_in, reserve_out, amount_in)?;

    ledger.deposit(side_in, amount_in)?;
    ledger.withdraw(side_in.opposite(), amount_out)?;

    Ok(amount_out)
}

/// Deposits both assets in the current pool ratio. Returns the LP tokens minted.
pub fn add_liquidity<L: DepositToVault + MintShares>(
    ledger: &mut L,
    amount_a: u64,
    amount_b: u64,
) -> Result<u64> {
    let reserves = reserves(ledger);
    let lp_supply = ledger.share_supply();

    let lp_tokens = liquidity::shares_for_deposit(reserves, lp_supply, amount_a, amount_b)?;

    // Post-deposit balances and supply must stay representable
    lp_supply
        .checked_add(lp_tokens)
        .ok_or(AmmError::ArithmeticOverflow)?;
    reserves
        .a
        .checked_add(amount_a)
        .ok_or(AmmError::ArithmeticOverflow)?;
    reserves
        .b
        .checked_add(amount_b)
        .ok_or(AmmError::ArithmeticOverflow)?;

    ledger.deposit(Side::A, amount_a)?;
    ledger.deposit(Side::B, amount_b)?;
    ledger.mint_shares(lp_tokens)?;

    Ok(lp_tokens)
}

/// Burns `lp_to_burn` of the caller's LP tokens for a proportional share of both reserves.
pub fn remove_liquidity<L: WithdrawFromVault + BurnShares>(
    ledger: &mut L,
    lp_to_burn: u64,
) -> Result<Withdrawal> {
    let reserves = reserves(ledger);
    let lp_supply = ledger.share_supply();

    require!(lp_to_burn <= ledger.holding(), AmmError::InsufficientShares);

    let withdrawal = liquidity::withdrawal_amounts(reserves, lp_supply, lp_to_burn)?;

    ledger.burn_shares(lp_to_burn)?;
    ledger.withdraw(Side::A, withdrawal.amount_a)?;
    ledger.withdraw(Side::B, withdrawal.amount_b)?;

    Ok(withdrawal)
}

/// Redeems the caller's whole LP balance.
pub fn remove_all_liquidity<L: WithdrawFromVault + BurnShares>(
    ledger: &mut L,
) -> Result<Withdrawal> {
    let holding = ledger.holding();
    remove_liquidity(ledger, holding)
}
