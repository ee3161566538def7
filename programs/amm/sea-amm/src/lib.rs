// Sea AMM Program
//
// Two-asset constant product pool (x * y = k) without fees.
//
// Instructions:
// - create_pool: Create the pool, its vaults and LP mint for a token pair
// - swap: Sell one pool token for the other
// - add_liquidity: Deposit both tokens at the pool ratio, receive LP tokens
// - remove_liquidity: Burn all held LP tokens, receive both tokens

use anchor_lang::prelude::*;

pub mod constants;
pub mod curve;
pub mod derivation;
pub mod errors;
pub mod helpers;
pub mod instructions;
pub mod ledger;
pub mod liquidity;
pub mod operations;
pub mod state;

use instructions::*;
use liquidity::Withdrawal;

declare_id!("5eAmmCPq3Ry6xVvXrHqQfBQ2uQb8dSXzH9hE1uWbtGkK");

#[program]
pub mod sea_amm {
    use super::*;

    pub fn create_pool(ctx: Context<CreatePool>) -> Result<()> {
        ctx.accounts.create_pool(&ctx.bumps)
    }

    pub fn swap(ctx: Context<Swap>, amount_in: u64) -> Result<u64> {
        ctx.accounts.swap(amount_in)
    }

    pub fn add_liquidity(ctx: Context<AddLiquidity>, amount_a: u64, amount_b: u64) -> Result<u64> {
        ctx.accounts.add_liquidity(amount_a, amount_b)
    }

    pub fn remove_liquidity(ctx: Context<RemoveLiquidity>) -> Result<Withdrawal> {
        ctx.accounts.remove_liquidity()
    }
}
