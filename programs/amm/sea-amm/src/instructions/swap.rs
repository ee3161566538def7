// Swap Instruction
//
// Swaps one pool token for the other at the constant-product price.
// No fee is charged; the output is rounded down.

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::{
    helpers::*,
    ledger::{DepositToVault, Side, VaultLedger, WithdrawFromVault},
    operations,
    state::*,
};

#[derive(Accounts)]
pub struct Swap<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    pub pool: Box<Account<'info, Pool>>,

    pub token_mint_a: Box<Account<'info, Mint>>,
    pub token_mint_b: Box<Account<'info, Mint>>,

    // Mint of the token being sold
    pub token_in_mint: Box<Account<'info, Mint>>,

    #[account(
        mut,
        token::mint = token_mint_a,
        token::authority = user,
    )]
    pub user_token_a: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        token::mint = token_mint_b,
        token::authority = user,
    )]
    pub user_token_b: Box<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub token_vault_a: Box<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub token_vault_b: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
}

impl<'info> Swap<'info> {
    pub fn swap(&mut self, amount_in: u64) -> Result<u64> {
        self.verify_accounts()?;

        let side_in = self.pool.side_of(&self.token_in_mint.key())?;

        let amount_out = operations::swap(self, side_in, amount_in)?;

        msg!(
            "Swapped {} {} -> {} {}",
            amount_in,
            side_in,
            amount_out,
            side_in.opposite()
        );

        Ok(amount_out)
    }

    fn verify_accounts(&self) -> Result<()> {
        let pool_key = self.pool.key();

        self.pool.verify_address(
            &pool_key,
            &self.token_mint_a.key(),
            &self.token_mint_b.key(),
        )?;
        self.pool
            .verify_vault(Side::A, &pool_key, &self.token_vault_a.key())?;
        self.pool
            .verify_vault(Side::B, &pool_key, &self.token_vault_b.key())?;

        Ok(())
    }
}

impl<'info> VaultLedger for Swap<'info> {
    fn reserve(&self, side: Side) -> u64 {
        match side {
            Side::A => self.token_vault_a.amount,
            Side::B => self.token_vault_b.amount,
        }
    }
}

impl<'info> DepositToVault for Swap<'info> {
    fn deposit(&mut self, side: Side, amount: u64) -> Result<()> {
        let (from, vault) = match side {
            Side::A => (&self.user_token_a, &self.token_vault_a),
            Side::B => (&self.user_token_b, &self.token_vault_b),
        };

        deposit_to_vault(&self.token_program, from, vault, &self.user, amount)
    }
}

impl<'info> WithdrawFromVault for Swap<'info> {
    fn withdraw(&mut self, side: Side, amount: u64) -> Result<()> {
        let (vault, to) = match side {
            Side::A => (&self.token_vault_a, &self.user_token_a),
            Side::B => (&self.token_vault_b, &self.user_token_b),
        };

        pay_from_vault(&self.token_program, vault, to, &self.pool, amount)
    }
}
