// Remove Liquidity Instruction
//
// Burns the caller's entire LP balance and pays out the proportional share
// of both reserves. Payouts are rounded down.

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::{
    constants::*,
    helpers::*,
    ledger::{BurnShares, ShareLedger, Side, VaultLedger, WithdrawFromVault},
    liquidity::Withdrawal,
    operations,
    state::*,
};

#[derive(Accounts)]
pub struct RemoveLiquidity<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    pub pool: Box<Account<'info, Pool>>,

    pub token_mint_a: Box<Account<'info, Mint>>,
    pub token_mint_b: Box<Account<'info, Mint>>,

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

    #[account(mut)]
    pub lp_token_mint: Box<Account<'info, Mint>>,

    #[account(
        mut,
        seeds = [
            LP_TOKEN_ACCOUNT_SEED,
            lp_token_mint.key().as_ref(),
            user.key().as_ref(),
        ],
        bump,
        token::mint = lp_token_mint,
        token::authority = user,
    )]
    pub user_lp_token: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
}

impl<'info> RemoveLiquidity<'info> {
    pub fn remove_liquidity(&mut self) -> Result<Withdrawal> {
        self.verify_accounts()?;

        let lp_tokens = self.user_lp_token.amount;
        let withdrawal = operations::remove_all_liquidity(self)?;

        msg!(
            "Withdrawn: {} LP -> {} A, {} B",
            lp_tokens,
            withdrawal.amount_a,
            withdrawal.amount_b
        );

        Ok(withdrawal)
    }

    fn verify_accounts(&self) -> Result<()> {
        let pool_key = self.pool.key();
        let mint_a = self.token_mint_a.key();
        let mint_b = self.token_mint_b.key();

        self.pool.verify_address(&pool_key, &mint_a, &mint_b)?;
        self.pool.verify_lp_mint(&mint_a, &mint_b, &self.lp_token_mint.key())?;
        self.pool
            .verify_vault(Side::A, &pool_key, &self.token_vault_a.key())?;
        self.pool
            .verify_vault(Side::B, &pool_key, &self.token_vault_b.key())?;

        Ok(())
    }
}

impl<'info> VaultLedger for RemoveLiquidity<'info> {
    fn reserve(&self, side: Side) -> u64 {
        match side {
            Side::A => self.token_vault_a.amount,
            Side::B => self.token_vault_b.amount,
        }
    }
}

impl<'info> WithdrawFromVault for RemoveLiquidity<'info> {
    fn withdraw(&mut self, side: Side, amount: u64) -> Result<()> {
        let (vault, to) = match side {
            Side::A => (&self.token_vault_a, &self.user_token_a),
            Side::B => (&self.token_vault_b, &self.user_token_b),
        };

        pay_from_vault(&self.token_program, vault, to, &self.pool, amount)
    }
}

impl<'info> ShareLedger for RemoveLiquidity<'info> {
    fn share_supply(&self) -> u64 {
        self.lp_token_mint.supply
    }

    fn holding(&self) -> u64 {
        self.user_lp_token.amount
    }
}

impl<'info> BurnShares for RemoveLiquidity<'info> {
    fn burn_shares(&mut self, amount: u64) -> Result<()> {
        burn_from_holding(
            &self.token_program,
            &self.lp_token_mint,
            &self.user_lp_token,
            &self.user,
            amount,
        )
    }
}
