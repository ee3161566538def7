// Add Liquidity Instruction
//
// Deposits both tokens in the exact current pool ratio and mints LP tokens.
// First deposit: LP supply bootstrapped from the deposit amounts
// Subsequent: LP proportional to pool share

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::{
    constants::*,
    helpers::*,
    ledger::{DepositToVault, MintShares, ShareLedger, Side, VaultLedger},
    operations,
    state::*,
};

#[derive(Accounts)]
pub struct AddLiquidity<'info> {
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
        init_if_needed,
        payer = user,
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
    pub system_program: Program<'info, System>,
}

impl<'info> AddLiquidity<'info> {
    pub fn add_liquidity(&mut self, amount_a: u64, amount_b: u64) -> Result<u64> {
        self.verify_accounts()?;

        let lp_tokens = operations::add_liquidity(self, amount_a, amount_b)?;

        msg!("Deposited: {} A, {} B -> {} LP", amount_a, amount_b, lp_tokens);

        Ok(lp_tokens)
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

impl<'info> VaultLedger for AddLiquidity<'info> {
    fn reserve(&self, side: Side) -> u64 {
        match side {
            Side::A => self.token_vault_a.amount,
            Side::B => self.token_vault_b.amount,
        }
    }
}

impl<'info> DepositToVault for AddLiquidity<'info> {
    fn deposit(&mut self, side: Side, amount: u64) -> Result<()> {
        let (from, vault) = match side {
            Side::A => (&self.user_token_a, &self.token_vault_a),
            Side::B => (&self.user_token_b, &self.token_vault_b),
        };

        deposit_to_vault(&self.token_program, from, vault, &self.user, amount)
    }
}

impl<'info> ShareLedger for AddLiquidity<'info> {
    fn share_supply(&self) -> u64 {
        self.lp_token_mint.supply
    }

    fn holding(&self) -> u64 {
        self.user_lp_token.amount
    }
}

impl<'info> MintShares for AddLiquidity<'info> {
    fn mint_shares(&mut self, amount: u64) -> Result<()> {
        mint_to_holding(
            &self.token_program,
            &self.lp_token_mint,
            &self.user_lp_token,
            &self.pool,
            amount,
        )
    }
}
