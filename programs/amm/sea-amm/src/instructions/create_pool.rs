// Create Pool Instruction
//
// Creates the pool record, both reserve vaults and the LP token mint for
// a token pair. The pool PDA owns the vaults and is the LP mint authority.
// A second call for the same pair fails because the pool address is
// already in use.

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::{constants::*, derivation, errors::*, state::*};

#[derive(Accounts)]
pub struct CreatePool<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    pub token_mint_a: Box<Account<'info, Mint>>,
    pub token_mint_b: Box<Account<'info, Mint>>,

    #[account(
        init,
        payer = authority,
        space = ANCHOR_DISCRIMINATOR + Pool::INIT_SPACE,
        seeds = [
            POOL_SEED,
            token_mint_a.key().as_ref(),
            token_mint_b.key().as_ref(),
        ],
        bump
    )]
    pub pool: Box<Account<'info, Pool>>,

    #[account(
        init,
        payer = authority,
        seeds = [
            TOKEN_VAULT_A_SEED,
            pool.key().as_ref(),
            token_mint_a.key().as_ref(),
        ],
        bump,
        token::mint = token_mint_a,
        token::authority = pool,
    )]
    pub token_vault_a: Box<Account<'info, TokenAccount>>,

    #[account(
        init,
        payer = authority,
        seeds = [
            TOKEN_VAULT_B_SEED,
            pool.key().as_ref(),
            token_mint_b.key().as_ref(),
        ],
        bump,
        token::mint = token_mint_b,
        token::authority = pool,
    )]
    pub token_vault_b: Box<Account<'info, TokenAccount>>,

    #[account(
        init,
        payer = authority,
        seeds = [
            LP_TOKEN_MINT_SEED,
            token_mint_a.key().as_ref(),
            token_mint_b.key().as_ref(),
        ],
        bump,
        mint::decimals = LP_TOKEN_DECIMALS,
        mint::authority = pool,
    )]
    pub lp_token_mint: Box<Account<'info, Mint>>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

impl<'info> CreatePool<'info> {
    pub fn create_pool(&mut self, bumps: &CreatePoolBumps) -> Result<()> {
        let mint_a = self.token_mint_a.key();
        let mint_b = self.token_mint_b.key();

        require!(mint_a != mint_b, AmmError::IdenticalTokenMints);

        // One pool per unordered pair: only the ascending order is accepted
        require!(
            derivation::is_canonical_pair(&mint_a, &mint_b),
            AmmError::NonCanonicalPair
        );

        self.pool.set_inner(Pool {
            bump: bumps.pool,
            authority: self.authority.key(),
            token_mint_a: mint_a,
            token_mint_b: mint_b,
            token_vault_a: self.token_vault_a.key(),
            token_vault_b: self.token_vault_b.key(),
            vault_a_bump: bumps.token_vault_a,
            vault_b_bump: bumps.token_vault_b,
            lp_token_mint: self.lp_token_mint.key(),
            lp_mint_bump: bumps.lp_token_mint,
        });

        msg!("Pool created: {} / {}", mint_a, mint_b);
        msg!("LP mint: {}", self.lp_token_mint.key());

        Ok(())
    }
}
