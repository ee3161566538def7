// Token Movements
//
// SPL token CPIs behind the ledger implementations. Moves out of a vault
// and LP mints are signed by the pool PDA; its seeds are built here from
// the pool record and never pass through instruction code.

use anchor_lang::prelude::*;
use anchor_spl::token::{Burn, Mint, MintTo, Token, TokenAccount, Transfer, burn, mint_to, transfer};

use crate::state::Pool;

// Caller -> vault, signed by the caller
pub fn deposit_to_vault<'info>(
    token_program: &Program<'info, Token>,
    from: &Account<'info, TokenAccount>,
    vault: &Account<'info, TokenAccount>,
    owner: &Signer<'info>,
    amount: u64,
) -> Result<()> {
    let accounts = Transfer {
        from: from.to_account_info(),
        to: vault.to_account_info(),
        authority: owner.to_account_info(),
    };

    transfer(CpiContext::new(token_program.to_account_info(), accounts), amount)
}

// Vault -> caller, signed by the pool
pub fn pay_from_vault<'info>(
    token_program: &Program<'info, Token>,
    vault: &Account<'info, TokenAccount>,
    to: &Account<'info, TokenAccount>,
    pool: &Account<'info, Pool>,
    amount: u64,
) -> Result<()> {
    let signer = pool.signer();
    let seeds = signer.seeds();
    let signer_seeds: &[&[&[u8]]] = &[&seeds];

    let accounts = Transfer {
        from: vault.to_account_info(),
        to: to.to_account_info(),
        authority: pool.to_account_info(),
    };

    transfer(
        CpiContext::new_with_signer(token_program.to_account_info(), accounts, signer_seeds),
        amount,
    )
}

// New LP tokens into a holding, the pool is the mint authority
pub fn mint_to_holding<'info>(
    token_program: &Program<'info, Token>,
    lp_mint: &Account<'info, Mint>,
    holding: &Account<'info, TokenAccount>,
    pool: &Account<'info, Pool>,
    amount: u64,
) -> Result<()> {
    let signer = pool.signer();
    let seeds = signer.seeds();
    let signer_seeds: &[&[&[u8]]] = &[&seeds];

    let accounts = MintTo {
        mint: lp_mint.to_account_info(),
        to: holding.to_account_info(),
        authority: pool.to_account_info(),
    };

    mint_to(
        CpiContext::new_with_signer(token_program.to_account_info(), accounts, signer_seeds),
        amount,
    )
}

// LP tokens out of a holding, signed by its owner
pub fn burn_from_holding<'info>(
    token_program: &Program<'info, Token>,
    lp_mint: &Account<'info, Mint>,
    holding: &Account<'info, TokenAccount>,
    owner: &Signer<'info>,
    amount: u64,
) -> Result<()> {
    let accounts = Burn {
        mint: lp_mint.to_account_info(),
        from: holding.to_account_info(),
        authority: owner.to_account_info(),
    };

    burn(CpiContext::new(token_program.to_account_info(), accounts), amount)
}
