// Pool State

use anchor_lang::prelude::*;

use crate::{constants::*, derivation, errors::*, ledger::Side};

#[account]
#[derive(InitSpace)]
pub struct Pool {
    pub bump: u8,                  // PDA bump for pool
    pub authority: Pubkey,         // Paid for pool creation, no privileges
    pub token_mint_a: Pubkey,      // Lower mint of the pair
    pub token_mint_b: Pubkey,      // Higher mint of the pair
    pub token_vault_a: Pubkey,     // Reserve of token A
    pub token_vault_b: Pubkey,     // Reserve of token B
    pub vault_a_bump: u8,          // PDA bump for vault A
    pub vault_b_bump: u8,          // PDA bump for vault B
    pub lp_token_mint: Pubkey,     // LP token mint
    pub lp_mint_bump: u8,          // PDA bump for LP mint
}

impl Pool {
    pub fn side_of(&self, mint: &Pubkey) -> Result<Side> {
        if *mint == self.token_mint_a {
            Ok(Side::A)
        } else if *mint == self.token_mint_b {
            Ok(Side::B)
        } else {
            err!(AmmError::InvalidAsset)
        }
    }

    pub fn mint(&self, side: Side) -> &Pubkey {
        match side {
            Side::A => &self.token_mint_a,
            Side::B => &self.token_mint_b,
        }
    }

    // The pool key must re-derive from the mints supplied with the
    // instruction, not from the mints stored in the record itself.
    pub fn verify_address(&self, pool_key: &Pubkey, mint_a: &Pubkey, mint_b: &Pubkey) -> Result<()> {
        let expected = derivation::rederive(
            &[POOL_SEED, mint_a.as_ref(), mint_b.as_ref()],
            self.bump,
            &crate::ID,
        );
        derivation::verify_address(expected, pool_key, AmmError::PoolAddressMismatch)
    }

    pub fn verify_vault(&self, side: Side, pool_key: &Pubkey, vault_key: &Pubkey) -> Result<()> {
        let bump = match side {
            Side::A => self.vault_a_bump,
            Side::B => self.vault_b_bump,
        };
        let expected = derivation::rederive(
            &[
                derivation::vault_seed(side),
                pool_key.as_ref(),
                self.mint(side).as_ref(),
            ],
            bump,
            &crate::ID,
        );
        derivation::verify_address(expected, vault_key, AmmError::VaultAddressMismatch)
    }

    pub fn verify_lp_mint(&self, mint_a: &Pubkey, mint_b: &Pubkey, lp_mint_key: &Pubkey) -> Result<()> {
        let expected = derivation::rederive(
            &[LP_TOKEN_MINT_SEED, mint_a.as_ref(), mint_b.as_ref()],
            self.lp_mint_bump,
            &crate::ID,
        );
        derivation::verify_address(expected, lp_mint_key, AmmError::ShareSupplyAddressMismatch)
    }

    // Only the program can build this; it is what lets the pool move
    // vault funds and mint LP tokens.
    pub(crate) fn signer(&self) -> PoolSigner<'_> {
        PoolSigner {
            mint_a: self.token_mint_a.as_ref(),
            mint_b: self.token_mint_b.as_ref(),
            bump: [self.bump],
        }
    }
}

/// Signer seeds of a pool PDA, scoped to that one pool.
pub struct PoolSigner<'a> {
    mint_a: &'a [u8],
    mint_b: &'a [u8],
    bump: [u8; 1],
}

impl<'a> PoolSigner<'a> {
    pub fn seeds(&self) -> [&[u8]; 4] {
        [POOL_SEED, self.mint_a, self.mint_b, &self.bump]
    }
}
