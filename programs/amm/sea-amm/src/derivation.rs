// Address Derivation
//
// Every pool-owned record lives at a program-derived address computed from
// a fixed seed. A handle passed into an instruction is trusted only after
// its address has been recomputed from the seed and compared.

use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, ledger::Side};

// Lookups below search for the canonical bump and are meant for clients
// building instructions. On-chain checks use `rederive` with the bump
// stored in the pool record.

/// Orders two mints ascending by their bytes. A pool is keyed by its
/// mints in this order, so each unordered pair has one pool address.
pub fn canonical_pair(a: Pubkey, b: Pubkey) -> (Pubkey, Pubkey) {
    if a.to_bytes() <= b.to_bytes() {
        (a, b)
    } else {
        (b, a)
    }
}

pub fn is_canonical_pair(a: &Pubkey, b: &Pubkey) -> bool {
    a.to_bytes() < b.to_bytes()
}

pub fn pool_address(program_id: &Pubkey, mint_a: &Pubkey, mint_b: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[POOL_SEED, mint_a.as_ref(), mint_b.as_ref()], program_id)
}

pub fn vault_seed(side: Side) -> &'static [u8] {
    match side {
        Side::A => TOKEN_VAULT_A_SEED,
        Side::B => TOKEN_VAULT_B_SEED,
    }
}

pub fn vault_address(
    program_id: &Pubkey,
    side: Side,
    pool: &Pubkey,
    mint: &Pubkey,
) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[vault_seed(side), pool.as_ref(), mint.as_ref()], program_id)
}

pub fn lp_mint_address(program_id: &Pubkey, mint_a: &Pubkey, mint_b: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[LP_TOKEN_MINT_SEED, mint_a.as_ref(), mint_b.as_ref()],
        program_id,
    )
}

pub fn lp_holding_address(program_id: &Pubkey, lp_mint: &Pubkey, user: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[LP_TOKEN_ACCOUNT_SEED, lp_mint.as_ref(), user.as_ref()],
        program_id,
    )
}

/// Recomputes an address from its seeds and a known bump.
/// `None` if the seeds and bump land on the curve.
pub fn rederive(seeds: &[&[u8]], bump: u8, program_id: &Pubkey) -> Option<Pubkey> {
    let bump = [bump];
    let mut with_bump: Vec<&[u8]> = seeds.to_vec();
    with_bump.push(&bump);
    Pubkey::create_program_address(&with_bump, program_id).ok()
}

pub fn verify_address(expected: Option<Pubkey>, actual: &Pubkey, error: AmmError) -> Result<()> {
    match expected {
        Some(expected) if expected == *actual => Ok(()),
        _ => Err(error.into()),
    }
}
