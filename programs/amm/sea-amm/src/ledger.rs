// Balance-moving capabilities the core consumes.
//
// Each instruction context implements the capabilities it holds accounts
// for, over SPL token CPIs; tests implement them in memory. Balances read
// through a ledger are the values at the start of the current instruction.

use anchor_lang::prelude::*;
use anchor_lang::prelude::borsh;

/// One of the pool's two assets.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::A => write!(f, "A"),
            Side::B => write!(f, "B"),
        }
    }
}

/// Read access to the pool's reserve vaults.
pub trait VaultLedger {
    fn reserve(&self, side: Side) -> u64;
}

pub trait DepositToVault: VaultLedger {
    /// Move `amount` of `side` from the caller into the vault, signed by the caller.
    fn deposit(&mut self, side: Side, amount: u64) -> Result<()>;
}

pub trait WithdrawFromVault: VaultLedger {
    /// Move `amount` of `side` from the vault to the caller, signed by the pool.
    fn withdraw(&mut self, side: Side, amount: u64) -> Result<()>;
}

/// Read access to the LP token supply and the caller's LP balance.
pub trait ShareLedger {
    fn share_supply(&self) -> u64;
    fn holding(&self) -> u64;
}

pub trait MintShares: ShareLedger {
    fn mint_shares(&mut self, amount: u64) -> Result<()>;
}

pub trait BurnShares: ShareLedger {
    fn burn_shares(&mut self, amount: u64) -> Result<()>;
}
