
use anchor_lang::prelude::*;

#[error_code]
pub enum AmmError {
    #[msg("Pool address does not match the address derived from its token mints")]
    PoolAddressMismatch,

    #[msg("Vault address does not match the address derived for this pool")]
    VaultAddressMismatch,

    #[msg("LP token mint address does not match the address derived from the token mints")]
    ShareSupplyAddressMismatch,

    #[msg("Token mints must be different - cannot create pool with same token")]
    IdenticalTokenMints,

    #[msg("Token mints must be supplied in canonical (ascending) order")]
    NonCanonicalPair,

    #[msg("Token not available in pool")]
    InvalidAsset,

    #[msg("Token amount must be greater than zero")]
    ZeroAmount,

    #[msg("Deposit amounts must match the current pool ratio exactly")]
    ImbalancedDeposit,

    #[msg("Deposit too small - no LP tokens to mint")]
    NoSharesMinted,

    #[msg("Withdrawal would return nothing")]
    ZeroWithdrawal,

    #[msg("LP tokens to burn exceed the outstanding supply")]
    InsufficientShares,

    #[msg("Arithmetic overflow occurred")]
    ArithmeticOverflow,

    #[msg("Division by zero attempted")]
    DivisionByZero,
}

// Coarse classification so clients can tell an economic rejection
// from a spoofed or stale account.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Integrity,
    Input,
    Economic,
    Arithmetic,
}

impl AmmError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AmmError::PoolAddressMismatch
            | AmmError::VaultAddressMismatch
            | AmmError::ShareSupplyAddressMismatch => ErrorKind::Integrity,
            AmmError::IdenticalTokenMints
            | AmmError::NonCanonicalPair
            | AmmError::InvalidAsset
            | AmmError::ZeroAmount => ErrorKind::Input,
            AmmError::ImbalancedDeposit
            | AmmError::NoSharesMinted
            | AmmError::ZeroWithdrawal
            | AmmError::InsufficientShares => ErrorKind::Economic,
            AmmError::ArithmeticOverflow | AmmError::DivisionByZero => ErrorKind::Arithmetic,
        }
    }
}
