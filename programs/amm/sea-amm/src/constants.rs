// AMM Program Constants

pub const POOL_SEED: &[u8] = b"pool";
pub const TOKEN_VAULT_A_SEED: &[u8] = b"token-vault-a";
pub const TOKEN_VAULT_B_SEED: &[u8] = b"token-vault-b";
pub const LP_TOKEN_MINT_SEED: &[u8] = b"lp-token-mint";
pub const LP_TOKEN_ACCOUNT_SEED: &[u8] = b"lp-token-account";
pub const LP_TOKEN_DECIMALS: u8 = 6;
pub const ANCHOR_DISCRIMINATOR: usize = 8;
