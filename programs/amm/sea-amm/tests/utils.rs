// Test utilities for the Sea AMM program

#![cfg(feature = "test-sbf")]
#![allow(dead_code)]

use litesvm::{types::TransactionResult, LiteSVM};
use litesvm_token::{CreateAssociatedTokenAccount, CreateMint, MintTo, get_spl_account};
use sea_amm::constants::{
    LP_TOKEN_ACCOUNT_SEED, LP_TOKEN_MINT_SEED, POOL_SEED, TOKEN_VAULT_A_SEED, TOKEN_VAULT_B_SEED,
};
use solana_sdk::{
    hash::hash,
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    signature::{Keypair, Signer},
    transaction::Transaction,
};

// Program ID matching declare_id! (sea_amm)
pub const AMM_PROGRAM_ID: Pubkey = Pubkey::new_from_array(sea_amm::ID.to_bytes());

// Standard program IDs
pub const TOKEN_PROGRAM_ID: Pubkey = spl_token::ID;
use solana_system_interface::program::ID as system_program;

// Token decimals
pub const DECIMALS: u8 = 6;

// Build Anchor instruction discriminator
// Formula: first 8 bytes of sha256("global:method_name")
pub fn anchor_discriminator(method: &str) -> [u8; 8] {
    let preimage = format!("global:{}", method);
    let hash_result = hash(preimage.as_bytes());
    let mut discriminator = [0u8; 8];
    discriminator.copy_from_slice(&hash_result.to_bytes()[..8]);
    discriminator
}

// Setup LiteSVM with AMM program
pub fn setup_svm() -> LiteSVM {
    let mut svm = LiteSVM::new();
    let program_bytes = include_bytes!("../../../../target/deploy/sea_amm.so");
    let _ = svm.add_program(AMM_PROGRAM_ID, program_bytes);
    svm
}

// Create and fund account
pub fn create_funded_account(svm: &mut LiteSVM, lamports: u64) -> Keypair {
    let keypair = Keypair::new();
    svm.airdrop(&keypair.pubkey(), lamports)
        .expect("Airdrop should succeed");
    keypair
}

// Two fresh mints, returned in ascending (pool) order
pub fn create_ordered_mints(svm: &mut LiteSVM, authority: &Keypair) -> (Pubkey, Pubkey) {
    let first = CreateMint::new(svm, authority)
        .authority(&authority.pubkey())
        .decimals(DECIMALS)
        .send()
        .expect("Failed to create mint");
    let second = CreateMint::new(svm, authority)
        .authority(&authority.pubkey())
        .decimals(DECIMALS)
        .send()
        .expect("Failed to create mint");

    if first < second {
        (first, second)
    } else {
        (second, first)
    }
}

// Token account for `owner` holding `amount` of `mint`
pub fn create_funded_token_account(
    svm: &mut LiteSVM,
    mint_authority: &Keypair,
    owner: &Keypair,
    mint: &Pubkey,
    amount: u64,
) -> Pubkey {
    let account = CreateAssociatedTokenAccount::new(svm, owner, mint)
        .owner(&owner.pubkey())
        .send()
        .expect("Failed to create token account");

    if amount > 0 {
        MintTo::new(svm, mint_authority, mint, &account, amount)
            .owner(mint_authority)
            .send()
            .expect("Failed to mint tokens");
    }

    account
}

pub fn token_balance(svm: &LiteSVM, account: &Pubkey) -> u64 {
    let account: spl_token::state::Account =
        get_spl_account(svm, account).expect("Token account should exist");
    account.amount
}

pub fn mint_supply(svm: &LiteSVM, mint: &Pubkey) -> u64 {
    let mint: spl_token::state::Mint = get_spl_account(svm, mint).expect("Mint should exist");
    mint.supply
}

pub fn send(svm: &mut LiteSVM, ix: Instruction, payer: &Keypair) -> TransactionResult {
    let tx = Transaction::new_signed_with_payer(
        &[ix],
        Some(&payer.pubkey()),
        &[payer],
        svm.latest_blockhash(),
    );
    svm.send_transaction(tx)
}

// Program error code as it appears in a failed transaction
pub fn assert_custom_error(result: &TransactionResult, code: u32) {
    let error = format!("{:?}", result.as_ref().err().expect("Transaction should fail"));
    assert!(
        error.contains(&format!("Custom({})", code)),
        "Expected custom error {}, got {}",
        code,
        error
    );
}

// Derive pool PDA
pub fn derive_pool_pda(token_mint_a: &Pubkey, token_mint_b: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[POOL_SEED, token_mint_a.as_ref(), token_mint_b.as_ref()],
        &AMM_PROGRAM_ID,
    )
}

// Derive reserve vault PDAs
pub fn derive_vault_pdas(
    pool: &Pubkey,
    token_mint_a: &Pubkey,
    token_mint_b: &Pubkey,
) -> (Pubkey, Pubkey) {
    let (vault_a, _) = Pubkey::find_program_address(
        &[TOKEN_VAULT_A_SEED, pool.as_ref(), token_mint_a.as_ref()],
        &AMM_PROGRAM_ID,
    );
    let (vault_b, _) = Pubkey::find_program_address(
        &[TOKEN_VAULT_B_SEED, pool.as_ref(), token_mint_b.as_ref()],
        &AMM_PROGRAM_ID,
    );
    (vault_a, vault_b)
}

// Derive LP mint PDA
pub fn derive_lp_mint_pda(token_mint_a: &Pubkey, token_mint_b: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[LP_TOKEN_MINT_SEED, token_mint_a.as_ref(), token_mint_b.as_ref()],
        &AMM_PROGRAM_ID,
    )
}

// Derive a user's LP token account PDA
pub fn derive_lp_token_pda(lp_token_mint: &Pubkey, user: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[LP_TOKEN_ACCOUNT_SEED, lp_token_mint.as_ref(), user.as_ref()],
        &AMM_PROGRAM_ID,
    )
}

// Every pool-owned address for a pair
pub struct PoolAddresses {
    pub pool: Pubkey,
    pub token_vault_a: Pubkey,
    pub token_vault_b: Pubkey,
    pub lp_token_mint: Pubkey,
}

impl PoolAddresses {
    pub fn derive(token_mint_a: &Pubkey, token_mint_b: &Pubkey) -> Self {
        let (pool, _) = derive_pool_pda(token_mint_a, token_mint_b);
        let (token_vault_a, token_vault_b) = derive_vault_pdas(&pool, token_mint_a, token_mint_b);
        let (lp_token_mint, _) = derive_lp_mint_pda(token_mint_a, token_mint_b);

        Self {
            pool,
            token_vault_a,
            token_vault_b,
            lp_token_mint,
        }
    }
}

// Build create_pool instruction
pub fn build_create_pool_ix(
    authority: &Pubkey,
    token_mint_a: &Pubkey,
    token_mint_b: &Pubkey,
) -> Instruction {
    let addresses = PoolAddresses::derive(token_mint_a, token_mint_b);

    Instruction {
        program_id: AMM_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*authority, true),
            AccountMeta::new_readonly(*token_mint_a, false),
            AccountMeta::new_readonly(*token_mint_b, false),
            AccountMeta::new(addresses.pool, false),
            AccountMeta::new(addresses.token_vault_a, false),
            AccountMeta::new(addresses.token_vault_b, false),
            AccountMeta::new(addresses.lp_token_mint, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data: anchor_discriminator("create_pool").to_vec(),
    }
}

// Build swap instruction
pub fn build_swap_ix(
    user: &Pubkey,
    token_mint_a: &Pubkey,
    token_mint_b: &Pubkey,
    token_in_mint: &Pubkey,
    user_token_a: &Pubkey,
    user_token_b: &Pubkey,
    amount_in: u64,
) -> Instruction {
    let addresses = PoolAddresses::derive(token_mint_a, token_mint_b);
    build_swap_ix_with_vaults(
        user,
        token_mint_a,
        token_mint_b,
        token_in_mint,
        user_token_a,
        user_token_b,
        &addresses.token_vault_a,
        &addresses.token_vault_b,
        amount_in,
    )
}

// Build swap instruction against explicit vault accounts
#[allow(clippy::too_many_arguments)]
pub fn build_swap_ix_with_vaults(
    user: &Pubkey,
    token_mint_a: &Pubkey,
    token_mint_b: &Pubkey,
    token_in_mint: &Pubkey,
    user_token_a: &Pubkey,
    user_token_b: &Pubkey,
    token_vault_a: &Pubkey,
    token_vault_b: &Pubkey,
    amount_in: u64,
) -> Instruction {
    let (pool, _) = derive_pool_pda(token_mint_a, token_mint_b);

    let mut data = anchor_discriminator("swap").to_vec();
    data.extend_from_slice(&amount_in.to_le_bytes());

    Instruction {
        program_id: AMM_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*user, true),
            AccountMeta::new_readonly(pool, false),
            AccountMeta::new_readonly(*token_mint_a, false),
            AccountMeta::new_readonly(*token_mint_b, false),
            AccountMeta::new_readonly(*token_in_mint, false),
            AccountMeta::new(*user_token_a, false),
            AccountMeta::new(*user_token_b, false),
            AccountMeta::new(*token_vault_a, false),
            AccountMeta::new(*token_vault_b, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
        ],
        data,
    }
}

// Build add_liquidity instruction
pub fn build_add_liquidity_ix(
    user: &Pubkey,
    token_mint_a: &Pubkey,
    token_mint_b: &Pubkey,
    user_token_a: &Pubkey,
    user_token_b: &Pubkey,
    amount_a: u64,
    amount_b: u64,
) -> Instruction {
    let addresses = PoolAddresses::derive(token_mint_a, token_mint_b);
    let (user_lp_token, _) = derive_lp_token_pda(&addresses.lp_token_mint, user);

    let mut data = anchor_discriminator("add_liquidity").to_vec();
    data.extend_from_slice(&amount_a.to_le_bytes());
    data.extend_from_slice(&amount_b.to_le_bytes());

    Instruction {
        program_id: AMM_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*user, true),
            AccountMeta::new_readonly(addresses.pool, false),
            AccountMeta::new_readonly(*token_mint_a, false),
            AccountMeta::new_readonly(*token_mint_b, false),
            AccountMeta::new(*user_token_a, false),
            AccountMeta::new(*user_token_b, false),
            AccountMeta::new(addresses.token_vault_a, false),
            AccountMeta::new(addresses.token_vault_b, false),
            AccountMeta::new(addresses.lp_token_mint, false),
            AccountMeta::new(user_lp_token, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data,
    }
}

// Build remove_liquidity instruction
pub fn build_remove_liquidity_ix(
    user: &Pubkey,
    token_mint_a: &Pubkey,
    token_mint_b: &Pubkey,
    user_token_a: &Pubkey,
    user_token_b: &Pubkey,
) -> Instruction {
    let addresses = PoolAddresses::derive(token_mint_a, token_mint_b);
    let (user_lp_token, _) = derive_lp_token_pda(&addresses.lp_token_mint, user);

    Instruction {
        program_id: AMM_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*user, true),
            AccountMeta::new_readonly(addresses.pool, false),
            AccountMeta::new_readonly(*token_mint_a, false),
            AccountMeta::new_readonly(*token_mint_b, false),
            AccountMeta::new(*user_token_a, false),
            AccountMeta::new(*user_token_b, false),
            AccountMeta::new(addresses.token_vault_a, false),
            AccountMeta::new(addresses.token_vault_b, false),
            AccountMeta::new(addresses.lp_token_mint, false),
            AccountMeta::new(user_lp_token, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
        ],
        data: anchor_discriminator("remove_liquidity").to_vec(),
    }
}
