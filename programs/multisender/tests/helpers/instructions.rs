//! Instruction builders for Mollusk tests
//!
//! NOTE: This is written for mollusk-svm 0.5.1 with solana-sdk 2.2
//! All imports from solana_sdk::*, not modular crates

use {
    solana_sdk::{
        instruction::{AccountMeta, Instruction},
        pubkey::Pubkey,
        system_program,
    },
    spl_associated_token_account,
};

/// Program ID - must match lib.rs
pub const PROGRAM_ID: Pubkey = solana_sdk::pubkey!("Snd21oQjthsY6gjB5Yu9XbnZRyNqoRa29oRUQyFVVfT");

// Anchor discriminators (first 8 bytes of sha256("global:function_name"))
// These must match the IDL/program
pub const DISCRIMINATOR_CREATE_MULTISENDER: [u8; 8] = [0x61, 0xd7, 0x75, 0xea, 0x93, 0xc5, 0x55, 0x0d];
pub const DISCRIMINATOR_SET_FEE_RATE: [u8; 8] = [0x35, 0xf3, 0x89, 0x41, 0x08, 0x8c, 0x9e, 0x06];
pub const DISCRIMINATOR_SET_FEE_COLLECTOR: [u8; 8] = [0x8f, 0x2e, 0x0a, 0x71, 0x79, 0x9d, 0xf5, 0xa6];
pub const DISCRIMINATOR_TRANSFER_OWNERSHIP: [u8; 8] = [0x41, 0xb1, 0xd7, 0x49, 0x35, 0x2d, 0x63, 0x2f];
pub const DISCRIMINATOR_ACCEPT_OWNERSHIP: [u8; 8] = [0xac, 0x17, 0x2b, 0x0d, 0xee, 0xd5, 0x55, 0x96];
pub const DISCRIMINATOR_ADD_VIP: [u8; 8] = [0xad, 0x78, 0x14, 0x99, 0xe1, 0x8f, 0xab, 0xe9];
pub const DISCRIMINATOR_REMOVE_VIP: [u8; 8] = [0xd9, 0x72, 0xd4, 0x81, 0x44, 0x69, 0x6c, 0x19];
pub const DISCRIMINATOR_SEND_NATIVE: [u8; 8] = [0x55, 0x37, 0x22, 0xcc, 0xfd, 0x0a, 0xc7, 0xb6];
pub const DISCRIMINATOR_SEND_TOKENS: [u8; 8] = [0x34, 0xdf, 0xb1, 0xeb, 0x87, 0xab, 0x49, 0x60];
pub const DISCRIMINATOR_SEND_TOKENS_WITH_FEE: [u8; 8] = [0xd4, 0xce, 0x09, 0xbe, 0x55, 0xfc, 0x85, 0x66];
pub const DISCRIMINATOR_EMERGENCY_WITHDRAW: [u8; 8] = [0xef, 0x2d, 0xcb, 0x40, 0x96, 0x49, 0xda, 0x5c];
pub const DISCRIMINATOR_EMERGENCY_WITHDRAW_NATIVE: [u8; 8] = [0x9a, 0xd1, 0x27, 0xa4, 0x4d, 0xc6, 0x5f, 0xff];

/// Derive multisender config PDA for a salt
pub fn derive_config(salt: &[u8; 32]) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[b"multisender", salt.as_ref()], &PROGRAM_ID)
}

/// Derive vip status PDA
pub fn derive_vip_status(config: &Pubkey, member: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[b"vip", config.as_ref(), member.as_ref()],
        &PROGRAM_ID,
    )
}

/// Derive vault address (ATA owned by the config PDA, classic SPL Token)
pub fn derive_vault(config: &Pubkey, mint: &Pubkey) -> Pubkey {
    spl_associated_token_account::get_associated_token_address(config, mint)
}

/// Derive vault address for a specific token program
pub fn derive_vault_with_program(config: &Pubkey, mint: &Pubkey, token_program: &Pubkey) -> Pubkey {
    spl_associated_token_account::get_associated_token_address_with_program_id(
        config,
        mint,
        token_program,
    )
}

/// Serialize a Vec<u64> in borsh layout (4-byte LE length prefix)
fn push_amounts(data: &mut Vec<u8>, amounts: &[u64]) {
    data.extend_from_slice(&(amounts.len() as u32).to_le_bytes());
    for amount in amounts {
        data.extend_from_slice(&amount.to_le_bytes());
    }
}

/// Serialize a Vec<Pubkey> in borsh layout (4-byte LE length prefix)
fn push_pubkeys(data: &mut Vec<u8>, keys: &[Pubkey]) {
    data.extend_from_slice(&(keys.len() as u32).to_le_bytes());
    for key in keys {
        data.extend_from_slice(&key.to_bytes());
    }
}

/// Build create_multisender instruction
///
/// Accounts:
/// 0. config (writable) - PDA, init_if_needed
/// 1. payer (writable, signer)
/// 2. system_program
pub fn build_create_multisender(
    config: Pubkey,
    payer: Pubkey,
    salt: [u8; 32],
    fee_collector: Pubkey,
) -> Instruction {
    let mut data = Vec::with_capacity(8 + 32 + 32);
    data.extend_from_slice(&DISCRIMINATOR_CREATE_MULTISENDER);
    data.extend_from_slice(&salt);
    data.extend_from_slice(&fee_collector.to_bytes());

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(config, false),
            AccountMeta::new(payer, true),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data,
    }
}

/// Build set_fee_rate instruction
///
/// Accounts:
/// 0. config (writable)
/// 1. owner (signer)
pub fn build_set_fee_rate(config: Pubkey, owner: Pubkey, new_fee_bps: u16) -> Instruction {
    let mut data = Vec::with_capacity(8 + 2);
    data.extend_from_slice(&DISCRIMINATOR_SET_FEE_RATE);
    data.extend_from_slice(&new_fee_bps.to_le_bytes());

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(config, false),
            AccountMeta::new_readonly(owner, true),
        ],
        data,
    }
}

/// Build set_fee_collector instruction
///
/// Accounts:
/// 0. config (writable)
/// 1. owner (signer)
pub fn build_set_fee_collector(
    config: Pubkey,
    owner: Pubkey,
    new_fee_collector: Pubkey,
) -> Instruction {
    let mut data = Vec::with_capacity(8 + 32);
    data.extend_from_slice(&DISCRIMINATOR_SET_FEE_COLLECTOR);
    data.extend_from_slice(&new_fee_collector.to_bytes());

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(config, false),
            AccountMeta::new_readonly(owner, true),
        ],
        data,
    }
}

/// Build transfer_ownership instruction
///
/// Accounts:
/// 0. config (writable)
/// 1. owner (signer)
pub fn build_transfer_ownership(config: Pubkey, owner: Pubkey, new_owner: Pubkey) -> Instruction {
    let mut data = Vec::with_capacity(8 + 32);
    data.extend_from_slice(&DISCRIMINATOR_TRANSFER_OWNERSHIP);
    data.extend_from_slice(&new_owner.to_bytes());

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(config, false),
            AccountMeta::new_readonly(owner, true),
        ],
        data,
    }
}

/// Build accept_ownership instruction
///
/// Accounts:
/// 0. config (writable)
/// 1. new_owner (signer)
pub fn build_accept_ownership(config: Pubkey, new_owner: Pubkey) -> Instruction {
    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(config, false),
            AccountMeta::new_readonly(new_owner, true),
        ],
        data: DISCRIMINATOR_ACCEPT_OWNERSHIP.to_vec(),
    }
}

/// Build add_vip instruction
///
/// Accounts:
/// 0. config (readonly)
/// 1. owner (writable, signer)
/// 2. vip_status (writable) - PDA, init_if_needed
/// 3. system_program
pub fn build_add_vip(
    config: Pubkey,
    owner: Pubkey,
    vip_status: Pubkey,
    member: Pubkey,
) -> Instruction {
    let mut data = Vec::with_capacity(8 + 32);
    data.extend_from_slice(&DISCRIMINATOR_ADD_VIP);
    data.extend_from_slice(&member.to_bytes());

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(config, false),
            AccountMeta::new(owner, true),
            AccountMeta::new(vip_status, false),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data,
    }
}

/// Build remove_vip instruction
///
/// Accounts:
/// 0. config (readonly)
/// 1. owner (writable, signer)
/// 2. vip_status (writable, closed to owner)
pub fn build_remove_vip(config: Pubkey, owner: Pubkey, vip_status: Pubkey) -> Instruction {
    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(config, false),
            AccountMeta::new(owner, true),
            AccountMeta::new(vip_status, false),
        ],
        data: DISCRIMINATOR_REMOVE_VIP.to_vec(),
    }
}

/// Build send_native instruction
///
/// Accounts:
/// 0. config (readonly)
/// 1. sender (writable, signer)
/// 2. fee_collector (writable)
/// 3. vip_status (readonly, may be uninitialized)
/// 4. system_program
/// remaining_accounts: recipients (writable), aligned with amounts
pub fn build_send_native(
    config: Pubkey,
    sender: Pubkey,
    fee_collector: Pubkey,
    vip_status: Pubkey,
    recipients: &[Pubkey],
    amounts: &[u64],
) -> Instruction {
    let mut data = Vec::new();
    data.extend_from_slice(&DISCRIMINATOR_SEND_NATIVE);
    push_amounts(&mut data, amounts);

    let mut accounts = vec![
        AccountMeta::new_readonly(config, false),
        AccountMeta::new(sender, true),
        AccountMeta::new(fee_collector, false),
        AccountMeta::new_readonly(vip_status, false),
        AccountMeta::new_readonly(system_program::id(), false),
    ];
    for recipient in recipients {
        accounts.push(AccountMeta::new(*recipient, false));
    }

    Instruction {
        program_id: PROGRAM_ID,
        accounts,
        data,
    }
}

/// Build send_tokens instruction (fee-free variant)
///
/// Accounts:
/// 0. config (readonly)
/// 1. sender (writable, signer)
/// 2. mint (readonly)
/// 3. sender_token (writable)
/// 4. vault (writable) - config ATA, init_if_needed
/// 5. token_program
/// 6. associated_token_program
/// 7. system_program
/// remaining_accounts: recipient ATAs (writable), aligned with recipients
#[allow(clippy::too_many_arguments)]
pub fn build_send_tokens(
    config: Pubkey,
    sender: Pubkey,
    mint: Pubkey,
    sender_token: Pubkey,
    vault: Pubkey,
    token_program: Pubkey,
    recipients: &[Pubkey],
    amounts: &[u64],
    recipient_atas: &[Pubkey],
) -> Instruction {
    let mut data = Vec::new();
    data.extend_from_slice(&DISCRIMINATOR_SEND_TOKENS);
    push_pubkeys(&mut data, recipients);
    push_amounts(&mut data, amounts);

    let mut accounts = vec![
        AccountMeta::new_readonly(config, false),
        AccountMeta::new(sender, true),
        AccountMeta::new_readonly(mint, false),
        AccountMeta::new(sender_token, false),
        AccountMeta::new(vault, false),
        AccountMeta::new_readonly(token_program, false),
        AccountMeta::new_readonly(spl_associated_token_account::id(), false),
        AccountMeta::new_readonly(system_program::id(), false),
    ];
    for ata in recipient_atas {
        accounts.push(AccountMeta::new(*ata, false));
    }

    Instruction {
        program_id: PROGRAM_ID,
        accounts,
        data,
    }
}

/// Build send_tokens_with_fee instruction
///
/// Accounts:
/// 0. config (readonly)
/// 1. sender (writable, signer)
/// 2. mint (readonly)
/// 3. sender_token (writable)
/// 4. vault (writable) - config ATA, init_if_needed
/// 5. fee_collector_token (writable)
/// 6. vip_status (readonly, may be uninitialized)
/// 7. token_program
/// 8. associated_token_program
/// 9. system_program
/// remaining_accounts: recipient ATAs (writable), aligned with recipients
#[allow(clippy::too_many_arguments)]
pub fn build_send_tokens_with_fee(
    config: Pubkey,
    sender: Pubkey,
    mint: Pubkey,
    sender_token: Pubkey,
    vault: Pubkey,
    fee_collector_token: Pubkey,
    vip_status: Pubkey,
    token_program: Pubkey,
    recipients: &[Pubkey],
    amounts: &[u64],
    recipient_atas: &[Pubkey],
) -> Instruction {
    let mut data = Vec::new();
    data.extend_from_slice(&DISCRIMINATOR_SEND_TOKENS_WITH_FEE);
    push_pubkeys(&mut data, recipients);
    push_amounts(&mut data, amounts);

    let mut accounts = vec![
        AccountMeta::new_readonly(config, false),
        AccountMeta::new(sender, true),
        AccountMeta::new_readonly(mint, false),
        AccountMeta::new(sender_token, false),
        AccountMeta::new(vault, false),
        AccountMeta::new(fee_collector_token, false),
        AccountMeta::new_readonly(vip_status, false),
        AccountMeta::new_readonly(token_program, false),
        AccountMeta::new_readonly(spl_associated_token_account::id(), false),
        AccountMeta::new_readonly(system_program::id(), false),
    ];
    for ata in recipient_atas {
        accounts.push(AccountMeta::new(*ata, false));
    }

    Instruction {
        program_id: PROGRAM_ID,
        accounts,
        data,
    }
}

/// Build emergency_withdraw instruction (token path)
///
/// Accounts:
/// 0. config (readonly)
/// 1. owner (signer)
/// 2. mint (readonly)
/// 3. vault (writable)
/// 4. owner_token (writable)
/// 5. token_program
#[allow(clippy::too_many_arguments)]
pub fn build_emergency_withdraw(
    config: Pubkey,
    owner: Pubkey,
    mint: Pubkey,
    vault: Pubkey,
    owner_token: Pubkey,
    token_program: Pubkey,
    amount: u64,
) -> Instruction {
    let mut data = Vec::with_capacity(8 + 8);
    data.extend_from_slice(&DISCRIMINATOR_EMERGENCY_WITHDRAW);
    data.extend_from_slice(&amount.to_le_bytes());

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(config, false),
            AccountMeta::new_readonly(owner, true),
            AccountMeta::new_readonly(mint, false),
            AccountMeta::new(vault, false),
            AccountMeta::new(owner_token, false),
            AccountMeta::new_readonly(token_program, false),
        ],
        data,
    }
}

/// Build emergency_withdraw_native instruction
///
/// Accounts:
/// 0. config (writable)
/// 1. owner (writable, signer)
pub fn build_emergency_withdraw_native(config: Pubkey, owner: Pubkey, amount: u64) -> Instruction {
    let mut data = Vec::with_capacity(8 + 8);
    data.extend_from_slice(&DISCRIMINATOR_EMERGENCY_WITHDRAW_NATIVE);
    data.extend_from_slice(&amount.to_le_bytes());

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(config, false),
            AccountMeta::new(owner, true),
        ],
        data,
    }
}
