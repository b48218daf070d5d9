use anchor_lang::prelude::*;

use crate::constants::{MULTISENDER_CONFIG_SIZE, VIP_STATUS_SIZE};

/// Per-instance configuration, one account per deployment salt
///
/// The account address is derived from the salt alone (see `pda.rs`), so the
/// same salt yields the same address on any cluster running this program.
#[account]
pub struct MultisenderConfig {
    /// Schema version; 0 means the account has never been initialized
    pub version: u8,
    /// Owner controlling all admin operations on this instance
    pub owner: Pubkey,
    /// Pending owner for two-step transfer (default = no pending transfer)
    pub pending_owner: Pubkey,
    /// Wallet that receives collected fees
    pub fee_collector: Pubkey,
    /// Fee rate in basis points (fee = amount * fee_bps / 10_000)
    pub fee_bps: u16,
    /// Deployment salt, kept for PDA re-derivation in instruction contexts
    pub salt: [u8; 32],
    /// Bump seed for PDA derivation
    pub bump: u8,
}

/// Marker account for a fee-exempt address
///
/// Existence of this account at the derived address is the membership
/// predicate; removal closes the account.
#[account]
pub struct VipStatus {
    /// The instance this exemption belongs to
    pub config: Pubkey,
    /// The exempt wallet
    pub member: Pubkey,
    /// Bump seed for PDA derivation
    pub bump: u8,
}

// Compile-time size assertions to catch accidental struct changes
const _: () = assert!(MULTISENDER_CONFIG_SIZE == 8 + 1 + 32 + 32 + 32 + 2 + 32 + 1);
const _: () = assert!(VIP_STATUS_SIZE == 8 + 32 + 32 + 1);
