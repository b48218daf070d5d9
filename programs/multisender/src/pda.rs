//! Deterministic address derivation for multisender instances
//!
//! The derivation lives here exactly once so the instruction contexts, the
//! test suite and off-chain tooling all agree on the same addresses. Given
//! the same program id and salt, `multisender_address` returns the same
//! address on any cluster, which is what makes cross-cluster deployments
//! line up.

use anchor_lang::prelude::*;

pub const CONFIG_SEED: &[u8] = b"multisender";
pub const VIP_SEED: &[u8] = b"vip";

/// Address a multisender instance will occupy for a given salt
pub fn multisender_address(salt: &[u8; 32], program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[CONFIG_SEED, salt.as_ref()], program_id)
}

/// Address of the fee-exemption marker for a wallet on an instance
pub fn vip_status_address(config: &Pubkey, member: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[VIP_SEED, config.as_ref(), member.as_ref()], program_id)
}
