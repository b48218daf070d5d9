use anchor_lang::prelude::*;

#[event]
pub struct MultisenderDeployed {
    pub salt: [u8; 32],
    pub address: Pubkey,
    pub owner: Pubkey,
    pub fee_collector: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct NativeTokensSent {
    pub config: Pubkey,
    pub sender: Pubkey,
    pub total_amount: u64,
    pub recipient_count: u32,
    pub fee: u64,
    pub timestamp: i64,
}

#[event]
pub struct TokensSent {
    pub config: Pubkey,
    pub mint: Pubkey,
    pub sender: Pubkey,
    pub total_amount: u64,
    pub recipient_count: u32,
    pub fee: u64,
    pub timestamp: i64,
}

#[event]
pub struct EmergencyWithdraw {
    pub config: Pubkey,
    /// Default pubkey for the native (lamport) path
    pub mint: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}

#[event]
pub struct FeeRateUpdated {
    pub config: Pubkey,
    pub old_fee_bps: u16,
    pub new_fee_bps: u16,
    pub timestamp: i64,
}

#[event]
pub struct FeeCollectorUpdated {
    pub config: Pubkey,
    pub old_fee_collector: Pubkey,
    pub new_fee_collector: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct OwnershipTransferProposed {
    pub config: Pubkey,
    pub owner: Pubkey,
    pub pending_owner: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct OwnershipTransferred {
    pub config: Pubkey,
    pub old_owner: Pubkey,
    pub new_owner: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct VipAdded {
    pub config: Pubkey,
    pub member: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct VipRemoved {
    pub config: Pubkey,
    pub member: Pubkey,
    pub timestamp: i64,
}
