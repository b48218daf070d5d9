// Fee configuration
pub const FEE_DENOMINATOR: u64 = 10_000;
pub const DEFAULT_FEE_BPS: u16 = 10; // 0.1%
pub const MAX_FEE_BPS: u16 = 100;    // 1%

// Batch limits
pub const MIN_RECIPIENTS: usize = 1;
pub const MAX_RECIPIENTS: usize = 200;

// Account sizes (borsh layout, 8-byte Anchor discriminator included)
// MultisenderConfig: discriminator (8) + version (1) + owner (32)
//   + pending_owner (32) + fee_collector (32) + fee_bps (2) + salt (32) + bump (1)
pub const MULTISENDER_CONFIG_SIZE: usize = 8 + 1 + 32 + 32 + 32 + 2 + 32 + 1; // 140 bytes

// VipStatus: discriminator (8) + config (32) + member (32) + bump (1)
pub const VIP_STATUS_SIZE: usize = 8 + 32 + 32 + 1; // 73 bytes
