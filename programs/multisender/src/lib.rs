use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod pda;
pub mod state;
mod utils;

use instructions::*;

declare_id!("Snd21oQjthsY6gjB5Yu9XbnZRyNqoRa29oRUQyFVVfT");

// Security contact information (embedded on-chain)
#[cfg(not(feature = "no-entrypoint"))]
solana_security_txt::security_txt! {
    name: "Multisender",
    project_url: "https://multisender.dev",
    contacts: "email:hello@multisender.dev,link:https://github.com/multisender-labs/multisender/security",
    policy: "https://github.com/multisender-labs/multisender/blob/main/SECURITY.md",
    source_code: "https://github.com/multisender-labs/multisender",
    source_release: "v0.1.0"
}

#[program]
pub mod multisender {
    use super::*;

    /// Creates a multisender instance at the address derived from `salt`
    /// Idempotent: calling again with the same salt is a no-op
    pub fn create_multisender(
        ctx: Context<CreateMultisender>,
        salt: [u8; 32],
        fee_collector: Pubkey,
    ) -> Result<()> {
        instructions::create_multisender::handler(ctx, salt, fee_collector)
    }

    /// Updates the fee rate in basis points
    /// Only callable by the instance owner; capped at MAX_FEE_BPS
    pub fn set_fee_rate(ctx: Context<SetFeeRate>, new_fee_bps: u16) -> Result<()> {
        instructions::set_fee_rate::handler(ctx, new_fee_bps)
    }

    /// Updates the fee collector address
    /// Only callable by the instance owner
    pub fn set_fee_collector(ctx: Context<SetFeeCollector>, new_fee_collector: Pubkey) -> Result<()> {
        instructions::set_fee_collector::handler(ctx, new_fee_collector)
    }

    /// Proposes ownership transfer to a new address (two-step pattern)
    /// New owner must call accept_ownership to complete
    pub fn transfer_ownership(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
        instructions::transfer_ownership::handler(ctx, new_owner)
    }

    /// Accepts a pending ownership transfer
    /// Only callable by the pending owner
    pub fn accept_ownership(ctx: Context<AcceptOwnership>) -> Result<()> {
        instructions::accept_ownership::handler(ctx)
    }

    /// Marks an address as fee-exempt
    /// Only callable by the instance owner; idempotent
    pub fn add_vip(ctx: Context<AddVip>, member: Pubkey) -> Result<()> {
        instructions::add_vip::handler(ctx, member)
    }

    /// Removes an address from the fee-exempt set and recovers rent
    /// Only callable by the instance owner
    pub fn remove_vip(ctx: Context<RemoveVip>) -> Result<()> {
        instructions::remove_vip::handler(ctx)
    }

    /// Sends lamports to up to 200 recipients in one atomic call
    /// Recipients are passed as remaining accounts, aligned with `amounts`
    pub fn send_native<'info>(
        ctx: Context<'_, '_, 'info, 'info, SendNative<'info>>,
        amounts: Vec<u64>,
    ) -> Result<()> {
        instructions::send_native::handler(ctx, amounts)
    }

    /// Sends tokens to up to 200 recipients in one atomic call, fee-free
    /// Recipient token accounts are passed as remaining accounts
    pub fn send_tokens<'info>(
        ctx: Context<'_, '_, 'info, 'info, SendTokens<'info>>,
        recipients: Vec<Pubkey>,
        amounts: Vec<u64>,
    ) -> Result<()> {
        instructions::send_tokens::handler(ctx, recipients, amounts)
    }

    /// Sends tokens to up to 200 recipients, charging the protocol fee
    /// VIP senders are exempt
    pub fn send_tokens_with_fee<'info>(
        ctx: Context<'_, '_, 'info, 'info, SendTokensWithFee<'info>>,
        recipients: Vec<Pubkey>,
        amounts: Vec<u64>,
    ) -> Result<()> {
        instructions::send_tokens_with_fee::handler(ctx, recipients, amounts)
    }

    /// Sweeps stranded tokens from the instance vault to the owner
    /// Only callable by the instance owner
    pub fn emergency_withdraw(ctx: Context<EmergencyWithdrawTokens>, amount: u64) -> Result<()> {
        instructions::emergency_withdraw::handler(ctx, amount)
    }

    /// Sweeps stranded lamports from the instance account to the owner
    /// Only callable by the instance owner; rent-exempt minimum stays behind
    pub fn emergency_withdraw_native(
        ctx: Context<EmergencyWithdrawNative>,
        amount: u64,
    ) -> Result<()> {
        instructions::emergency_withdraw_native::handler(ctx, amount)
    }
}
