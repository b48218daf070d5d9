use anchor_lang::prelude::*;

use crate::{
    errors::ErrorCode, events::OwnershipTransferProposed, pda::CONFIG_SEED,
    state::MultisenderConfig,
};

#[derive(Accounts)]
pub struct TransferOwnership<'info> {
    #[account(
        mut,
        seeds = [CONFIG_SEED, config.salt.as_ref()],
        bump = config.bump,
        constraint = config.owner == owner.key() @ ErrorCode::Unauthorized
    )]
    pub config: Account<'info, MultisenderConfig>,

    pub owner: Signer<'info>,
}

/// Proposes ownership transfer to a new address (two-step pattern)
/// Can be overwritten by calling again with a different address
/// Set to Pubkey::default() to cancel a pending transfer
pub fn handler(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
    let config = &mut ctx.accounts.config;

    config.pending_owner = new_owner;

    emit!(OwnershipTransferProposed {
        config: config.key(),
        owner: ctx.accounts.owner.key(),
        pending_owner: new_owner,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
