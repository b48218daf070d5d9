use anchor_lang::prelude::*;

use crate::{
    errors::ErrorCode, events::OwnershipTransferred, pda::CONFIG_SEED, state::MultisenderConfig,
};

#[derive(Accounts)]
pub struct AcceptOwnership<'info> {
    #[account(
        mut,
        seeds = [CONFIG_SEED, config.salt.as_ref()],
        bump = config.bump,
    )]
    pub config: Account<'info, MultisenderConfig>,

    pub new_owner: Signer<'info>,
}

/// Accepts a pending ownership transfer (two-step pattern)
/// Only callable by the pending owner; clears pending_owner on completion
pub fn handler(ctx: Context<AcceptOwnership>) -> Result<()> {
    let config = &mut ctx.accounts.config;

    require!(
        config.pending_owner != Pubkey::default(),
        ErrorCode::NoPendingTransfer
    );
    require!(
        config.pending_owner == ctx.accounts.new_owner.key(),
        ErrorCode::Unauthorized
    );

    let old_owner = config.owner;
    let new_owner = ctx.accounts.new_owner.key();

    config.owner = new_owner;
    config.pending_owner = Pubkey::default();

    emit!(OwnershipTransferred {
        config: config.key(),
        old_owner,
        new_owner,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
