use anchor_lang::prelude::*;

use crate::{
    errors::ErrorCode,
    events::FeeCollectorUpdated,
    pda::CONFIG_SEED,
    state::MultisenderConfig,
};

#[derive(Accounts)]
pub struct SetFeeCollector<'info> {
    #[account(
        mut,
        seeds = [CONFIG_SEED, config.salt.as_ref()],
        bump = config.bump,
        constraint = config.owner == owner.key() @ ErrorCode::Unauthorized
    )]
    pub config: Account<'info, MultisenderConfig>,

    pub owner: Signer<'info>,
}

/// Updates the fee collector address
/// Only callable by the instance owner
pub fn handler(ctx: Context<SetFeeCollector>, new_fee_collector: Pubkey) -> Result<()> {
    require!(
        new_fee_collector != Pubkey::default(),
        ErrorCode::InvalidFeeCollector
    );

    let config = &mut ctx.accounts.config;
    let old_fee_collector = config.fee_collector;

    config.fee_collector = new_fee_collector;

    emit!(FeeCollectorUpdated {
        config: config.key(),
        old_fee_collector,
        new_fee_collector,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
