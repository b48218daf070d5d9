use anchor_lang::prelude::*;

use crate::{
    constants::MAX_FEE_BPS,
    errors::ErrorCode,
    events::FeeRateUpdated,
    pda::CONFIG_SEED,
    state::MultisenderConfig,
};

#[derive(Accounts)]
pub struct SetFeeRate<'info> {
    #[account(
        mut,
        seeds = [CONFIG_SEED, config.salt.as_ref()],
        bump = config.bump,
        constraint = config.owner == owner.key() @ ErrorCode::Unauthorized
    )]
    pub config: Account<'info, MultisenderConfig>,

    pub owner: Signer<'info>,
}

/// Updates the fee rate, capped at MAX_FEE_BPS
/// Only callable by the instance owner
pub fn handler(ctx: Context<SetFeeRate>, new_fee_bps: u16) -> Result<()> {
    require!(new_fee_bps <= MAX_FEE_BPS, ErrorCode::FeeTooHigh);

    let config = &mut ctx.accounts.config;
    let old_fee_bps = config.fee_bps;

    config.fee_bps = new_fee_bps;

    emit!(FeeRateUpdated {
        config: config.key(),
        old_fee_bps,
        new_fee_bps,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
