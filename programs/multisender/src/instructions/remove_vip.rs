use anchor_lang::prelude::*;

use crate::{
    errors::ErrorCode,
    events::VipRemoved,
    pda::{CONFIG_SEED, VIP_SEED},
    state::{MultisenderConfig, VipStatus},
};

#[derive(Accounts)]
pub struct RemoveVip<'info> {
    #[account(
        seeds = [CONFIG_SEED, config.salt.as_ref()],
        bump = config.bump,
        constraint = config.owner == owner.key() @ ErrorCode::Unauthorized
    )]
    pub config: Account<'info, MultisenderConfig>,

    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [VIP_SEED, config.key().as_ref(), vip_status.member.as_ref()],
        bump = vip_status.bump,
        close = owner
    )]
    pub vip_status: Account<'info, VipStatus>,
}

/// Removes an address from the fee-exempt set and recovers rent to the owner
pub fn handler(ctx: Context<RemoveVip>) -> Result<()> {
    emit!(VipRemoved {
        config: ctx.accounts.config.key(),
        member: ctx.accounts.vip_status.member,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
