use anchor_lang::prelude::*;

use crate::{
    constants::VIP_STATUS_SIZE,
    errors::ErrorCode,
    events::VipAdded,
    pda::{CONFIG_SEED, VIP_SEED},
    state::{MultisenderConfig, VipStatus},
};

#[derive(Accounts)]
#[instruction(member: Pubkey)]
pub struct AddVip<'info> {
    #[account(
        seeds = [CONFIG_SEED, config.salt.as_ref()],
        bump = config.bump,
        constraint = config.owner == owner.key() @ ErrorCode::Unauthorized
    )]
    pub config: Account<'info, MultisenderConfig>,

    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        init_if_needed,
        payer = owner,
        space = VIP_STATUS_SIZE,
        seeds = [VIP_SEED, config.key().as_ref(), member.as_ref()],
        bump
    )]
    pub vip_status: Account<'info, VipStatus>,

    pub system_program: Program<'info, System>,
}

/// Marks an address as fee-exempt on this instance
/// Idempotent: adding an existing member is a successful no-op
pub fn handler(ctx: Context<AddVip>, member: Pubkey) -> Result<()> {
    require!(member != Pubkey::default(), ErrorCode::ZeroAddress);

    let vip_status = &mut ctx.accounts.vip_status;

    // Already a member
    if vip_status.member == member {
        return Ok(());
    }

    vip_status.config = ctx.accounts.config.key();
    vip_status.member = member;
    vip_status.bump = ctx.bumps.vip_status;

    emit!(VipAdded {
        config: ctx.accounts.config.key(),
        member,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
