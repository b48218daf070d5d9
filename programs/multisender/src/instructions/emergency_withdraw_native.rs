use anchor_lang::prelude::*;

use crate::{
    errors::ErrorCode,
    events::EmergencyWithdraw,
    pda::CONFIG_SEED,
    state::MultisenderConfig,
};

#[derive(Accounts)]
pub struct EmergencyWithdrawNative<'info> {
    #[account(
        mut,
        seeds = [CONFIG_SEED, config.salt.as_ref()],
        bump = config.bump,
        constraint = config.owner == owner.key() @ ErrorCode::Unauthorized
    )]
    pub config: Account<'info, MultisenderConfig>,

    #[account(mut)]
    pub owner: Signer<'info>,
}

/// Sweeps stranded lamports from the instance account to the owner
///
/// Lamports sent directly to the instance address are otherwise stuck; the
/// rent-exempt minimum always stays behind so the account survives.
pub fn handler(ctx: Context<EmergencyWithdrawNative>, amount: u64) -> Result<()> {
    let config_info = ctx.accounts.config.to_account_info();
    let rent_minimum = Rent::get()?.minimum_balance(config_info.data_len());

    let available = config_info
        .lamports()
        .checked_sub(rent_minimum)
        .ok_or(ErrorCode::InsufficientBalance)?;
    require!(amount <= available, ErrorCode::InsufficientBalance);

    **config_info.try_borrow_mut_lamports()? -= amount;
    **ctx.accounts.owner.to_account_info().try_borrow_mut_lamports()? += amount;

    emit!(EmergencyWithdraw {
        config: ctx.accounts.config.key(),
        mint: Pubkey::default(),
        amount,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
