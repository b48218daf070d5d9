use anchor_lang::prelude::*;
use anchor_spl::token_interface::{self, Mint, TokenAccount, TokenInterface, TransferChecked};

use crate::{
    errors::ErrorCode,
    events::EmergencyWithdraw,
    pda::CONFIG_SEED,
    state::MultisenderConfig,
};

#[derive(Accounts)]
pub struct EmergencyWithdrawTokens<'info> {
    #[account(
        seeds = [CONFIG_SEED, config.salt.as_ref()],
        bump = config.bump,
        constraint = config.owner == owner.key() @ ErrorCode::Unauthorized
    )]
    pub config: Account<'info, MultisenderConfig>,

    pub owner: Signer<'info>,

    pub mint: InterfaceAccount<'info, Mint>,

    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = config,
        associated_token::token_program = token_program,
    )]
    pub vault: InterfaceAccount<'info, TokenAccount>,

    #[account(
        mut,
        constraint = owner_token.owner == owner.key() @ ErrorCode::SenderAccountWrongOwner,
        constraint = owner_token.mint == mint.key() @ ErrorCode::SenderAccountWrongMint
    )]
    pub owner_token: InterfaceAccount<'info, TokenAccount>,

    pub token_program: Interface<'info, TokenInterface>,
}

/// Sweeps stranded tokens from the instance vault to the owner
///
/// Recovers funds left behind by direct transfers or rounding, outside the
/// normal batch flow.
pub fn handler(ctx: Context<EmergencyWithdrawTokens>, amount: u64) -> Result<()> {
    require!(
        ctx.accounts.vault.amount >= amount,
        ErrorCode::InsufficientBalance
    );

    let salt = ctx.accounts.config.salt;
    let bump = ctx.accounts.config.bump;
    let seeds = &[CONFIG_SEED, salt.as_ref(), &[bump]];
    let signer_seeds = &[&seeds[..]];

    token_interface::transfer_checked(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            TransferChecked {
                from: ctx.accounts.vault.to_account_info(),
                mint: ctx.accounts.mint.to_account_info(),
                to: ctx.accounts.owner_token.to_account_info(),
                authority: ctx.accounts.config.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
        ctx.accounts.mint.decimals,
    )?;

    emit!(EmergencyWithdraw {
        config: ctx.accounts.config.key(),
        mint: ctx.accounts.mint.key(),
        amount,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
