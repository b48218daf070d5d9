use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{self, Mint, TokenAccount, TokenInterface, TransferChecked},
};

use crate::{
    errors::ErrorCode,
    events::TokensSent,
    pda::CONFIG_SEED,
    state::MultisenderConfig,
    utils::{validate_and_send_to_recipient, validate_batch},
};

#[derive(Accounts)]
pub struct SendTokens<'info> {
    #[account(
        seeds = [CONFIG_SEED, config.salt.as_ref()],
        bump = config.bump
    )]
    pub config: Account<'info, MultisenderConfig>,

    #[account(mut)]
    pub sender: Signer<'info>,

    pub mint: InterfaceAccount<'info, Mint>,

    #[account(
        mut,
        constraint = sender_token.owner == sender.key() @ ErrorCode::SenderAccountWrongOwner,
        constraint = sender_token.mint == mint.key() @ ErrorCode::SenderAccountWrongMint
    )]
    pub sender_token: InterfaceAccount<'info, TokenAccount>,

    /// Transient escrow for the pulled funds, owned by the instance PDA
    #[account(
        init_if_needed,
        payer = sender,
        associated_token::mint = mint,
        associated_token::authority = config,
        associated_token::token_program = token_program,
    )]
    pub vault: InterfaceAccount<'info, TokenAccount>,

    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

/// Sends tokens to each recipient in one atomic call, fee-free
///
/// Pull-then-push: the batch total moves from the sender's token account
/// into the vault, then fans out to each recipient's associated token
/// account. Any failed leg aborts the whole transaction, returning the
/// pulled funds to the sender.
pub fn handler<'info>(
    ctx: Context<'_, '_, 'info, 'info, SendTokens<'info>>,
    recipients: Vec<Pubkey>,
    amounts: Vec<u64>,
) -> Result<()> {
    let total = validate_batch(&recipients, &amounts)?;
    require!(
        ctx.remaining_accounts.len() >= recipients.len(),
        ErrorCode::InsufficientRemainingAccounts
    );

    // Pull the batch total into the vault
    token_interface::transfer_checked(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            TransferChecked {
                from: ctx.accounts.sender_token.to_account_info(),
                mint: ctx.accounts.mint.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
                authority: ctx.accounts.sender.to_account_info(),
            },
        ),
        total,
        ctx.accounts.mint.decimals,
    )?;

    let salt = ctx.accounts.config.salt;
    let bump = ctx.accounts.config.bump;
    let seeds = &[CONFIG_SEED, salt.as_ref(), &[bump]];
    let signer_seeds = &[&seeds[..]];

    // Push to each recipient
    for (i, (recipient, amount)) in recipients.iter().zip(amounts.iter()).enumerate() {
        validate_and_send_to_recipient(
            &ctx.remaining_accounts[i],
            recipient,
            *amount,
            &ctx.accounts.mint,
            &ctx.accounts.vault,
            &ctx.accounts.config.to_account_info(),
            &ctx.accounts.token_program,
            signer_seeds,
        )?;
    }

    emit!(TokensSent {
        config: ctx.accounts.config.key(),
        mint: ctx.accounts.mint.key(),
        sender: ctx.accounts.sender.key(),
        total_amount: total,
        recipient_count: recipients.len() as u32,
        fee: 0,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
