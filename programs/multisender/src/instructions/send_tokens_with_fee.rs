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
    utils::{calculate_fee, is_vip, validate_and_send_to_recipient, validate_batch},
};

#[derive(Accounts)]
pub struct SendTokensWithFee<'info> {
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

    /// CHECK: Fee collector's token account; validated in the handler as the
    /// canonical ATA of the configured collector. Writability is only
    /// required when a fee leg actually runs.
    pub fee_collector_token: AccountInfo<'info>,

    /// CHECK: Fee-exemption marker PDA for the sender; address is re-derived
    /// in the handler and the account may be uninitialized (non-VIP)
    pub vip_status: AccountInfo<'info>,

    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

/// Sends tokens to each recipient in one atomic call, charging the fee
///
/// Same pull-then-push flow as the fee-free variant, except `total + fee` is
/// pulled from the sender and the fee leg lands on the collector's token
/// account last. VIP senders pull exactly the batch total.
pub fn handler<'info>(
    ctx: Context<'_, '_, 'info, 'info, SendTokensWithFee<'info>>,
    recipients: Vec<Pubkey>,
    amounts: Vec<u64>,
) -> Result<()> {
    let total = validate_batch(&recipients, &amounts)?;
    require!(
        ctx.remaining_accounts.len() >= recipients.len(),
        ErrorCode::InsufficientRemainingAccounts
    );

    let config_key = ctx.accounts.config.key();
    let sender_key = ctx.accounts.sender.key();

    let fee = if is_vip(&ctx.accounts.vip_status, &config_key, &sender_key)? {
        0
    } else {
        calculate_fee(total, ctx.accounts.config.fee_bps).ok_or(ErrorCode::MathOverflow)?
    };
    let required = total.checked_add(fee).ok_or(ErrorCode::MathOverflow)?;

    // Pull batch total plus fee into the vault
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
        required,
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

    // Fee leg last; validated exactly like a recipient, against the
    // configured collector's wallet
    if fee > 0 {
        let collector_wallet = ctx.accounts.config.fee_collector;
        require!(
            ctx.accounts.fee_collector_token.is_writable,
            ErrorCode::FeeCollectorNotWritable
        );
        validate_and_send_to_recipient(
            &ctx.accounts.fee_collector_token,
            &collector_wallet,
            fee,
            &ctx.accounts.mint,
            &ctx.accounts.vault,
            &ctx.accounts.config.to_account_info(),
            &ctx.accounts.token_program,
            signer_seeds,
        )?;
    }

    emit!(TokensSent {
        config: config_key,
        mint: ctx.accounts.mint.key(),
        sender: sender_key,
        total_amount: total,
        recipient_count: recipients.len() as u32,
        fee,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
