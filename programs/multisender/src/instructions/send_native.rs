use anchor_lang::{prelude::*, system_program};

use crate::{
    errors::ErrorCode,
    events::NativeTokensSent,
    pda::CONFIG_SEED,
    state::MultisenderConfig,
    utils::{calculate_fee, is_vip, validate_batch},
};

#[derive(Accounts)]
pub struct SendNative<'info> {
    #[account(
        seeds = [CONFIG_SEED, config.salt.as_ref()],
        bump = config.bump
    )]
    pub config: Account<'info, MultisenderConfig>,

    #[account(mut)]
    pub sender: Signer<'info>,

    /// CHECK: Fee destination, validated against the configured collector
    #[account(
        mut,
        constraint = fee_collector.key() == config.fee_collector @ ErrorCode::FeeCollectorMismatch
    )]
    pub fee_collector: AccountInfo<'info>,

    /// CHECK: Fee-exemption marker PDA for the sender; address is re-derived
    /// in the handler and the account may be uninitialized (non-VIP)
    pub vip_status: AccountInfo<'info>,

    pub system_program: Program<'info, System>,
}

/// Sends lamports to each recipient in one atomic call
///
/// Recipients arrive as remaining accounts, aligned by index with `amounts`.
/// Everything is validated and totalled before the first transfer, so a
/// failure anywhere leaves no partial payout behind.
pub fn handler<'info>(
    ctx: Context<'_, '_, 'info, 'info, SendNative<'info>>,
    amounts: Vec<u64>,
) -> Result<()> {
    let recipients: Vec<Pubkey> = ctx.remaining_accounts.iter().map(|a| a.key()).collect();
    let total = validate_batch(&recipients, &amounts)?;

    for account in ctx.remaining_accounts.iter() {
        require!(account.is_writable, ErrorCode::RecipientNotWritable);
    }

    let config_key = ctx.accounts.config.key();
    let sender_key = ctx.accounts.sender.key();

    let fee = if is_vip(&ctx.accounts.vip_status, &config_key, &sender_key)? {
        0
    } else {
        calculate_fee(total, ctx.accounts.config.fee_bps).ok_or(ErrorCode::MathOverflow)?
    };

    let required = total.checked_add(fee).ok_or(ErrorCode::MathOverflow)?;
    require!(
        ctx.accounts.sender.lamports() >= required,
        ErrorCode::InsufficientFunds
    );

    // Accounting is final; interact
    for (recipient, amount) in ctx.remaining_accounts.iter().zip(amounts.iter()) {
        system_program::transfer(
            CpiContext::new(
                ctx.accounts.system_program.to_account_info(),
                system_program::Transfer {
                    from: ctx.accounts.sender.to_account_info(),
                    to: recipient.clone(),
                },
            ),
            *amount,
        )?;
    }

    if fee > 0 {
        system_program::transfer(
            CpiContext::new(
                ctx.accounts.system_program.to_account_info(),
                system_program::Transfer {
                    from: ctx.accounts.sender.to_account_info(),
                    to: ctx.accounts.fee_collector.to_account_info(),
                },
            ),
            fee,
        )?;
    }

    emit!(NativeTokensSent {
        config: config_key,
        sender: sender_key,
        total_amount: total,
        recipient_count: recipients.len() as u32,
        fee,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
