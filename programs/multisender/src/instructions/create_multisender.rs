use anchor_lang::prelude::*;

use crate::{
    constants::{DEFAULT_FEE_BPS, MULTISENDER_CONFIG_SIZE},
    errors::ErrorCode,
    events::MultisenderDeployed,
    pda::CONFIG_SEED,
    state::MultisenderConfig,
};

#[derive(Accounts)]
#[instruction(salt: [u8; 32])]
pub struct CreateMultisender<'info> {
    #[account(
        init_if_needed,
        payer = payer,
        space = MULTISENDER_CONFIG_SIZE,
        seeds = [CONFIG_SEED, salt.as_ref()],
        bump
    )]
    pub config: Account<'info, MultisenderConfig>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Creates a multisender instance at the salt-derived address
///
/// Idempotent on the salt: if the instance already exists the call succeeds
/// without touching it, so the salt -> address mapping is written exactly
/// once. The payer becomes the instance owner and the fee rate starts at the
/// default.
pub fn handler(ctx: Context<CreateMultisender>, salt: [u8; 32], fee_collector: Pubkey) -> Result<()> {
    let config = &mut ctx.accounts.config;

    // Already deployed for this salt; leave it untouched
    if config.version != 0 {
        #[cfg(feature = "verbose")]
        msg!("Instance for salt already deployed at {}", config.key());
        return Ok(());
    }

    require!(fee_collector != Pubkey::default(), ErrorCode::InvalidFeeCollector);

    config.version = 1;
    config.owner = ctx.accounts.payer.key();
    config.pending_owner = Pubkey::default();
    config.fee_collector = fee_collector;
    config.fee_bps = DEFAULT_FEE_BPS;
    config.salt = salt;
    config.bump = ctx.bumps.config;

    emit!(MultisenderDeployed {
        salt,
        address: config.key(),
        owner: ctx.accounts.payer.key(),
        fee_collector,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
