use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::get_associated_token_address_with_program_id,
    token,
    token_2022::{self, spl_token_2022::state::AccountState},
    token_interface::{self, Mint, TokenAccount, TokenInterface, TransferChecked},
};

use crate::{
    constants::{FEE_DENOMINATOR, MAX_RECIPIENTS, MIN_RECIPIENTS},
    errors::ErrorCode,
    pda,
};

/// Fee owed on `amount` at `fee_bps` basis points
/// Integer division truncates toward zero; returns None on overflow
pub fn calculate_fee(amount: u64, fee_bps: u16) -> Option<u64> {
    (amount as u128)
        .checked_mul(fee_bps as u128)?
        .checked_div(FEE_DENOMINATOR as u128)?
        .try_into()
        .ok()
}

/// Validates a batch request and returns the checked total
///
/// Checks run in a fixed order so each failure mode maps to one error:
/// length mismatch, empty batch, batch over the cap, zero-address recipient,
/// zero amount. Nothing moves until every entry has passed.
pub fn validate_batch(recipients: &[Pubkey], amounts: &[u64]) -> Result<u64> {
    require!(recipients.len() == amounts.len(), ErrorCode::LengthMismatch);
    require!(recipients.len() >= MIN_RECIPIENTS, ErrorCode::EmptyBatch);
    require!(recipients.len() <= MAX_RECIPIENTS, ErrorCode::TooManyRecipients);

    let mut total = 0u64;
    for (recipient, amount) in recipients.iter().zip(amounts.iter()) {
        require!(*recipient != Pubkey::default(), ErrorCode::ZeroAddress);
        require!(*amount > 0, ErrorCode::ZeroAmount);
        total = total.checked_add(*amount).ok_or(ErrorCode::MathOverflow)?;
    }
    Ok(total)
}

/// Whether `wallet` is fee-exempt on the given instance
///
/// The caller passes the vip status account unchecked; we re-derive the
/// expected address so an arbitrary account cannot stand in for it.
/// Membership is existence: initialized and owned by this program.
pub fn is_vip(vip_status_info: &AccountInfo, config: &Pubkey, wallet: &Pubkey) -> Result<bool> {
    let (expected, _) = pda::vip_status_address(config, wallet, &crate::ID);
    require!(
        vip_status_info.key() == expected,
        ErrorCode::InvalidVipAccount
    );
    Ok(!vip_status_info.data_is_empty() && vip_status_info.owner == &crate::ID)
}

/// Validates a recipient token account and pushes `amount` from the vault
///
/// The destination must be the canonical associated token account for the
/// recipient wallet, initialized, owned by a token program, matching the
/// expected owner and mint, and not frozen. Any of these failing aborts the
/// whole batch; there is no skip-and-continue.
#[allow(clippy::too_many_arguments)]
pub fn validate_and_send_to_recipient<'info>(
    recipient_ata_info: &AccountInfo<'info>,
    recipient: &Pubkey,
    amount: u64,
    mint: &InterfaceAccount<'info, Mint>,
    vault: &InterfaceAccount<'info, TokenAccount>,
    config_info: &AccountInfo<'info>,
    token_program: &Interface<'info, TokenInterface>,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    require!(
        !recipient_ata_info.data_is_empty(),
        ErrorCode::RecipientAccountMissing
    );

    // Derive and validate canonical ATA address
    let expected_ata = get_associated_token_address_with_program_id(
        recipient,
        &mint.key(),
        &token_program.key(),
    );
    require!(
        recipient_ata_info.key() == expected_ata,
        ErrorCode::RecipientAccountInvalid
    );

    // Owned by a token program (SPL Token or Token-2022)
    let valid_owner =
        recipient_ata_info.owner == &token::ID || recipient_ata_info.owner == &token_2022::ID;
    require!(valid_owner, ErrorCode::InvalidTokenProgram);

    let recipient_ata = TokenAccount::try_deserialize(&mut &recipient_ata_info.data.borrow()[..])
        .map_err(|_| ErrorCode::RecipientAccountInvalid)?;

    require!(
        recipient_ata.owner == *recipient,
        ErrorCode::RecipientAccountWrongOwner
    );
    require!(
        recipient_ata.mint == mint.key(),
        ErrorCode::RecipientAccountWrongMint
    );
    require!(
        recipient_ata.state != AccountState::Frozen,
        ErrorCode::AccountFrozen
    );

    let cpi_accounts = TransferChecked {
        from: vault.to_account_info(),
        mint: mint.to_account_info(),
        to: recipient_ata_info.clone(),
        authority: config_info.clone(),
    };
    let cpi_ctx = CpiContext::new_with_signer(
        token_program.to_account_info(),
        cpi_accounts,
        signer_seeds,
    );
    token_interface::transfer_checked(cpi_ctx, amount, mint.decimals)?;

    Ok(())
}
