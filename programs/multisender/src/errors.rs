use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Recipients and amounts length mismatch")]
    LengthMismatch,

    #[msg("Recipients array cannot be empty")]
    EmptyBatch,

    #[msg("Too many recipients (max 200)")]
    TooManyRecipients,

    #[msg("Recipient cannot be the zero address")]
    ZeroAddress,

    #[msg("Amount must be greater than 0")]
    ZeroAmount,

    #[msg("Fee rate exceeds maximum (1%)")]
    FeeTooHigh,

    #[msg("Fee collector cannot be the zero address")]
    InvalidFeeCollector,

    #[msg("Fee collector account does not match configuration")]
    FeeCollectorMismatch,

    #[msg("Unauthorized")]
    Unauthorized,

    #[msg("No pending ownership transfer")]
    NoPendingTransfer,

    #[msg("Insufficient lamports to cover batch total and fee")]
    InsufficientFunds,

    #[msg("Insufficient token balance")]
    InsufficientBalance,

    #[msg("Math overflow")]
    MathOverflow,

    #[msg("Recipient token account does not exist")]
    RecipientAccountMissing,

    #[msg("Recipient token account is invalid")]
    RecipientAccountInvalid,

    #[msg("Recipient token account has wrong owner")]
    RecipientAccountWrongOwner,

    #[msg("Recipient token account has wrong mint")]
    RecipientAccountWrongMint,

    #[msg("Token account is frozen")]
    AccountFrozen,

    #[msg("Invalid token program")]
    InvalidTokenProgram,

    #[msg("Vip status account does not match the expected address")]
    InvalidVipAccount,

    #[msg("Recipient account is not writable")]
    RecipientNotWritable,

    #[msg("Not enough accounts provided in remaining_accounts")]
    InsufficientRemainingAccounts,

    #[msg("Sender token account has wrong owner")]
    SenderAccountWrongOwner,

    #[msg("Sender token account has wrong mint")]
    SenderAccountWrongMint,

    #[msg("Fee collector token account is not writable")]
    FeeCollectorNotWritable,
}
