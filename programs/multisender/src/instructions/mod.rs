#![allow(ambiguous_glob_reexports)]

pub mod accept_ownership;
pub mod add_vip;
pub mod create_multisender;
pub mod emergency_withdraw;
pub mod emergency_withdraw_native;
pub mod remove_vip;
pub mod send_native;
pub mod send_tokens;
pub mod send_tokens_with_fee;
pub mod set_fee_collector;
pub mod set_fee_rate;
pub mod transfer_ownership;

pub use accept_ownership::*;
pub use add_vip::*;
pub use create_multisender::*;
pub use emergency_withdraw::*;
pub use emergency_withdraw_native::*;
pub use remove_vip::*;
pub use send_native::*;
pub use send_tokens::*;
pub use send_tokens_with_fee::*;
pub use set_fee_collector::*;
pub use set_fee_rate::*;
pub use transfer_ownership::*;
