pub mod initialize_airdrop;
pub mod fund_airdrop;
pub mod claim;
pub mod can_claim;
pub mod check_contract_balance;
pub mod withdraw_leftover;

pub use initialize_airdrop::*;
pub use fund_airdrop::*;
pub use claim::*;
pub use can_claim::*;
pub use check_contract_balance::*;
pub use withdraw_leftover::*;
