pub mod amount;
pub mod context;
pub mod direction;
pub mod quote;
pub mod settings;
pub mod token;

pub use amount::{AmountError, TokenAmount};
pub use context::{ContractInfo, ContractLookup, ContractRegistry, ProviderConfig};
pub use direction::SwapDirection;
pub use quote::QuoteSnapshot;
pub use settings::TransactionSettings;
pub use token::Token;
