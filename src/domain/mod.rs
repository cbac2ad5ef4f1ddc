// ============================================================================
// Domain Models Module
// Currencies, monetary values and engine configuration
// ============================================================================

pub mod config;
pub mod currency;
pub mod money;
pub mod snapshot;

pub use config::EngineConfig;
pub use currency::{iso, Base, Currency, CurrencyDef};
pub use money::{BigMoney, DecimalMoney, ExchangeRate, Money, NativeMoney, ScaledAmount};
pub use snapshot::{from_snapshot, to_snapshot, MoneySnapshot};
