pub mod config;
pub mod currency;
pub mod position;
pub mod prices;
pub mod presale;
pub mod scenario;

pub use config::CalculatorConfig;
pub use currency::Currency;
pub use position::{Deposit, PoolConfig};
pub use presale::{Countdown, PresalePhase, PresalePrice, PresaleWindow, PricePoint};
pub use prices::PriceBasket;
pub use scenario::ScenarioResult;
