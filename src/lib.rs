pub mod analysis;
pub mod calc;
pub mod example;
pub mod model;
pub mod presale;
pub mod schema;
pub mod validate;
#[cfg(feature = "wasm")]
pub mod wasm;

pub use calc::{CalcError, PairReturnCalculator, compute_scenario, generate_analysis};
pub use presale::{PresaleClock, PresaleError, format_countdown, presale_price};
