// Instructions module
// - create_pool
// - swap
// - add_liquidity
// - remove_liquidity

pub mod add_liquidity;
pub mod create_pool;
pub mod remove_liquidity;
pub mod swap;

pub use add_liquidity::*;
pub use create_pool::*;
pub use remove_liquidity::*;
pub use swap::*;
