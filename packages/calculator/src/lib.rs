mod error;
mod rewards_calculator;
pub use self::{error::*, rewards_calculator::*};
