pub mod cdp;
pub mod incentive;
pub mod rewards;
