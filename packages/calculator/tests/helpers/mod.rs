mod prop_test_strategies;

pub use prop_test_strategies::*;
