mod fraction;

pub use fraction::*;
