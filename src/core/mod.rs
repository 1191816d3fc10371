pub mod engine;
pub mod impact;
pub mod modifiers;
pub mod multiplier;
pub mod series;
pub mod solar;
pub mod summary;
pub mod units;
