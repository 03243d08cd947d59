pub mod balls;
pub mod card;
pub mod charts;
pub mod metrics;
