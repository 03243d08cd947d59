// Number ranges and their color bands
pub mod band;

// Per-set summary figures (sum, odd/even, AC value)
pub mod combination;

// Engine display names
pub mod engine;

// Domain-specific error types
pub mod errors;

// Port interfaces
pub mod ports;

// Prediction, stats and frequency payloads
pub mod prediction;
