// Document loading and validation
pub mod fetcher;

// Cached payload, active round, historical flag
pub mod state;

// Loading overlay timing
pub mod loader;

// Control handlers and event loop
pub mod controller;
