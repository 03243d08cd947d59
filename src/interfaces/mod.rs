// Screen view model and renderers (toolkit independent)
pub mod view_models;

// egui front end
#[cfg(feature = "ui")]
pub mod components;
#[cfg(feature = "ui")]
pub mod dashboard;
#[cfg(feature = "ui")]
pub mod design_system;
#[cfg(feature = "ui")]
pub mod ui;
