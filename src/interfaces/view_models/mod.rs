pub mod chart;
pub mod renderer;
pub mod screen;
pub mod text_report;

pub use screen::{
    Ball, DataMode, EnginePanel, FrequencyBar, FrequencyChart, MountPoint, PredictionCard,
    RoundHeader, Screen, WeightPanel,
};
