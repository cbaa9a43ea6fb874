pub mod calculator;
pub mod config;
pub mod core;
pub mod plot;
pub mod report;
