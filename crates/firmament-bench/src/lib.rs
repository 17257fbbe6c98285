pub mod args;
pub mod report;
pub mod runner;
pub mod scenes;
