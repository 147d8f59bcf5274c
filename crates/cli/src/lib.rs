pub mod batch;
pub mod cli;
pub mod config;
pub mod menu;
pub mod workflows;
