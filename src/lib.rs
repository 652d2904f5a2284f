pub mod commands;
pub mod config;
pub mod git;
pub mod report;
pub mod styling;
pub mod workspace;
