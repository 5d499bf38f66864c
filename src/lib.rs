pub mod app;
pub mod cli;
pub mod client;
pub mod config;
pub mod listing;
pub mod model;
pub mod tui;

#[cfg(test)]
mod tests;
