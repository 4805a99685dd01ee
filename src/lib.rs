pub mod app;
pub mod cli;
pub mod command;
pub mod config;
pub mod filter;
pub mod loader;
pub mod model;
pub mod output;
pub mod pagination;
pub mod session;
pub mod table;
pub mod view;

#[cfg(test)]
mod tests;
