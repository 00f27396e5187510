pub mod competitor;
pub mod config;
pub mod error;
pub mod ranking;
pub mod rules;
pub mod scorer;
pub mod selection;
pub mod session;
pub mod store;
// cmd and reports are binary modules (see main.rs).
