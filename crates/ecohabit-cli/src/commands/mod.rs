pub mod auth;
pub mod challenges;
pub mod chat;
pub mod config;
pub mod rewards;
pub mod session;
pub mod tips;
