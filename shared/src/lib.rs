pub mod api;
pub mod client;
pub mod display;
pub mod models;
pub mod schedule;
pub mod screens;
