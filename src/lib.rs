pub mod analysis;
pub mod api;
pub mod config;
pub mod controller;
pub mod dashboard;
pub mod display;
pub mod error;
pub mod reference;
