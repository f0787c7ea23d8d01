pub mod admin;
pub mod api;
pub mod carousel;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod contact;
pub mod logging;
pub mod mvi;
pub mod services;
pub mod testimonials;
pub mod theme;
pub mod ui;
