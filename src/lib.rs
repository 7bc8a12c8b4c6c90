pub mod config;
pub mod filters;
pub mod models;
pub mod navigation;
pub mod pages;
pub mod store;
pub mod ui;
