// Reader library - exposes all core modules for testing

pub mod app;
pub mod article;
pub mod config;
pub mod logs;
pub mod params;
pub mod store;
pub mod view;
