pub mod application;
pub mod config;
pub mod core;
pub mod display;
pub mod engine;
pub mod hello;
pub mod input;
pub mod logger;
pub mod platform;
pub mod renderer;
pub mod resource_manager;
pub mod scene;
pub mod statistics;
