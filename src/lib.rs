pub mod backend;
pub mod banner;
pub mod client;
pub mod config;
pub mod consts;
pub mod error;
pub mod resources;
pub mod server;
pub mod service;
pub mod spinner;
pub mod stem;
pub mod text;
