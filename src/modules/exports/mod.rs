// Exports module: file downloads of the order list

pub mod controllers;
pub mod services;

pub use controllers::export_controller::configure;
