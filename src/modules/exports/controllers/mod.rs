pub mod export_controller;
