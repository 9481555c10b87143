pub mod order_controller;
