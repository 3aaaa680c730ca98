pub mod resize_handler;

pub use resize_handler::ResizeHandler;
