pub mod platform;
pub mod rendering;
pub mod utils;
