pub mod config;
pub mod error;
pub mod logger;
pub mod pipeline;
pub mod post;
pub mod rasterizer;
pub mod session;
pub mod text_utils;
pub mod view;
mod test_data;
