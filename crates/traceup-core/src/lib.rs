pub mod config;
pub mod logging;

pub mod destination;
pub mod export;
pub mod uploader;
pub mod viewer;
