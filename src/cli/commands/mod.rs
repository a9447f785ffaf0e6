pub mod clear;
pub mod config;
pub mod export;
pub mod fill;
pub mod init;
pub mod log;
pub mod new;
pub mod preset;
pub mod set;
pub mod show;
pub mod submit;
pub mod summary;
