pub mod cities;
pub mod config;
pub mod explore;
pub mod init;
