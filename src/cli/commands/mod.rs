pub mod add;
pub mod config;
pub mod del;
pub mod get;
pub mod init;
pub mod list;
pub mod serve;
pub mod update;
