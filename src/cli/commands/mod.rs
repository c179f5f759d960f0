pub mod absence;
pub mod config;
pub mod del;
pub mod edit;
pub mod init;
pub mod list;
pub mod log;
pub mod next;
pub mod punch;
