pub mod add;
pub mod config;
pub mod db;
pub mod days;
pub mod init;
pub mod log;
pub mod menu;
pub mod print;
pub mod trips;
pub mod update;
