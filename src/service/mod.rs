pub mod data_manager;
pub mod gameapi;
pub mod ranking;
