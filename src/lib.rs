//! Fetch the Challenger league of a League of Legends region from the Riot API,
//! rank it by league points and export the top players as CSV, XLSX or SQLite.

pub mod config;
pub mod export;
pub mod model;
pub mod service;
pub mod ui;
