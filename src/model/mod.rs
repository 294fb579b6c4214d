pub mod ids;
pub mod league;
pub mod locale;
pub mod ranked;
