//! View components for the CovidStat application.

pub mod icons;
pub mod statistics;
pub mod theme;
