//! Upload a fundamentals CSV and keep the companies that pass a fixed
//! value-investing screen: ROE > 12, Debt to Equity < 0.5, ROCE > 15 and
//! PEG Ratio < 1.

pub mod config;
pub mod data;
pub mod error;
pub mod web;

pub use error::{Result, ScreenError};
