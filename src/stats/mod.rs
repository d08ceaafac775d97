//! Statistics module - Summary figures for the visible window

mod calculator;

pub use calculator::{SliceSummary, StatsCalculator, WindowSummary};
