//! Reporting — revenue-per-minute performance aggregation

mod performance;

#[cfg(test)]
mod tests;

pub use performance::{
    BreedEarning, ComboRpm, MatrixRow, MonthPoint, PerformanceData, PerformanceKpis, SizePoint,
    build_performance_data,
};
