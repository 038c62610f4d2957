//! Projection engine turning intake records into three-point pension projections

mod engine;
mod result;

pub use engine::{ProjectionConfig, ProjectionEngine};
pub use result::{ChartData, ProjectionResult, StatutoryPension, TimeSeries};
