//! Command-line helpers around the render core: PNG export of finished
//! buffers and a synthetic demo survey for exercising every render mode
//! without a live data provider.

pub mod export;
pub mod synth;
