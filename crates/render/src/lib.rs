//! Progressive surface-map rendering.
//!
//! A [`MapView`] turns sparse survey data into a raster one row per call,
//! so a full-map render amortizes across the host's frame loop without
//! ever blocking it. Projection math lives in `foundation`; survey data
//! access goes through the `survey` contract.

pub mod budget;
pub mod buffer;
pub mod legend;
pub mod palette;
pub mod view;

pub use budget::*;
pub use buffer::*;
pub use legend::*;
pub use palette::*;
pub use view::*;
