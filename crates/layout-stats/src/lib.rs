//! Layout statistics.
//!
//! Measures a set of placed objects: the bounding box they span, how many
//! tiles the buildings themselves cover, and how efficiently the box is used.
//! Objects rejected by an [`IgnoreRule`](layout_model::IgnoreRule) are left
//! out, and roads only count toward covered tiles when asked to.
//!
//! Statistics never fail. They are shown opportunistically next to the
//! layout, so degenerate input yields `None` or [`StatisticsResult::EMPTY`]
//! instead of an error.

mod buildings;
mod result;
mod statistics;

pub use buildings::{BuildingCount, count_buildings};
pub use result::StatisticsResult;
pub use statistics::{Accumulator, calculate};
