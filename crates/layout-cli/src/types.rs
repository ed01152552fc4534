use std::path::PathBuf;

use layout_model::VersionEnvelope;
use layout_persistence::LayoutShape;
use layout_stats::{BuildingCount, StatisticsResult};

use crate::settings::Settings;

#[derive(Debug)]
pub struct InfoReport {
    pub path: PathBuf,
    pub shape: LayoutShape,
    pub envelope: Option<VersionEnvelope>,
    /// Object count, if the body decodes.
    pub objects: Option<usize>,
}

#[derive(Debug)]
pub struct StatsReport {
    pub path: PathBuf,
    pub file_version: u32,
    pub include_roads: bool,
    /// Objects left after the ignore rule.
    pub counted: usize,
    pub statistics: StatisticsResult,
    pub buildings: Vec<BuildingCount>,
}

#[derive(Debug)]
pub struct MigrateReport {
    pub source: PathBuf,
    pub output: PathBuf,
    pub from_version: u32,
    pub to_version: u32,
    pub objects: usize,
}

#[derive(Debug)]
pub struct ConfigReport {
    pub path: PathBuf,
    pub created: bool,
    pub settings: Settings,
}
