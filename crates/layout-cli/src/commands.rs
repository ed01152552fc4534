use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use layout_model::IgnoreRule;
use layout_persistence::{
    detect_shape, load_layout_bytes, load_layout_file, probe_envelope, save_layout_file,
};
use layout_presets::PresetLibrary;
use layout_stats::{StatisticsResult, calculate, count_buildings};

use crate::cli::{ConfigArgs, InfoArgs, MigrateArgs, StatsArgs};
use crate::settings::Settings;
use crate::types::{ConfigReport, InfoReport, MigrateReport, StatsReport};

pub fn run_info(args: &InfoArgs) -> Result<InfoReport> {
    let bytes =
        fs::read(&args.file).with_context(|| format!("read {}", args.file.display()))?;
    let shape = detect_shape(&bytes)?;
    let envelope = probe_envelope(&bytes)?;

    // Count objects even for other versions; info never refuses a file.
    let objects = match load_layout_bytes(&bytes, true) {
        Ok(layout) => Some(layout.len()),
        Err(error) => {
            warn!(%error, "Layout body could not be decoded");
            None
        }
    };

    Ok(InfoReport {
        path: args.file.clone(),
        shape,
        envelope,
        objects,
    })
}

pub fn run_stats(args: &StatsArgs, settings: &Settings) -> Result<StatsReport> {
    let span = info_span!("stats", file = %args.file.display());
    let _guard = span.enter();

    let force = args.force || settings.load.always_force;
    let layout = load_layout_file(&args.file, force)
        .with_context(|| format!("load {}", args.file.display()))?;

    let library = match args.presets.as_ref().or(settings.presets.buildings.as_ref()) {
        Some(path) => PresetLibrary::load(path, settings.presets.colors.as_deref())
            .with_context(|| format!("load presets from {}", path.display()))?,
        None => PresetLibrary::default(),
    };

    let rule = settings.ignore_rule();
    let include_roads = args.include_roads || settings.statistics.include_roads;
    let counted = layout
        .objects
        .iter()
        .filter(|object| !rule.is_ignored(object))
        .count();
    let statistics = calculate(Some(layout.objects.as_slice()), include_roads, &rule)
        .unwrap_or(StatisticsResult::EMPTY);
    let buildings = count_buildings(&layout.objects, &rule, &library);

    info!(
        objects = layout.len(),
        counted,
        efficiency = statistics.efficiency,
        "Computed statistics"
    );
    Ok(StatsReport {
        path: args.file.clone(),
        file_version: layout.file_version(),
        include_roads,
        counted,
        statistics,
        buildings,
    })
}

pub fn run_migrate(args: &MigrateArgs, settings: &Settings) -> Result<MigrateReport> {
    let span = info_span!("migrate", file = %args.file.display());
    let _guard = span.enter();

    let force = args.force || settings.load.always_force;
    let mut layout = load_layout_file(&args.file, force)
        .with_context(|| format!("load {}", args.file.display()))?;
    let from_version = layout.file_version();

    let output = args.output.clone().unwrap_or_else(|| args.file.clone());
    save_layout_file(&mut layout, &output)
        .with_context(|| format!("save {}", output.display()))?;

    Ok(MigrateReport {
        source: args.file.clone(),
        output,
        from_version,
        to_version: layout.file_version(),
        objects: layout.len(),
    })
}

pub fn run_config(args: &ConfigArgs, config: Option<&Path>) -> Result<ConfigReport> {
    let path = config.map_or_else(Settings::config_path, Path::to_path_buf);

    let created = args.init && !path.exists();
    if created {
        Settings::default().save_to(&path)?;
        info!("Wrote default settings to {}", path.display());
    }

    Ok(ConfigReport {
        settings: Settings::load_from(&path),
        path,
        created,
    })
}
