use std::{
    fs, io,
    path::{Path, PathBuf},
};

use json::JsonValue;
use tracing::info;

use crate::model::ids::Region;

const INDENT: u16 = 4;

pub fn raw_snapshot_path(dir: &Path, region: &Region) -> PathBuf {
    dir.join(format!("{}_raw_data.json", region))
}

/// Stores the league document exactly as received, pretty printed.
pub fn write_raw_snapshot(json: &JsonValue, region: &Region, dir: &Path) -> io::Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = raw_snapshot_path(dir, region);
    fs::write(&path, json.pretty(INDENT))?;
    info!(path = %path.display(), "raw league data saved");
    Ok(path)
}
