use crate::commands::{AbsensiPaths, CmdMessage, CmdResult};
use crate::config::AbsensiConfig;
use crate::error::Result;
use std::fs;

pub fn run(paths: &AbsensiPaths) -> Result<CmdResult> {
    let dir = &paths.data_dir;
    fs::create_dir_all(dir)?;
    let config = AbsensiConfig::load(dir)?;
    config.save(dir)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Initialized absensi store at {}",
        dir.display()
    )));
    Ok(result.with_config(config))
}
