use anyhow::Result;

use crate::cli::InitPreset;
use jvm_interface_auditor::init;

pub fn handle_init(preset: InitPreset) -> Result<()> {
    let preset = match preset {
        InitPreset::Jdk => init::InitPreset::Jdk,
        InitPreset::Strict => init::InitPreset::Strict,
    };
    init::generate_config(preset)
}
