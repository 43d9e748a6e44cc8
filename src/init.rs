use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::config::CONFIG_FILE;

#[derive(Debug, Clone)]
pub enum InitPreset {
    /// Exclude the JDK's own namespaces, flag everything else
    Jdk,
    /// No exclusions at all
    Strict,
}

pub fn generate_config(preset: InitPreset) -> Result<()> {
    generate_config_at_path(CONFIG_FILE, preset)
}

pub fn generate_config_at_path<P: AsRef<Path>>(path: P, preset: InitPreset) -> Result<()> {
    let config_path = path.as_ref();

    if config_path.exists() {
        return Err(anyhow::anyhow!(
            "{} already exists. Remove it first to re-initialize.",
            config_path.display()
        ));
    }

    fs::write(config_path, preset_config(preset))?;
    println!("✅ Wrote {}", config_path.display());

    Ok(())
}

fn preset_config(preset: InitPreset) -> &'static str {
    match preset {
        InitPreset::Jdk => {
            r#"# interface-audit configuration
# Flags internal types leaking through public/protected signatures.

# Directory searched for compiled classes (defaults to the current directory)
# classes = "build/classes"

format = "table"
fail_on_violations = true

# Globs for types that may appear in public signatures:
#   *  matches within one package segment
#   ** matches across segments
exclusions = [
    "java.**",
    "javax.**",
    "jdk.**",
]
"#
        }
        InitPreset::Strict => {
            r#"# interface-audit configuration
# Strict preset: every object type in a public signature is flagged.
# Add exclusions for the types your API is allowed to expose.

format = "table"
fail_on_violations = true

exclusions = []
"#
        }
    }
}
