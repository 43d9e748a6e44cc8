use anyhow::{Context, Result};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::OutputFormat;
use jvm_interface_auditor::config::load_config;
use jvm_interface_auditor::output::{create_report, format_table_output, ClassAudit};
use jvm_interface_auditor::{classfile, surface, ExclusionSet};

pub fn handle_check(
    path: Option<PathBuf>,
    exclude: Vec<String>,
    format: Option<OutputFormat>,
    output: Option<PathBuf>,
    quiet: bool,
    verbose: bool,
    exit_zero: bool,
) -> Result<()> {
    // Load configuration from interface-audit.toml
    let config = load_config()?;

    // CLI exclusions extend the configured set
    let mut exclusions = config.exclusions.clone();
    exclusions.extend(exclude);
    let exclusion_set = ExclusionSet::compile(&exclusions);

    // CLI path overrides the configured classes directory
    let root = path
        .or_else(|| config.classes.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."));

    let class_files = find_class_files(&root)?;
    if class_files.is_empty() && !quiet {
        eprintln!("No .class files found under {}", root.display());
    }

    // Each class file is an independent check; the compiled exclusion set is
    // shared read-only across workers
    let classes: Vec<ClassAudit> = class_files
        .par_iter()
        .map(|path| audit_class_file(path, &exclusion_set))
        .collect::<Result<Vec<_>>>()?;

    let report = create_report(classes);

    if report.summary.total_violations > 0 && !quiet {
        eprintln!(
            "Interface leakage found: {} violations in {} of {} classes",
            report.summary.total_violations,
            report.summary.classes_with_violations,
            report.summary.classes_scanned
        );
    }

    // Determine output format
    let format = format.unwrap_or_else(|| match config.format.as_deref() {
        Some("json") => OutputFormat::Json,
        _ => OutputFormat::Table,
    });

    // Generate output
    let output_content = match format {
        OutputFormat::Json => serde_json::to_string_pretty(&report)?,
        OutputFormat::Table => format_table_output(&report, verbose),
    };

    match output {
        Some(path) => fs::write(path, output_content)?,
        None => {
            if !quiet {
                println!("{}", output_content);
            }
        }
    }

    if report.summary.total_violations > 0
        && !exit_zero
        && config.fail_on_violations.unwrap_or(true)
    {
        std::process::exit(1);
    }

    Ok(())
}

/// Recursively discover .class files, sorted for deterministic report order.
fn find_class_files(root: &Path) -> Result<Vec<PathBuf>> {
    let pattern = format!("{}/**/*.class", root.display());
    let mut paths: Vec<PathBuf> = glob::glob(&pattern)
        .with_context(|| format!("Invalid search path {}", root.display()))?
        .collect::<std::result::Result<Vec<_>, _>>()
        .context("Failed to list class files")?;
    paths.sort();
    Ok(paths)
}

fn audit_class_file(path: &Path, exclusions: &ExclusionSet) -> Result<ClassAudit> {
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let class = classfile::parse(&bytes)
        .with_context(|| format!("Failed to decode {}", path.display()))?;
    let occurrences = surface::scan(&class, exclusions)
        .with_context(|| format!("Failed to audit {}", path.display()))?;
    Ok(ClassAudit {
        path: path.display().to_string(),
        class_name: class.class_name(),
        package: class.package_name(),
        occurrences,
    })
}
