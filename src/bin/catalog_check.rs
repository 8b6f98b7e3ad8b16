use anyhow::{bail, Context, Result};
use fairlink::{report, Catalog};
use std::{env, fs};

/// Load a catalog from the given YAML path, or fall back to the built-in
/// document when no path is supplied.
fn load_catalog(path: Option<&str>) -> Result<Catalog> {
    match path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("reading catalog file `{}`", path))?;
            Catalog::from_yaml_str(&raw)
        }
        None => Ok(Catalog::builtin().clone()),
    }
}

fn main() -> Result<()> {
    // 1) Load: explicit YAML path from the first CLI argument, or built-in.
    let arg = env::args().nth(1);
    let catalog = load_catalog(arg.as_deref())?;
    if catalog.is_empty() {
        bail!("catalog has no datasets");
    }

    // 2) Dry-render to surface parse and labeling defects.
    let lines = report::render(&catalog).context("catalog failed to render")?;

    // 3) Per-dataset summary.
    for dataset in &catalog.datasets {
        let labels = if dataset.frequencies_mhz.is_empty() {
            String::new()
        } else {
            format!(", frequencies {:?} MHz", dataset.frequencies_mhz)
        };
        println!(
            "→ {}: {} samples{}",
            dataset.category.as_str(),
            dataset.samples.len(),
            labels
        );
    }
    println!(
        "→ catalog OK: {} datasets, {} report lines",
        catalog.len(),
        lines.len()
    );

    // 4) Emit the normalized catalog back as YAML.
    let yaml = serde_yaml::to_string(&catalog).context("serializing catalog to YAML")?;
    println!("---");
    print!("{}", yaml);

    Ok(())
}
