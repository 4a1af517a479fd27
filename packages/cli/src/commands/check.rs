use anyhow::{anyhow, Context, Result};
use clap::Args;
use colored::Colorize;
use formstudio_model::{Document, Snapshot};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Snapshot JSON file to validate
    pub input: PathBuf,
}

pub fn check(args: CheckArgs) -> Result<()> {
    let json = fs::read_to_string(&args.input)
        .with_context(|| format!("cannot read snapshot: {}", args.input.display()))?;
    let snapshot = Snapshot::from_json(&json)?;
    let document = Document::from_snapshot(&snapshot)?;
    document
        .verify_containment()
        .map_err(|reason| anyhow!("snapshot violates document invariants: {reason}"))?;

    println!("{}", "🔍 Checking form snapshot...".bright_blue().bold());
    if snapshot.title.is_empty() {
        println!("  Title:    {}", "(none)".yellow());
    } else {
        println!("  Title:    {}", snapshot.title);
    }
    println!("  Created:  {}", snapshot.created.to_rfc3339());
    println!("  Elements: {}", document.elements.len());

    let mut by_kind: BTreeMap<&str, usize> = BTreeMap::new();
    for element in &document.elements {
        *by_kind.entry(element.kind.as_str()).or_default() += 1;
    }
    for (kind, count) in by_kind {
        println!("    {kind}: {count}");
    }

    println!();
    println!("{} Snapshot is valid", "✅".green());
    println!(
        "{}",
        "Note: snapshots carry standalone elements only; row layouts are not part of the format."
            .dimmed()
    );

    Ok(())
}
