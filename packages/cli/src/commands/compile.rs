use anyhow::{anyhow, Context, Result};
use clap::Args;
use colored::Colorize;
use formstudio_compiler_css::compile_stylesheet;
use formstudio_compiler_html::{compile_document, CompileOptions};
use formstudio_compiler_js::compile_validation_script;
use formstudio_model::{Document, Snapshot};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct CompileArgs {
    /// Snapshot JSON file exported from the designer
    pub input: PathBuf,

    /// Target format (html, css, js, all)
    #[arg(short, long, default_value = "all")]
    pub target: String,

    /// Output directory
    #[arg(short, long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Output to stdout instead of files
    #[arg(long)]
    pub stdout: bool,
}

pub fn compile(args: CompileArgs) -> Result<()> {
    let json = fs::read_to_string(&args.input)
        .with_context(|| format!("cannot read snapshot: {}", args.input.display()))?;
    let snapshot = Snapshot::from_json(&json)?;
    let document = Document::from_snapshot(&snapshot)?;

    let options = CompileOptions {
        title: (!snapshot.title.is_empty()).then(|| snapshot.title.clone()),
        ..Default::default()
    };

    let artifacts: Vec<(&str, String)> = match args.target.as_str() {
        "html" => vec![("form.html", compile_document(&document, &options))],
        "css" => vec![("form-styles.css", compile_stylesheet())],
        "js" => vec![("form-validation.js", compile_validation_script())],
        "all" => vec![
            ("form.html", compile_document(&document, &options)),
            ("form-styles.css", compile_stylesheet()),
            ("form-validation.js", compile_validation_script()),
        ],
        other => {
            return Err(anyhow!(
                "Invalid target: {}. Use: html, css, js or all",
                other
            ));
        }
    };

    if args.stdout {
        for (_, content) in &artifacts {
            println!("{content}");
        }
        return Ok(());
    }

    println!("{}", "🔨 Compiling form snapshot...".bright_blue().bold());
    println!(
        "Found {} standalone elements",
        document.elements.len()
    );

    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("cannot create output directory: {}", args.out_dir.display()))?;

    for (name, content) in &artifacts {
        let path = args.out_dir.join(name);
        fs::write(&path, content)
            .with_context(|| format!("cannot write {}", path.display()))?;
        println!("  {} {}", "✓".green(), path.display());
    }

    println!();
    println!(
        "{} Compiled {} artifacts successfully",
        "✅".green(),
        artifacts.len()
    );

    Ok(())
}
