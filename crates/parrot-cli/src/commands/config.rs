use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use parrot_core::compose::TemplateKind;
use parrot_core::face::FaceCropConfig;
use parrot_core::pipeline::config::{AnimationConfig, PipelineConfig};

#[derive(Args)]
pub struct ConfigArgs {
    /// Write config to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Print or save a full default PipelineConfig as TOML.
pub fn run(args: &ConfigArgs) -> Result<()> {
    let config = PipelineConfig {
        input: PathBuf::from("input.jpg"),
        output: PathBuf::from("avatar.gif"),
        assets_dir: PathBuf::from("assets/frames"),
        template: TemplateKind::default(),
        face_model: None,
        face: FaceCropConfig::default(),
        animation: AnimationConfig::default(),
    };

    let toml_str = toml::to_string_pretty(&config).context("Failed to serialize config")?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, &toml_str)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Config written to {}", path.display());
        }
        None => print!("{toml_str}"),
    }

    Ok(())
}
