use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use parrot_core::compose::TemplateKind;
use parrot_core::face::{FaceCropConfig, FaceDetector, NullDetector, RustfaceDetector};
use parrot_core::pipeline::config::{AnimationConfig, PipelineConfig};
use parrot_core::pipeline::{run_pipeline_reported, CropPath, PipelineStage, ProgressReporter};
use tracing::debug;

use crate::summary::print_generate_summary;

#[derive(Clone, Copy, ValueEnum)]
pub enum TemplateArg {
    A,
    B,
    C,
    D,
}

impl From<TemplateArg> for TemplateKind {
    fn from(arg: TemplateArg) -> Self {
        match arg {
            TemplateArg::A => TemplateKind::A,
            TemplateArg::B => TemplateKind::B,
            TemplateArg::C => TemplateKind::C,
            TemplateArg::D => TemplateKind::D,
        }
    }
}

#[derive(Args)]
pub struct GenerateArgs {
    /// Input photograph
    pub file: PathBuf,

    /// Pipeline config file (TOML); flags below are ignored when given
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Frame theme
    #[arg(long, value_enum, default_value = "a")]
    pub template: TemplateArg,

    /// Directory holding the frame assets
    #[arg(long, default_value = "assets/frames")]
    pub assets: PathBuf,

    /// SeetaFace detection model; without it the fallback resize runs
    #[arg(long)]
    pub model: Option<PathBuf>,

    /// Per-frame display duration in milliseconds
    #[arg(long, default_value = "60")]
    pub delay: u32,

    /// Output animation file
    #[arg(short, long, default_value = "avatar.gif")]
    pub output: PathBuf,
}

/// Drives the indicatif bar from pipeline stage transitions.
struct BarReporter {
    bar: ProgressBar,
}

impl ProgressReporter for BarReporter {
    fn begin_stage(&self, stage: PipelineStage, _total_items: Option<usize>) {
        self.bar.set_message(stage.to_string());
    }

    fn finish_stage(&self) {
        self.bar.inc(1);
    }
}

pub fn run(args: &GenerateArgs) -> Result<()> {
    let config = if let Some(ref config_path) = args.config {
        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config {}", config_path.display()))?;
        toml::from_str(&contents).context("Invalid pipeline config")?
    } else {
        build_config_from_args(args)
    };

    print_generate_summary(&config);

    let detector: Box<dyn FaceDetector> = match &config.face_model {
        Some(path) => Box::new(
            RustfaceDetector::from_model_path(path)
                .with_context(|| format!("Failed to load face model {}", path.display()))?,
        ),
        None => Box::new(NullDetector),
    };

    let bar = ProgressBar::new(7);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{msg:24} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );

    let artifact = run_pipeline_reported(&config, detector.as_ref(), &BarReporter { bar: bar.clone() })?;
    debug!(bytes = artifact.gif.len(), "Pipeline finished");

    bar.finish_with_message("Done");
    match artifact.crop_path {
        CropPath::Face => println!("\nFace crop path taken"),
        CropPath::Resized => println!("\nFallback resize path taken"),
    }
    println!("Animation saved to {}", config.output.display());

    Ok(())
}

fn build_config_from_args(args: &GenerateArgs) -> PipelineConfig {
    PipelineConfig {
        input: args.file.clone(),
        output: args.output.clone(),
        assets_dir: args.assets.clone(),
        template: args.template.into(),
        face_model: args.model.clone(),
        face: FaceCropConfig::default(),
        animation: AnimationConfig {
            frame_delay_ms: args.delay,
        },
    }
}
