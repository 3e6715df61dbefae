use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::{FACE_POSITIONS, FRAME_COUNT};
use crate::error::{ParrotError, Result};
use crate::io::image_io::load_raster;
use crate::raster::Raster;

/// Key of a built-in frame theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKind {
    #[default]
    A,
    B,
    C,
    D,
}

impl TemplateKind {
    /// Asset subdirectory name for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::A => "a",
            Self::B => "b",
            Self::C => "c",
            Self::D => "d",
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateKind {
    type Err = ParrotError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "a" => Ok(Self::A),
            "b" => Ok(Self::B),
            "c" => Ok(Self::C),
            "d" => Ok(Self::D),
            other => Err(ParrotError::Template(format!(
                "Unknown template kind '{other}' (expected a, b, c or d)"
            ))),
        }
    }
}

/// A themed, ordered set of background frames plus one face placement
/// offset per position index.
#[derive(Clone, Debug)]
pub struct FrameTemplate {
    frames: Vec<Raster>,
    positions: [(i64, i64); FRAME_COUNT],
}

impl FrameTemplate {
    /// Build a template from in-memory frames and offsets. The frame
    /// count is a hard precondition: templates always carry exactly
    /// [`FRAME_COUNT`] frames.
    pub fn from_parts(frames: Vec<Raster>, positions: [(i64, i64); FRAME_COUNT]) -> Result<Self> {
        if frames.len() != FRAME_COUNT {
            return Err(ParrotError::Template(format!(
                "Template requires exactly {FRAME_COUNT} frames (got {})",
                frames.len()
            )));
        }
        Ok(Self { frames, positions })
    }

    /// Load the frames of a built-in template from an asset directory
    /// laid out as `<dir>/<kind>/1.png` .. `<dir>/<kind>/6.png`.
    /// Missing or undecodable assets are a configuration error.
    pub fn load(assets_dir: &Path, kind: TemplateKind) -> Result<Self> {
        let theme_dir = assets_dir.join(kind.as_str());
        let mut frames = Vec::with_capacity(FRAME_COUNT);
        for index in 1..=FRAME_COUNT {
            let path = theme_dir.join(format!("{index}.png"));
            let frame = load_raster(&path).map_err(|e| {
                ParrotError::Template(format!(
                    "Template '{kind}' frame {index} ({}): {e}",
                    path.display()
                ))
            })?;
            frames.push(frame);
        }
        Self::from_parts(frames, FACE_POSITIONS)
    }

    pub fn frames(&self) -> &[Raster] {
        &self.frames
    }

    /// Placement offset (x, y) for the given position index.
    pub fn position(&self, index: usize) -> (i64, i64) {
        self.positions[index]
    }

    /// Frames zipped with their placement offsets, in template order.
    pub fn iter(&self) -> impl Iterator<Item = (&Raster, (i64, i64))> {
        self.frames.iter().zip(self.positions.iter().copied())
    }
}
