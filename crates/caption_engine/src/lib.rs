#![deny(clippy::unwrap_used)]
#![allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

mod compose;
mod interfaces;
mod pipeline;
mod policy;
mod scene;
mod settings;
mod subject;

pub use compose::{CaptionComposer, CaptionVariants};
pub use interfaces::{CaptionModel, ImageAnnotator};
pub use pipeline::{CaptionOutcome, CaptionPipeline, CaptionRequest, PipelineError};
pub use policy::{ContentPolicy, PolicyDecision};
pub use scene::{
    FaceSummary, NamedColor, QualifyingFace, SafeContent, SceneDescription, name_color,
    name_dominant_colors, prioritize_labels, reduce, summarize_faces,
};
pub use settings::*;
pub use subject::{SubjectKind, classify};
