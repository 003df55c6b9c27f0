mod colors;
mod faces;
mod labels;

pub use colors::{NamedColor, name_color, name_dominant_colors};
pub use faces::{FaceSummary, QualifyingFace, summarize_faces};
pub use labels::prioritize_labels;

use crate::settings::SceneSettings;
use serde::Serialize;
use vision_api::{ImageAnnotation, Likelihood};

/// Structured, reduced view of one analyzed image. Created per request and
/// passed by reference through the policy, subject, and composition stages;
/// never persisted.
#[derive(Debug, Serialize, Clone, Default)]
pub struct SceneDescription {
    pub labels: Vec<String>,
    pub objects: Vec<String>,
    pub dominant_colors: Vec<NamedColor>,
    pub detected_text: String,
    pub faces: FaceSummary,
    pub safe_content: SafeContent,
    pub image_dimensions: (u32, u32),
}

/// The three safe-search axes the content policy screens on.
#[derive(Debug, Serialize, Clone, Copy, Default)]
pub struct SafeContent {
    pub adult: Likelihood,
    pub violence: Likelihood,
    pub racy: Likelihood,
}

/// Reduce one raw annotation set into a scene description.
///
/// Labels keep their upstream order; landmark names, web best-guess labels,
/// and web-entity descriptions longer than three characters are folded in
/// behind them as extra context.
#[must_use]
pub fn reduce(
    annotation: &ImageAnnotation,
    dimensions: (u32, u32),
    settings: &SceneSettings,
) -> SceneDescription {
    let mut labels: Vec<String> = annotation
        .label_annotations
        .iter()
        .map(|l| l.description.clone())
        .collect();
    for landmark in &annotation.landmark_annotations {
        push_unique(&mut labels, &landmark.description);
    }
    if let Some(web) = &annotation.web_detection {
        for guess in &web.best_guess_labels {
            push_unique(&mut labels, &guess.label);
        }
        for entity in web.web_entities.iter().filter(|e| e.description.len() > 3) {
            push_unique(&mut labels, &entity.description);
        }
    }

    let objects = annotation
        .localized_object_annotations
        .iter()
        .map(|o| o.name.clone())
        .collect();

    let dominant_colors = annotation
        .image_properties_annotation
        .as_ref()
        .map(|props| name_dominant_colors(&props.dominant_colors.colors))
        .unwrap_or_default();

    // The first text annotation carries the whole detected block.
    let detected_text = annotation
        .text_annotations
        .first()
        .map(|t| t.description.clone())
        .unwrap_or_default();

    let safe = annotation.safe_search_annotation;
    SceneDescription {
        labels,
        objects,
        dominant_colors,
        detected_text,
        faces: summarize_faces(&annotation.face_annotations, dimensions, settings),
        safe_content: SafeContent {
            adult: safe.adult,
            violence: safe.violence,
            racy: safe.racy,
        },
        image_dimensions: dimensions,
    }
}

fn push_unique(labels: &mut Vec<String>, candidate: &str) {
    if candidate.is_empty() {
        return;
    }
    if !labels.iter().any(|l| l.eq_ignore_ascii_case(candidate)) {
        labels.push(candidate.to_string());
    }
}
