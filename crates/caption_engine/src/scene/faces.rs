use crate::settings::SceneSettings;
use serde::Serialize;
use vision_api::{FaceAnnotation, Likelihood};

/// A detected face that passed the area (and optional centrality) filter.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct QualifyingFace {
    /// Bounding-box area as a fraction of total image area.
    pub area_fraction: f64,
    /// Horizontal box center as a fraction of image width.
    pub center_x: f64,
}

/// Reduced face geometry for one image.
///
/// Invariants: `is_group_photo == (count > 1)`; `main_subject` is set iff
/// exactly one face qualifies, in which case `group_subjects` is empty.
#[derive(Debug, Serialize, Clone, Default, PartialEq)]
pub struct FaceSummary {
    pub count: usize,
    pub main_subject: Option<QualifyingFace>,
    pub group_subjects: Vec<QualifyingFace>,
    pub is_group_photo: bool,
    /// Hedged expression sentences for faces with a strong emotion signal.
    pub expressions: Vec<String>,
}

/// Filter detected faces down to the qualifying set and derive the
/// subject/group summary from what survives.
#[must_use]
pub fn summarize_faces(
    faces: &[FaceAnnotation],
    dimensions: (u32, u32),
    settings: &SceneSettings,
) -> FaceSummary {
    let qualifying: Vec<QualifyingFace> = faces
        .iter()
        .filter_map(|face| qualify(face, dimensions, settings))
        .collect();
    let expressions = describe_expressions(faces);

    let count = qualifying.len();
    let mut summary = FaceSummary {
        count,
        is_group_photo: count > 1,
        expressions,
        ..FaceSummary::default()
    };
    let mut qualifying = qualifying;
    if count == 1 {
        summary.main_subject = qualifying.pop();
    } else {
        summary.group_subjects = qualifying;
    }
    summary
}

fn qualify(
    face: &FaceAnnotation,
    (image_width, image_height): (u32, u32),
    settings: &SceneSettings,
) -> Option<QualifyingFace> {
    if image_width == 0 || image_height == 0 {
        return None;
    }
    let (x, _, width, height) = face.bounding_poly.extent();
    let image_area = f64::from(image_width) * f64::from(image_height);
    let area_fraction = f64::from(width) * f64::from(height) / image_area;
    if area_fraction < settings.min_face_area {
        return None;
    }

    let center_x = (f64::from(x) + f64::from(width) / 2.0) / f64::from(image_width);
    if settings.require_central_faces
        && !(settings.central_band_start..=settings.central_band_end).contains(&center_x)
    {
        return None;
    }

    Some(QualifyingFace {
        area_fraction,
        center_x,
    })
}

/// One hedged sentence per emotion that any face signals at `Likely` or
/// above. Deduplicated across faces, in a fixed emotion order.
fn describe_expressions(faces: &[FaceAnnotation]) -> Vec<String> {
    let strong = |likelihood: Likelihood| likelihood >= Likelihood::Likely;
    let mut sentences = Vec::new();
    if faces.iter().any(|f| strong(f.joy_likelihood)) {
        sentences.push("The person appears to possibly express joy".to_string());
    }
    if faces.iter().any(|f| strong(f.anger_likelihood)) {
        sentences.push("There is a possible expression of anger".to_string());
    }
    if faces.iter().any(|f| strong(f.sorrow_likelihood)) {
        sentences.push("The person might be expressing sorrow".to_string());
    }
    if faces.iter().any(|f| strong(f.surprise_likelihood)) {
        sentences.push("The person may appear surprised".to_string());
    }
    sentences
}
