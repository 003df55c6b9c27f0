use serde::{Deserialize, Serialize};

/// Top-level payload of an `images:annotate` call. One entry per submitted
/// image; this client submits exactly one.
#[derive(Debug, Deserialize, Default)]
pub struct AnnotateResponse {
    #[serde(default)]
    pub responses: Vec<ImageAnnotation>,
}

/// Per-feature annotations for a single image. Every field defaults to empty
/// when the service omits it, so downstream code never sees a missing key.
#[derive(Debug, Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ImageAnnotation {
    #[serde(default)]
    pub label_annotations: Vec<EntityAnnotation>,
    #[serde(default)]
    pub face_annotations: Vec<FaceAnnotation>,
    #[serde(default)]
    pub localized_object_annotations: Vec<LocalizedObjectAnnotation>,
    #[serde(default)]
    pub text_annotations: Vec<EntityAnnotation>,
    #[serde(default)]
    pub landmark_annotations: Vec<EntityAnnotation>,
    #[serde(default)]
    pub safe_search_annotation: SafeSearchAnnotation,
    pub image_properties_annotation: Option<ImagePropertiesAnnotation>,
    pub web_detection: Option<WebDetection>,
    pub error: Option<AnnotationStatus>,
}

/// Error the service attaches to a single image instead of annotations.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct AnnotationStatus {
    #[serde(default)]
    pub code: i32,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct EntityAnnotation {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub score: f32,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct LocalizedObjectAnnotation {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub score: f32,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct FaceAnnotation {
    #[serde(default)]
    pub bounding_poly: BoundingPoly,
    #[serde(default)]
    pub detection_confidence: f32,
    #[serde(default)]
    pub joy_likelihood: Likelihood,
    #[serde(default)]
    pub anger_likelihood: Likelihood,
    #[serde(default)]
    pub sorrow_likelihood: Likelihood,
    #[serde(default)]
    pub surprise_likelihood: Likelihood,
}

/// Four-vertex bounding polygon in pixel coordinates.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct BoundingPoly {
    #[serde(default)]
    pub vertices: Vec<Vertex>,
}

/// The service omits `x`/`y` entirely when a coordinate is zero.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq)]
pub struct Vertex {
    #[serde(default)]
    pub x: i32,
    #[serde(default)]
    pub y: i32,
}

impl BoundingPoly {
    /// Axis-aligned extent of the polygon as `(min_x, min_y, width, height)`.
    /// Empty polygons collapse to a zero-sized box at the origin.
    #[must_use]
    pub fn extent(&self) -> (i32, i32, i32, i32) {
        let Some(first) = self.vertices.first() else {
            return (0, 0, 0, 0);
        };
        let mut min = *first;
        let mut max = *first;
        for v in &self.vertices {
            min.x = min.x.min(v.x);
            min.y = min.y.min(v.y);
            max.x = max.x.max(v.x);
            max.y = max.y.max(v.y);
        }
        (min.x, min.y, max.x - min.x, max.y - min.y)
    }
}

/// Ordinal confidence buckets used by face expressions and safe-search axes.
/// Ordering follows the wire order, so threshold checks can compare directly.
#[derive(
    Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Likelihood {
    #[default]
    Unknown,
    VeryUnlikely,
    Unlikely,
    Possible,
    Likely,
    VeryLikely,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default)]
#[serde(rename_all = "camelCase")]
pub struct SafeSearchAnnotation {
    #[serde(default)]
    pub adult: Likelihood,
    #[serde(default)]
    pub spoof: Likelihood,
    #[serde(default)]
    pub medical: Likelihood,
    #[serde(default)]
    pub violence: Likelihood,
    #[serde(default)]
    pub racy: Likelihood,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ImagePropertiesAnnotation {
    #[serde(default)]
    pub dominant_colors: DominantColorsAnnotation,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct DominantColorsAnnotation {
    #[serde(default)]
    pub colors: Vec<ColorInfo>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ColorInfo {
    #[serde(default)]
    pub color: RgbColor,
    #[serde(default)]
    pub score: f32,
    #[serde(default)]
    pub pixel_fraction: f32,
}

/// Channels arrive as numbers in 0..=255; omitted channels are zero.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default)]
pub struct RgbColor {
    #[serde(default)]
    pub red: f32,
    #[serde(default)]
    pub green: f32,
    #[serde(default)]
    pub blue: f32,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct WebDetection {
    #[serde(default)]
    pub web_entities: Vec<WebEntity>,
    #[serde(default)]
    pub best_guess_labels: Vec<BestGuessLabel>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct WebEntity {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub score: f32,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct BestGuessLabel {
    #[serde(default)]
    pub label: String,
}
