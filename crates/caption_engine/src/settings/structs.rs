use serde::Deserialize;
use vision_api::Likelihood;

/// Overall pipeline configuration structure.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct AppSettings {
    #[serde(default)]
    pub vision: VisionSettings,
    #[serde(default)]
    pub generation: GenerationSettings,
    #[serde(default)]
    pub scene: SceneSettings,
    #[serde(default)]
    pub policy: PolicySettings,
}

/// Configuration for the vision-annotation service.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct VisionSettings {
    pub endpoint: String,
    pub api_key: String,
    pub max_labels: u32,
    pub max_objects: u32,
}

impl Default for VisionSettings {
    fn default() -> Self {
        Self {
            endpoint: "https://vision.googleapis.com/v1/images:annotate".to_string(),
            api_key: String::new(),
            max_labels: 20,
            max_objects: 10,
        }
    }
}

/// Configuration for the caption-generation service.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct GenerationSettings {
    pub endpoint: String,
    pub api_key: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            endpoint: "https://api.openai.com".to_string(),
            api_key: String::new(),
            model: "gpt-4o-mini".to_string(),
            max_tokens: 100,
            temperature: 0.7,
        }
    }
}

/// Thresholds for reducing raw face geometry into the scene description.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SceneSettings {
    /// Minimum bounding-box area as a fraction of total image area for a
    /// face to count toward subject/group determination.
    pub min_face_area: f64,
    /// When set, faces whose horizontal box center falls outside the
    /// central band are discarded as incidental background faces.
    pub require_central_faces: bool,
    pub central_band_start: f64,
    pub central_band_end: f64,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            min_face_area: 0.002,
            require_central_faces: false,
            central_band_start: 0.30,
            central_band_end: 0.70,
        }
    }
}

/// Content-safety policy data. Versioned configuration, not code: the
/// deny list, threshold, and user-facing messages are expected to change
/// between releases without touching the pipeline.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct PolicySettings {
    /// Ordinal likelihood at or above which an image axis blocks captioning.
    pub block_threshold: Likelihood,
    /// Free-text queries longer than this are truncated before evaluation.
    pub max_query_chars: usize,
    pub image_blocked_message: String,
    pub query_blocked_message: String,
    /// Matched as whole words, case-insensitively, against the user query.
    pub denied_terms: Vec<String>,
}

impl Default for PolicySettings {
    fn default() -> Self {
        Self {
            block_threshold: Likelihood::Likely,
            max_query_chars: 50,
            image_blocked_message:
                "This photo can't be captioned. Please pick a different one.".to_string(),
            query_blocked_message:
                "Sorry, we can't write a caption for that request. Try different wording."
                    .to_string(),
            denied_terms: [
                "sexy", "nude", "naked", "hot", "slut", "whore", "bitch", "hoe", "thot",
                "boobs", "tits", "ass", "booty", "porn", "horny", "strip", "undress",
                "lingerie", "milf",
            ]
            .iter()
            .map(ToString::to_string)
            .collect(),
        }
    }
}
