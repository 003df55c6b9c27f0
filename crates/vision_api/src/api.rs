use crate::annotations::{AnnotateResponse, ImageAnnotation};
use base64::{Engine as _, engine::general_purpose};
use bon::bon;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum VisionError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("API error (status {status}): {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("image rejected by annotation service: {message}")]
    Annotation { message: String },
}

pub type VisionResult<T> = Result<T, VisionError>;

#[derive(Serialize)]
struct AnnotateRequest {
    requests: Vec<ImageRequest>,
}

#[derive(Serialize)]
struct ImageRequest {
    image: ImageContent,
    features: Vec<Feature>,
}

#[derive(Serialize)]
struct ImageContent {
    content: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Feature {
    #[serde(rename = "type")]
    kind: FeatureKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_results: Option<u32>,
}

#[derive(Serialize, Clone, Copy)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
enum FeatureKind {
    LabelDetection,
    FaceDetection,
    ImageProperties,
    ObjectLocalization,
    TextDetection,
    LandmarkDetection,
    WebDetection,
}

/// Client for a vision-annotation endpoint. One `annotate` call submits one
/// image and returns its full per-feature annotation set.
#[derive(Clone)]
pub struct VisionClient {
    http: Client,
    endpoint: String,
    api_key: String,
    max_labels: u32,
    max_objects: u32,
}

#[bon]
impl VisionClient {
    /// Create a vision client.
    ///
    /// # Panics
    /// if the underlying HTTP client can't be created.
    #[builder(start_fn = with_endpoint)]
    #[must_use]
    pub fn new(
        #[builder(start_fn)] endpoint: &str,
        api_key: String,
        max_labels: Option<u32>,
        max_objects: Option<u32>,
    ) -> Self {
        Self {
            http: Client::builder()
                .connect_timeout(Duration::from_secs(5))
                .timeout(Duration::from_secs(30))
                .build()
                .expect("Failed to create HTTP client"),
            endpoint: endpoint.to_string(),
            api_key,
            max_labels: max_labels.unwrap_or(20),
            max_objects: max_objects.unwrap_or(10),
        }
    }

    /// Submit one image for annotation and decode the per-feature result.
    ///
    /// # Errors
    /// * If the POST request can't be made.
    /// * If a non-success status is received.
    /// * If the body can't be decoded.
    /// * If the service attaches an error to the image instead of annotations.
    pub async fn annotate(&self, image: &[u8]) -> VisionResult<ImageAnnotation> {
        let request = AnnotateRequest {
            requests: vec![ImageRequest {
                image: ImageContent {
                    content: general_purpose::STANDARD.encode(image),
                },
                features: self.features(),
            }],
        };

        debug!("annotating image ({} bytes)", image.len());
        let url = format!("{}?key={}", self.endpoint, self.api_key);
        let response = self.http.post(&url).json(&request).send().await?;
        if !response.status().is_success() {
            return Err(VisionError::Api {
                status: response.status(),
                body: response.text().await.unwrap_or_default(),
            });
        }

        let decoded: AnnotateResponse = response.json().await?;
        let annotation = decoded.responses.into_iter().next().unwrap_or_default();
        if let Some(error) = annotation.error {
            return Err(VisionError::Annotation {
                message: error.message,
            });
        }
        Ok(annotation)
    }

    fn features(&self) -> Vec<Feature> {
        let capped = |kind, max_results| Feature {
            kind,
            max_results: Some(max_results),
        };
        let plain = |kind| Feature {
            kind,
            max_results: None,
        };
        vec![
            capped(FeatureKind::LabelDetection, self.max_labels),
            plain(FeatureKind::FaceDetection),
            plain(FeatureKind::ImageProperties),
            capped(FeatureKind::ObjectLocalization, self.max_objects),
            plain(FeatureKind::TextDetection),
            plain(FeatureKind::LandmarkDetection),
            plain(FeatureKind::WebDetection),
        ]
    }
}
