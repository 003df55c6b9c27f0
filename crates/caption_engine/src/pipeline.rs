use crate::compose::{CaptionComposer, CaptionVariants};
use crate::interfaces::{CaptionModel, ImageAnnotator};
use crate::policy::{ContentPolicy, PolicyDecision};
use crate::scene::{SceneDescription, reduce};
use crate::settings::{AppSettings, SceneSettings, SettingsError};
use crate::subject::{SubjectKind, classify};
use language_model::ChatClient;
use std::io::Cursor;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::info;
use vision_api::{VisionClient, VisionError};

/// One caption invocation: raw image bytes plus an optional free-text query.
/// The query is normalized (trimmed, length-capped) inside the pipeline.
#[derive(Debug, Clone)]
pub struct CaptionRequest {
    pub image: Vec<u8>,
    pub query: Option<String>,
}

impl CaptionRequest {
    #[must_use]
    pub const fn new(image: Vec<u8>) -> Self {
        Self { image, query: None }
    }

    #[must_use]
    pub fn with_query(image: Vec<u8>, query: &str) -> Self {
        Self {
            image,
            query: Some(query.to_string()),
        }
    }
}

/// Terminal result of one invocation. A block is a designed outcome, not an
/// error; its reason is the exact user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptionOutcome {
    Blocked { reason: String },
    Generated { variants: CaptionVariants },
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("image analysis failed: {0}")]
    Vision(#[from] VisionError),
    #[error("could not read image dimensions: {0}")]
    Image(#[from] image::ImageError),
    #[error("caption request cancelled")]
    Cancelled,
}

/// The linear request chain: annotate, reduce, gate, classify, compose.
/// Holds no cross-request state; concurrent invocations need no
/// coordination. The cancellation token is observed between stages so a
/// host can abandon a request it no longer cares about.
pub struct CaptionPipeline<A, M> {
    annotator: A,
    composer: CaptionComposer<M>,
    policy: ContentPolicy,
    scene_settings: SceneSettings,
    max_query_chars: usize,
}

impl CaptionPipeline<VisionClient, ChatClient> {
    /// Build the pipeline over the real service clients.
    ///
    /// # Errors
    /// * If a credential is blank.
    /// * If the configured deny list can't be compiled.
    pub fn from_settings(settings: &AppSettings) -> Result<Self, SettingsError> {
        settings.validate()?;
        let annotator = VisionClient::with_endpoint(&settings.vision.endpoint)
            .api_key(settings.vision.api_key.clone())
            .max_labels(settings.vision.max_labels)
            .max_objects(settings.vision.max_objects)
            .build();
        let model = ChatClient::with_base_url(&settings.generation.endpoint)
            .api_key(settings.generation.api_key.clone())
            .model(settings.generation.model.clone())
            .max_tokens(settings.generation.max_tokens)
            .temperature(settings.generation.temperature)
            .build();
        Self::new(annotator, model, settings)
    }
}

impl<A: ImageAnnotator, M: CaptionModel> CaptionPipeline<A, M> {
    pub fn new(annotator: A, model: M, settings: &AppSettings) -> Result<Self, SettingsError> {
        Ok(Self {
            annotator,
            composer: CaptionComposer::new(model),
            policy: ContentPolicy::new(settings.policy.clone())?,
            scene_settings: settings.scene.clone(),
            max_query_chars: settings.policy.max_query_chars,
        })
    }

    /// Run the full chain and return either the block reason or the caption
    /// variants. Analysis failures are fatal; generation failures are
    /// downgraded to placeholder variants inside composition.
    pub async fn caption(
        &self,
        request: &CaptionRequest,
        cancel: &CancellationToken,
    ) -> Result<CaptionOutcome, PipelineError> {
        let query = normalize_query(request.query.as_deref(), self.max_query_chars);
        let scene = self.analyze(request, cancel).await?;

        if cancel.is_cancelled() {
            return Err(PipelineError::Cancelled);
        }
        if let PolicyDecision::Blocked { reason } = self.policy.evaluate(&scene, query.as_deref())
        {
            return Ok(CaptionOutcome::Blocked { reason });
        }
        let subject = classify(&scene);
        info!(?subject, faces = scene.faces.count, "scene reduced and allowed");

        if cancel.is_cancelled() {
            return Err(PipelineError::Cancelled);
        }
        let variants = self.composer.compose(&scene, subject, query.as_deref()).await;
        Ok(CaptionOutcome::Generated { variants })
    }

    /// Annotate and reduce one image without gating or composing. Lets a
    /// host keep the scene around for [`Self::recompose`].
    pub async fn analyze(
        &self,
        request: &CaptionRequest,
        cancel: &CancellationToken,
    ) -> Result<SceneDescription, PipelineError> {
        let dimensions = read_dimensions(&request.image)?;
        if cancel.is_cancelled() {
            return Err(PipelineError::Cancelled);
        }
        let annotation = self.annotator.annotate(&request.image).await?;
        Ok(reduce(&annotation, dimensions, &self.scene_settings))
    }

    /// Fresh composition over an already analyzed scene. A new generation
    /// call every time; nothing is reused from earlier attempts.
    pub async fn recompose(
        &self,
        scene: &SceneDescription,
        query: Option<&str>,
    ) -> CaptionVariants {
        let query = query.and_then(|q| normalize_query(Some(q), self.max_query_chars));
        self.composer
            .retry(scene, classify(scene), query.as_deref())
            .await
    }
}

/// Trim the query and cap it at the configured char count; blank queries
/// collapse to no query at all.
fn normalize_query(query: Option<&str>, max_chars: usize) -> Option<String> {
    let trimmed = query?.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.chars().take(max_chars).collect())
}

fn read_dimensions(image: &[u8]) -> Result<(u32, u32), image::ImageError> {
    image::ImageReader::new(Cursor::new(image))
        .with_guessed_format()
        .map_err(image::ImageError::IoError)?
        .into_dimensions()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queries_are_capped_at_the_char_limit() {
        let long = "a".repeat(60);
        let normalized = normalize_query(Some(&long), 50).expect("some query");
        assert_eq!(normalized.chars().count(), 50);
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let long = "é".repeat(60);
        let normalized = normalize_query(Some(&long), 50).expect("some query");
        assert_eq!(normalized.chars().count(), 50);
        assert_eq!(normalized, "é".repeat(50));
    }

    #[test]
    fn blank_queries_collapse_to_none() {
        assert_eq!(normalize_query(None, 50), None);
        assert_eq!(normalize_query(Some(""), 50), None);
        assert_eq!(normalize_query(Some("   \t"), 50), None);
    }

    #[test]
    fn short_queries_pass_through_trimmed() {
        assert_eq!(
            normalize_query(Some("  describe the dog "), 50),
            Some("describe the dog".to_string())
        );
    }
}
