use async_trait::async_trait;
use language_model::{ChatClient, ChatResult};
use vision_api::{ImageAnnotation, VisionClient, VisionResult};

/// Seam over the vision-annotation call so the pipeline can be driven
/// without network access in tests.
#[async_trait]
pub trait ImageAnnotator: Send + Sync {
    async fn annotate(&self, image: &[u8]) -> VisionResult<ImageAnnotation>;
}

#[async_trait]
impl ImageAnnotator for VisionClient {
    async fn annotate(&self, image: &[u8]) -> VisionResult<ImageAnnotation> {
        VisionClient::annotate(self, image).await
    }
}

/// Seam over the caption-generation call.
#[async_trait]
pub trait CaptionModel: Send + Sync {
    async fn generate(&self, system: &str, prompt: &str) -> ChatResult<String>;
}

#[async_trait]
impl CaptionModel for ChatClient {
    async fn generate(&self, system: &str, prompt: &str) -> ChatResult<String> {
        self.chat(prompt).system(system).call().await
    }
}
