mod prompts;

use crate::interfaces::CaptionModel;
use crate::scene::SceneDescription;
use crate::subject::SubjectKind;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// The three caption tones returned by one generation call. Parsing is
/// all-or-nothing: extraneous keys or a missing tone fail the whole parse,
/// so a result can never silently mix real and placeholder text.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CaptionVariants {
    pub safe: String,
    pub medium: String,
    pub bold: String,
}

impl CaptionVariants {
    /// Fixed fallback shown when generation fails or returns an unusable
    /// payload; the pipeline always hands the caller something displayable.
    #[must_use]
    pub fn missing() -> Self {
        Self {
            safe: placeholder("safe"),
            medium: placeholder("medium"),
            bold: placeholder("bold"),
        }
    }
}

fn placeholder(variant: &str) -> String {
    format!("{variant} caption missing")
}

/// Renders the selected template, calls the generation service, and parses
/// the response. Past the content gate this never fails: every error class
/// is downgraded to placeholder variants.
pub struct CaptionComposer<M> {
    model: M,
}

impl<M: CaptionModel> CaptionComposer<M> {
    pub const fn new(model: M) -> Self {
        Self { model }
    }

    pub async fn compose(
        &self,
        scene: &SceneDescription,
        subject: SubjectKind,
        query: Option<&str>,
    ) -> CaptionVariants {
        let prompt = prompts::build_prompt(scene, subject, query);
        let raw = match self.model.generate(prompts::SYSTEM, &prompt).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!("caption generation failed: {e}. Falling back to placeholders");
                return CaptionVariants::missing();
            }
        };
        parse_variants(&raw).unwrap_or_else(|| {
            warn!("could not parse caption variants. Raw model output: {raw}");
            CaptionVariants::missing()
        })
    }

    /// Re-invoke composition from scratch with the same inputs. Always a
    /// fresh generation call; no state is reused between attempts.
    pub async fn retry(
        &self,
        scene: &SceneDescription,
        subject: SubjectKind,
        query: Option<&str>,
    ) -> CaptionVariants {
        self.compose(scene, subject, query).await
    }
}

/// Models routinely wrap the requested JSON in markdown code fences;
/// strip them before parsing.
fn strip_code_fences(raw: &str) -> String {
    raw.replace("```json", "").replace("```", "").trim().to_string()
}

fn parse_variants(raw: &str) -> Option<CaptionVariants> {
    serde_json::from_str(&strip_code_fences(raw)).ok()
}
