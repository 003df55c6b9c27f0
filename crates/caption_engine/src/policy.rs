use crate::scene::SceneDescription;
use crate::settings::PolicySettings;
use regex::{Regex, RegexBuilder};
use tracing::info;

/// Outcome of the content gate. `Blocked` is a designed terminal state, not
/// an error: the reason is the exact user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolicyDecision {
    Allowed,
    Blocked { reason: String },
}

/// Screens a scene and an optional user query against the configured safety
/// policy. Both checks are advisory filters over upstream confidence scores
/// and a static term list, so all data lives in [`PolicySettings`] and can
/// be revised without touching this code.
pub struct ContentPolicy {
    settings: PolicySettings,
    denied_terms: Option<Regex>,
}

impl ContentPolicy {
    pub fn new(settings: PolicySettings) -> Result<Self, regex::Error> {
        let denied_terms = if settings.denied_terms.is_empty() {
            None
        } else {
            let alternation = settings
                .denied_terms
                .iter()
                .map(|term| regex::escape(term))
                .collect::<Vec<_>>()
                .join("|");
            Some(
                RegexBuilder::new(&format!(r"\b(?:{alternation})\b"))
                    .case_insensitive(true)
                    .build()?,
            )
        };
        Ok(Self {
            settings,
            denied_terms,
        })
    }

    /// Evaluate the image first, then the query. Either block aborts the
    /// whole request; a caption is never generated from partially allowed
    /// input.
    #[must_use]
    pub fn evaluate(&self, scene: &SceneDescription, query: Option<&str>) -> PolicyDecision {
        let safe = &scene.safe_content;
        let threshold = self.settings.block_threshold;
        if safe.adult >= threshold || safe.violence >= threshold || safe.racy >= threshold {
            info!(
                adult = ?safe.adult,
                violence = ?safe.violence,
                racy = ?safe.racy,
                "image blocked by safe-content screening"
            );
            return PolicyDecision::Blocked {
                reason: self.settings.image_blocked_message.clone(),
            };
        }

        if query.is_some_and(|q| self.flags_query(q)) {
            info!("query blocked by deny-list screening");
            return PolicyDecision::Blocked {
                reason: self.settings.query_blocked_message.clone(),
            };
        }

        PolicyDecision::Allowed
    }

    fn flags_query(&self, query: &str) -> bool {
        self.denied_terms
            .as_ref()
            .is_some_and(|re| re.is_match(query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::SafeContent;
    use rstest::rstest;
    use vision_api::Likelihood;

    fn policy() -> ContentPolicy {
        ContentPolicy::new(PolicySettings::default()).expect("valid default policy")
    }

    fn scene_with(adult: Likelihood, violence: Likelihood, racy: Likelihood) -> SceneDescription {
        SceneDescription {
            safe_content: SafeContent {
                adult,
                violence,
                racy,
            },
            ..SceneDescription::default()
        }
    }

    #[rstest]
    #[case(Likelihood::VeryUnlikely, Likelihood::Unlikely, Likelihood::Possible)]
    #[case(Likelihood::Unknown, Likelihood::Unknown, Likelihood::Unknown)]
    fn clean_images_are_allowed(
        #[case] adult: Likelihood,
        #[case] violence: Likelihood,
        #[case] racy: Likelihood,
    ) {
        let decision = policy().evaluate(&scene_with(adult, violence, racy), None);
        assert_eq!(decision, PolicyDecision::Allowed);
    }

    #[rstest]
    #[case(Likelihood::VeryLikely, Likelihood::Unknown, Likelihood::Unknown)]
    #[case(Likelihood::Likely, Likelihood::Unknown, Likelihood::Unknown)]
    #[case(Likelihood::Unknown, Likelihood::Likely, Likelihood::Unknown)]
    #[case(Likelihood::Unknown, Likelihood::Unknown, Likelihood::VeryLikely)]
    fn any_axis_at_threshold_blocks(
        #[case] adult: Likelihood,
        #[case] violence: Likelihood,
        #[case] racy: Likelihood,
    ) {
        let settings = PolicySettings::default();
        let decision = policy().evaluate(&scene_with(adult, violence, racy), None);
        assert_eq!(
            decision,
            PolicyDecision::Blocked {
                reason: settings.image_blocked_message
            }
        );
    }

    #[test]
    fn image_block_wins_regardless_of_query() {
        let settings = PolicySettings::default();
        let scene = scene_with(
            Likelihood::VeryLikely,
            Likelihood::Unknown,
            Likelihood::Unknown,
        );
        let decision = policy().evaluate(&scene, Some("a perfectly fine query"));
        assert_eq!(
            decision,
            PolicyDecision::Blocked {
                reason: settings.image_blocked_message
            }
        );
    }

    #[rstest]
    #[case("make me look SEXY please")]
    #[case("nude")]
    #[case("a Hot take on my outfit")]
    fn denied_terms_block_clean_images(#[case] query: &str) {
        let settings = PolicySettings::default();
        let clean = scene_with(
            Likelihood::VeryUnlikely,
            Likelihood::VeryUnlikely,
            Likelihood::VeryUnlikely,
        );
        let decision = policy().evaluate(&clean, Some(query));
        assert_eq!(
            decision,
            PolicyDecision::Blocked {
                reason: settings.query_blocked_message
            }
        );
    }

    #[rstest]
    #[case("photo of my hotel lobby")]
    #[case("shotgun formation at practice")]
    #[case("my class assignment")]
    fn deny_list_needs_whole_words(#[case] query: &str) {
        let clean = scene_with(
            Likelihood::VeryUnlikely,
            Likelihood::VeryUnlikely,
            Likelihood::VeryUnlikely,
        );
        assert_eq!(
            policy().evaluate(&clean, Some(query)),
            PolicyDecision::Allowed
        );
    }

    #[test]
    fn empty_deny_list_never_flags() {
        let settings = PolicySettings {
            denied_terms: Vec::new(),
            ..PolicySettings::default()
        };
        let policy = ContentPolicy::new(settings).expect("valid policy");
        let clean = scene_with(
            Likelihood::VeryUnlikely,
            Likelihood::VeryUnlikely,
            Likelihood::VeryUnlikely,
        );
        assert_eq!(
            policy.evaluate(&clean, Some("anything at all")),
            PolicyDecision::Allowed
        );
    }
}
