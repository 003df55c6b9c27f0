use crate::scene::{SceneDescription, prioritize_labels};
use crate::subject::SubjectKind;

pub(crate) const SYSTEM: &str = "You are a trendy friend specialized in creating unique \
captions for social media based on image analysis.";

/// The exact response shape requested from the generation service. Kept in
/// every template so the contract survives prompt drift.
const VARIANT_FORMAT: &str = r#"{
    "safe": "A polite, kind, and universally friendly caption. The tone should be warm and considerate, appropriate for all audiences.",
    "medium": "A witty and playful caption that grabs attention with some cheekiness. The tone should be fun and creative while still being appropriate for most audiences.",
    "bold": "A daring and confident caption that pushes boundaries. The tone should be unapologetic and direct, designed to grab attention, but still within appropriate limits."
}"#;

const TONE_GUIDELINES: &str = "\
- **Safe Captions**: Write a gentle, thoughtful, and universally friendly caption. It should \
be polite, creative, and appropriate for all audiences. Avoid edgy or bold humor.
- **Medium Captions**: Craft a fun, cheeky caption with a hint of humor. It should be \
creative, playful, and slightly daring, but still appropriate.
- **Bold Captions**: Write a bold, confident caption. It should push boundaries, be \
unapologetically bold and direct, and grab attention.";

/// Repeated verbatim in every template as a second safety layer behind the
/// content policy.
const STYLE_GUIDELINES: &str = "\
- Under no circumstances will you sexualize or objectify people in the image, even if \
prompted to do so by the user query.
- Avoid overused cliches such as hashtags or phrases like squad goals.
- Avoid superfluous punctuation like exclamation points.
- Avoid expressing colors as combinations of red/green/blue.
- Keep the tone casual and relatable. Write anywhere between 1 and 6 words per caption.";

/// Select and render the template for one composition call. Priority:
/// a user query outranks everything, then the group template, then the
/// single-subject default (which also covers subject-less scenes).
pub(crate) fn build_prompt(
    scene: &SceneDescription,
    subject: SubjectKind,
    query: Option<&str>,
) -> String {
    let details = scene_details(scene, subject);
    match (query, subject) {
        (Some(query), _) => format!(
            "User Query: \"make a caption about {query} and be sure to include relevant \
details about the image\"\n\n\
Use the following image details to enhance the captions to ensure they are relevant to \
the content of the image. Make sure to combine the information from the user query and \
the image details provided:\n\n\
Image Details:\n{details}\n\n\
Based on these inputs, generate three thoughtful captions in the exact JSON \
format:\n\n{VARIANT_FORMAT}\n\n\
General Guidelines:\n{TONE_GUIDELINES}\n{STYLE_GUIDELINES}"
        ),
        (None, SubjectKind::Group) => format!(
            "Based on the following image details, generate three thoughtful captions for \
the image in the exact JSON format:\n\n{VARIANT_FORMAT}\n\n\
Image Details:\n{details}\n\n\
General Guidelines:\n{TONE_GUIDELINES}\n\
- Focus on the group as a whole.\n{STYLE_GUIDELINES}"
        ),
        (None, _) => format!(
            "Based on the following image details, generate three thoughtful captions for \
the image in the exact JSON format:\n\n{VARIANT_FORMAT}\n\n\
Image Details:\n{details}\n\n\
General Guidelines:\n{TONE_GUIDELINES}\n{STYLE_GUIDELINES}"
        ),
    }
}

/// Serialize the scene fields the templates actually need: labels,
/// expressions, named colors, objects, detected text, and the subject
/// summary. Everything else stays out to keep the prompt quiet.
fn scene_details(scene: &SceneDescription, subject: SubjectKind) -> String {
    let mut lines = Vec::new();

    let labels = prioritize_labels(&scene.labels);
    if !labels.is_empty() {
        lines.push(format!("Identified labels: {}", labels.join(", ")));
    }
    if !scene.faces.expressions.is_empty() {
        lines.push(scene.faces.expressions.join(". "));
    }
    if !scene.dominant_colors.is_empty() {
        let names: Vec<&str> = scene.dominant_colors.iter().map(|c| c.name).collect();
        lines.push(format!("Dominant colors: {}", names.join(", ")));
    }
    if !scene.objects.is_empty() {
        lines.push(format!("Located objects: {}", scene.objects.join(", ")));
    }
    if !scene.detected_text.is_empty() {
        lines.push(format!("Detected text: {}", scene.detected_text));
    }
    match subject {
        SubjectKind::Group => lines.push(format!(
            "People in the photo: {} (group photo)",
            scene.faces.count
        )),
        SubjectKind::Single => lines.push("A single main subject is in frame".to_string()),
        SubjectKind::Subjectless => {}
    }

    lines.join("\n")
}
