/// Broad subject terms used for the first filtering pass.
const BROAD_SUBJECT_LABELS: &[&str] = &[
    // Human-related terms
    "person", "man", "woman", "child", "adult", "teenager", "baby", "face", "smile", "pose",
    "portrait", "selfie", "group",
    // Pets and common animals
    "dog", "cat", "pet", "animal",
    // Common objects and elements that could appear in the background
    "tree", "car", "bicycle", "clothing", "building",
];

/// Specific subject terms, only consulted once a broad subject matched.
const SPECIFIC_SUBJECT_LABELS: &[&str] = &[
    // Animals and breeds
    "black lab", "golden retriever", "labrador", "poodle", "beagle", "pug", "siamese cat",
    "tabby cat", "parrot", "fish", "hamster", "horse", "pony", "sheep", "cow", "rabbit", "bird",
    "turtle", "snake",
    // Human characteristics and body language
    "smile", "eyes", "nose", "mouth", "teeth", "glasses", "hair", "beard", "mustache",
    "expression", "gesture", "pose", "lean", "hug", "handshake", "laugh", "frown", "high five",
    "focus", "admiration", "surprise", "anger", "sadness", "joy", "confidence", "determination",
    "playfulness", "shyness", "affection", "eye contact", "interaction", "celebration", "group",
    "couple",
    // Clothing, accessories, and personal items
    "t-shirt", "dress shirt", "blouse", "suit", "tie", "gown", "jacket", "coat", "scarf",
    "sweater", "jeans", "shorts", "skirt", "sneakers", "shoes", "boots", "sandals", "gloves",
    "sunglasses", "watch", "earrings", "necklace", "bracelet", "ring", "hat", "beanie", "cap",
    "backpack", "bag", "purse", "belt", "jewelry",
];

const BROAD_CONTEXT_LABELS: &[&str] = &[
    "outdoor", "nature", "city", "indoor", "scenic", "party", "event", "sports", "vacation",
    "celebration", "travel", "work", "meeting",
];

const SPECIFIC_CONTEXT_LABELS: &[&str] = &[
    "beach", "mountain", "river", "lake", "forest", "cityscape", "park", "road", "street",
    "building", "office", "living room", "kitchen", "restaurant", "cafe", "mall", "gym",
    "library", "classroom", "hotel", "resort", "airport",
    // Events and activities
    "hiking", "running", "cycling", "swimming", "camping", "skiing", "surfing", "climbing",
    "fishing", "tennis", "golf", "basketball", "soccer", "football", "concert", "wedding",
    "festival", "celebration", "parade", "ceremony",
];

fn matches(vocabulary: &[&str], label: &str) -> bool {
    let lowered = label.to_lowercase();
    vocabulary.contains(&lowered.as_str())
}

/// Order raw labels for prompt rendering: specific subject matches beat
/// broad ones, context matches follow. Labels outside every vocabulary are
/// dropped from the ordering pass; when nothing matches at all, the raw
/// list is kept as-is so subject-less scenes still carry context.
#[must_use]
pub fn prioritize_labels(labels: &[String]) -> Vec<String> {
    let broad: Vec<String> = labels
        .iter()
        .filter(|l| matches(BROAD_SUBJECT_LABELS, l))
        .cloned()
        .collect();
    let specific: Vec<String> = if broad.is_empty() {
        Vec::new()
    } else {
        labels
            .iter()
            .filter(|l| matches(SPECIFIC_SUBJECT_LABELS, l))
            .cloned()
            .collect()
    };

    let subject_details = if specific.is_empty() { broad } else { specific };
    let context: Vec<String> = labels
        .iter()
        .filter(|l| matches(BROAD_CONTEXT_LABELS, l) || matches(SPECIFIC_CONTEXT_LABELS, l))
        .cloned()
        .collect();

    let mut ordered = subject_details;
    ordered.extend(context);
    if ordered.is_empty() {
        labels.to_vec()
    } else {
        ordered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(raw: &[&str]) -> Vec<String> {
        raw.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn specific_subject_matches_replace_broad_ones() {
        let ordered = prioritize_labels(&labels(&["Person", "Smile", "Glasses", "Beach"]));
        assert_eq!(ordered, labels(&["Smile", "Glasses", "Beach"]));
    }

    #[test]
    fn broad_matches_survive_without_specific_ones() {
        let ordered = prioritize_labels(&labels(&["Dog", "Park"]));
        assert_eq!(ordered, labels(&["Dog", "Park"]));
    }

    #[test]
    fn specific_subjects_need_a_broad_match_first() {
        // "glasses" is specific-only; without a broad subject match it does
        // not open the specific pass, leaving just the context match.
        let ordered = prioritize_labels(&labels(&["Glasses", "Beach"]));
        assert_eq!(ordered, labels(&["Beach"]));
    }

    #[test]
    fn unmatched_labels_fall_through_verbatim() {
        let raw = labels(&["Cumulus", "Azure sky"]);
        assert_eq!(prioritize_labels(&raw), raw);
    }
}
