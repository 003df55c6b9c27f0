use crate::scene::SceneDescription;

/// Which prompt-template family a scene calls for. Derived purely from the
/// qualifying-face summary; never talks to the generation service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubjectKind {
    /// Exactly one qualifying face.
    Single,
    /// More than one qualifying face.
    Group,
    /// No qualifying face; captioning proceeds on labels, objects, and
    /// colors alone.
    Subjectless,
}

#[must_use]
pub fn classify(scene: &SceneDescription) -> SubjectKind {
    if scene.faces.is_group_photo {
        SubjectKind::Group
    } else if scene.faces.count == 1 {
        SubjectKind::Single
    } else {
        SubjectKind::Subjectless
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{FaceSummary, QualifyingFace};

    fn scene_with_faces(count: usize) -> SceneDescription {
        let face = QualifyingFace {
            area_fraction: 0.01,
            center_x: 0.5,
        };
        let faces = match count {
            0 => FaceSummary::default(),
            1 => FaceSummary {
                count: 1,
                main_subject: Some(face),
                ..FaceSummary::default()
            },
            n => FaceSummary {
                count: n,
                group_subjects: vec![face; n],
                is_group_photo: true,
                ..FaceSummary::default()
            },
        };
        SceneDescription {
            faces,
            ..SceneDescription::default()
        }
    }

    #[test]
    fn classification_follows_qualifying_face_count() {
        assert_eq!(classify(&scene_with_faces(0)), SubjectKind::Subjectless);
        assert_eq!(classify(&scene_with_faces(1)), SubjectKind::Single);
        assert_eq!(classify(&scene_with_faces(2)), SubjectKind::Group);
        assert_eq!(classify(&scene_with_faces(5)), SubjectKind::Group);
    }
}
