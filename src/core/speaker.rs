use crate::domain::ports::Speaker;
use crate::utils::error::{LessonError, Result};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dog;

impl Speaker for Dog {
    fn utterance(&self) -> &'static str {
        "汪汪"
    }
}

/// Looks up a speaker by name, ignoring case and surrounding whitespace.
pub fn speaker_for(kind: &str) -> Result<Box<dyn Speaker>> {
    match kind.trim().to_ascii_lowercase().as_str() {
        "dog" => Ok(Box::new(Dog)),
        _ => Err(LessonError::UnknownSpeaker {
            kind: kind.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn say(speaker: &dyn Speaker) -> String {
        let mut out = Vec::new();
        speaker.speak_to(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_dog_speaks_through_capability() {
        let speaker: Box<dyn Speaker> = Box::new(Dog);
        assert_eq!(say(speaker.as_ref()), "汪汪\n");
        speaker.speak().unwrap();
    }

    #[test]
    fn test_speaker_for_dog() {
        let speaker = speaker_for(" Dog ").unwrap();
        assert_eq!(speaker.utterance(), "汪汪");
    }

    #[test]
    fn test_speaker_for_unknown_kind() {
        match speaker_for("cat") {
            Err(LessonError::UnknownSpeaker { kind }) => assert_eq!(kind, "cat"),
            Err(e) => panic!("unexpected error: {}", e),
            Ok(_) => panic!("cat should not resolve"),
        }
    }
}
