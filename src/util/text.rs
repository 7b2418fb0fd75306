// src/util/text.rs
use crate::domain::{NewNoteRequest, Paragraph};

/// Wrap a text blob into a new-note request with a single paragraph.
///
/// # Examples
///
/// ```
/// use zeppelin::util::text::text_to_new_note;
///
/// let note = text_to_new_note("etl", "load", "%sh echo hello");
/// assert_eq!(note.name, "etl");
/// assert_eq!(note.paragraphs.len(), 1);
/// assert_eq!(note.paragraphs[0].title, "load");
/// assert_eq!(note.paragraphs[0].text, "%sh echo hello");
/// ```
pub fn text_to_new_note(name: &str, title: &str, text: &str) -> NewNoteRequest {
    NewNoteRequest {
        name: name.to_string(),
        paragraphs: vec![Paragraph {
            title: title.to_string(),
            text: text.to_string(),
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn given_name_title_and_text_when_formatting_then_builds_one_paragraph() {
        let note = text_to_new_note("n", "t", "body");

        assert_eq!(note.name, "n");
        assert_eq!(note.paragraphs.len(), 1);
        assert_eq!(note.paragraphs[0].title, "t");
        assert_eq!(note.paragraphs[0].text, "body");
    }

    #[rstest]
    #[case("", "", "")]
    #[case("multi", "line", "%md\n# Title\n\nsome text\n")]
    #[case("unicode", "émoji", "println(\"→ ✓\")")]
    fn given_any_text_when_formatting_then_text_is_kept_verbatim(
        #[case] name: &str,
        #[case] title: &str,
        #[case] text: &str,
    ) {
        let note = text_to_new_note(name, title, text);

        assert_eq!(note.paragraphs.len(), 1);
        assert_eq!(note.paragraphs[0].text, text);
        assert_eq!(note.paragraphs[0].title, title);
        assert_eq!(note.name, name);
    }
}
