//! Assembles the final prompt text sent to the provider.

use super::sections::Section;
use super::templates::{
    audience_line, tone_line, IDEA_DELIMITER, PERSONA_LINE, SECTIONS_DELIMITER, TASK_LINE,
};

/// Maps requested keys onto the catalog, keeping caller order and dropping unknown keys.
pub fn resolve_sections<S: AsRef<str>>(keys: &[S]) -> Vec<&'static Section> {
    keys.iter()
        .filter_map(|key| Section::lookup(key.as_ref()))
        .collect()
}

/// Build the prompt for one idea.
///
/// Section headers are only instructions; the provider writes the section bodies.
/// Keys missing from the catalog are skipped silently.
pub fn build_prompt<S: AsRef<str>>(
    idea: &str,
    tone: &str,
    audience: &str,
    sections: &[S],
) -> String {
    let mut parts = vec![
        PERSONA_LINE.to_string(),
        TASK_LINE.to_string(),
        tone_line(tone),
        audience_line(audience),
        format!("{}\n{}\n", IDEA_DELIMITER, idea),
        format!("{}\n", SECTIONS_DELIMITER),
    ];

    parts.extend(resolve_sections(sections).into_iter().map(Section::header));

    parts.join("\n")
}
