//! Re-usable prompt skeletons.

pub const DEFAULT_TONE: &str = "Professional";
pub const DEFAULT_AUDIENCE: &str = "Investors";

pub const PERSONA_LINE: &str = "You are an expert business consultant and pitch writer.";
pub const TASK_LINE: &str =
    "Analyze the following startup idea and generate the requested sections.";
pub const IDEA_DELIMITER: &str = "*Startup Idea:*";
pub const SECTIONS_DELIMITER: &str =
    "*Based on the startup idea above, generate the following sections:*";

pub fn tone_line(tone: &str) -> String {
    format!("The tone of the output must be **{}**.", tone)
}

pub fn audience_line(audience: &str) -> String {
    format!(
        "The content should be tailored for an audience of **{}**.\n",
        audience
    )
}
