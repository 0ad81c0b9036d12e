//! The fixed catalog of pitch sections a caller may request.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Section {
    /// Identifier used on the wire, e.g. `"tagline"`.
    pub key: &'static str,
    /// Human-readable title shown to users and in the prompt header.
    pub title: &'static str,
    /// Instruction appended to the header telling the model what to write.
    #[serde(skip)]
    pub guidance: &'static str,
}

/// Catalog order defines the section numbers used in prompt headers.
pub static SECTIONS: [Section; 7] = [
    Section {
        key: "elevator_pitch",
        title: "Elevator Pitch",
        guidance: "A concise and persuasive speech, about 30-60 seconds long",
    },
    Section {
        key: "slide_bullets",
        title: "Slide Bullets",
        guidance: "5-7 key bullet points for a presentation",
    },
    Section {
        key: "tagline",
        title: "Tagline",
        guidance: "A short, memorable slogan",
    },
    Section {
        key: "value_proposition",
        title: "Value Proposition",
        guidance: "A clear statement of the benefits you provide to customers",
    },
    Section {
        key: "competitors",
        title: "Potential Competitors",
        guidance: "List 3-5 potential competitors in this space",
    },
    Section {
        key: "revenue_models",
        title: "Possible Revenue Models",
        guidance: "Suggest 2-3 ways this business could make money",
    },
    Section {
        key: "swot_analysis",
        title: "BONUS - SWOT Analysis",
        guidance: "Strengths, Weaknesses, Opportunities, and Threats for this business idea",
    },
];

impl Section {
    pub fn lookup(key: &str) -> Option<&'static Section> {
        SECTIONS.iter().find(|s| s.key == key)
    }

    /// 1-based position in the catalog.
    pub fn number(&self) -> usize {
        SECTIONS
            .iter()
            .position(|s| s.key == self.key)
            .map_or(0, |i| i + 1)
    }

    pub fn header(&self) -> String {
        format!("*{}. {}:* ({})", self.number(), self.title, self.guidance)
    }
}
