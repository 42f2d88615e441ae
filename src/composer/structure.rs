//! The intermediate argument structure shared by the middle stages.

use crate::error::{PressError, Result};
use std::fmt;

/// Sentinel left in the scenario section until the scenario stage fills it.
pub const SCENARIO_PLACEHOLDER: &str = "[SCENARIO_PLACEHOLDER]";

/// Sentinel left in the skeptic section until the validation stage fills it.
pub const SKEPTIC_PLACEHOLDER: &str = "[SKEPTIC_PLACEHOLDER]";

/// Every sentinel a section may be created with.
pub const PLACEHOLDERS: [&str; 2] = [SCENARIO_PLACEHOLDER, SKEPTIC_PLACEHOLDER];

/// Section keys of an [`ArgumentStructure`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Introduction,
    CoreParadigm,
    Scenario,
    SkepticView,
    Implications,
}

impl Section {
    /// Canonical flattening order.
    pub const ORDER: [Section; 5] = [
        Section::Introduction,
        Section::CoreParadigm,
        Section::Scenario,
        Section::SkepticView,
        Section::Implications,
    ];

    /// The sentinel this section is created with, if any.
    pub fn placeholder(self) -> Option<&'static str> {
        match self {
            Section::Scenario => Some(SCENARIO_PLACEHOLDER),
            Section::SkepticView => Some(SKEPTIC_PLACEHOLDER),
            _ => None,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::Introduction => write!(f, "introduction"),
            Section::CoreParadigm => write!(f, "core_paradigm"),
            Section::Scenario => write!(f, "scenario"),
            Section::SkepticView => write!(f, "skeptic_view"),
            Section::Implications => write!(f, "implications"),
        }
    }
}

/// Section name to text, built by the structure stage and consumed by coherence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentStructure {
    sections: [String; 5],
}

impl ArgumentStructure {
    pub fn new(
        introduction: String,
        core_paradigm: String,
        scenario: String,
        skeptic_view: String,
        implications: String,
    ) -> Self {
        Self {
            sections: [
                introduction,
                core_paradigm,
                scenario,
                skeptic_view,
                implications,
            ],
        }
    }

    pub fn get(&self, section: Section) -> &str {
        &self.sections[section.index()]
    }

    /// Replace the section's sentinel with `text`.
    ///
    /// Fails if the section has no sentinel or it was already filled.
    pub fn fill_placeholder(&mut self, section: Section, text: &str) -> Result<()> {
        let placeholder = section.placeholder().ok_or_else(|| {
            PressError::Composition(format!("section '{}' has no placeholder", section))
        })?;

        let current = &mut self.sections[section.index()];
        if !current.contains(placeholder) {
            return Err(PressError::Composition(format!(
                "section '{}' no longer contains {}",
                section, placeholder
            )));
        }

        *current = current.replace(placeholder, text);
        Ok(())
    }

    /// Sections whose text contains any sentinel, their own or another's.
    pub fn unfilled(&self) -> Vec<Section> {
        Section::ORDER
            .into_iter()
            .filter(|s| PLACEHOLDERS.into_iter().any(|p| self.get(*s).contains(p)))
            .collect()
    }

    /// Require every section to be non-empty and to contain no sentinel.
    pub fn ensure_complete(&self) -> Result<()> {
        if let Some(empty) = Section::ORDER
            .into_iter()
            .find(|s| self.get(*s).trim().is_empty())
        {
            return Err(PressError::Composition(format!(
                "section '{}' is empty",
                empty
            )));
        }

        let unfilled = self.unfilled();
        if !unfilled.is_empty() {
            let names: Vec<String> = unfilled.iter().map(ToString::to_string).collect();
            return Err(PressError::Composition(format!(
                "unfilled placeholders in: {}",
                names.join(", ")
            )));
        }

        Ok(())
    }

    /// Join the sections in canonical order, separated by a blank line.
    pub fn flatten(&self) -> String {
        self.sections.join("\n\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ArgumentStructure {
        ArgumentStructure::new(
            "intro".to_string(),
            "core".to_string(),
            format!("### Scenario\n\n{}", SCENARIO_PLACEHOLDER),
            format!("### Skeptic\n\n{}", SKEPTIC_PLACEHOLDER),
            "implications".to_string(),
        )
    }

    #[test]
    fn test_section_names() {
        let names: Vec<String> = Section::ORDER.iter().map(ToString::to_string).collect();
        assert_eq!(
            names,
            [
                "introduction",
                "core_paradigm",
                "scenario",
                "skeptic_view",
                "implications"
            ]
        );
    }

    #[test]
    fn test_new_structure_reports_unfilled() {
        let structure = sample();
        assert_eq!(
            structure.unfilled(),
            vec![Section::Scenario, Section::SkepticView]
        );
        assert!(structure.ensure_complete().is_err());
    }

    #[test]
    fn test_fill_placeholder() {
        let mut structure = sample();
        structure
            .fill_placeholder(Section::SkepticView, "doubts")
            .unwrap();

        assert_eq!(structure.get(Section::SkepticView), "### Skeptic\n\ndoubts");
        assert_eq!(structure.unfilled(), vec![Section::Scenario]);
    }

    #[test]
    fn test_fill_twice_fails() {
        let mut structure = sample();
        structure.fill_placeholder(Section::Scenario, "story").unwrap();
        assert!(structure.fill_placeholder(Section::Scenario, "again").is_err());
    }

    #[test]
    fn test_fill_section_without_placeholder_fails() {
        let mut structure = sample();
        assert!(
            structure
                .fill_placeholder(Section::Introduction, "x")
                .is_err()
        );
    }

    #[test]
    fn test_foreign_sentinel_counts_as_unfilled() {
        let mut structure = ArgumentStructure::new(
            format!("intro about {}", SKEPTIC_PLACEHOLDER),
            "core".to_string(),
            format!("### Scenario\n\n{}", SCENARIO_PLACEHOLDER),
            format!("### Skeptic\n\n{}", SKEPTIC_PLACEHOLDER),
            "implications".to_string(),
        );
        structure.fill_placeholder(Section::Scenario, "story").unwrap();
        structure.fill_placeholder(Section::SkepticView, "doubts").unwrap();

        assert_eq!(structure.unfilled(), vec![Section::Introduction]);
        let err = structure.ensure_complete().unwrap_err();
        assert!(matches!(err, PressError::Composition(_)));
        assert!(err.to_string().contains("introduction"));
    }

    #[test]
    fn test_ensure_complete_rejects_empty_section() {
        let structure = ArgumentStructure::new(
            "intro".to_string(),
            " ".to_string(),
            "s".to_string(),
            "k".to_string(),
            "i".to_string(),
        );
        let err = structure.ensure_complete().unwrap_err();
        assert!(err.to_string().contains("core_paradigm"));
    }

    #[test]
    fn test_flatten_order() {
        let mut structure = sample();
        structure.fill_placeholder(Section::Scenario, "story").unwrap();
        structure.fill_placeholder(Section::SkepticView, "doubts").unwrap();

        structure.ensure_complete().unwrap();
        assert_eq!(
            structure.flatten(),
            "intro\n\ncore\n\n### Scenario\n\nstory\n\n### Skeptic\n\ndoubts\n\nimplications"
        );
    }
}
