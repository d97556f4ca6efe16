//! Literal display data for the page. Edited directly in source; nothing
//! here is loaded or mutated at runtime.

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub link: &'static str,
}

pub struct Skill {
    pub name: &'static str,
    /// Percentage, 0 to 100.
    pub level: u8,
}

pub struct Contact {
    pub label: &'static str,
    pub value: &'static str,
    pub target: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "E-Commerce Platform",
        description: "Piattaforma di e-commerce completa con React, Node.js e PostgreSQL",
        tags: &["React", "Node.js", "PostgreSQL"],
        link: "#",
    },
    Project {
        title: "AI Chat Assistant",
        description: "Assistente conversazionale intelligente con integrazione GPT-4",
        tags: &["Python", "OpenAI", "FastAPI"],
        link: "#",
    },
    Project {
        title: "Task Management App",
        description: "Applicazione di gestione progetti con team collaboration",
        tags: &["React", "Firebase", "Tailwind"],
        link: "#",
    },
];

pub const SKILLS: &[Skill] = &[
    Skill { name: "React", level: 90 },
    Skill { name: "JavaScript", level: 85 },
    Skill { name: "Node.js", level: 80 },
    Skill { name: "Python", level: 80 },
    Skill { name: "UI/UX Design", level: 70 },
];

pub const CONTACTS: &[Contact] = &[
    Contact {
        label: "Email",
        value: "tuo@email.com",
        target: "mailto:tuo@email.com",
    },
    Contact {
        label: "Telefono",
        value: "+39 123 456 789",
        target: "tel:+39123456789",
    },
    Contact {
        label: "LinkedIn",
        value: "/nomecognome",
        target: "#",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::SectionId;

    #[test]
    fn tables_are_populated() {
        assert!(!PROJECTS.is_empty());
        assert!(!SKILLS.is_empty());
        assert!(!CONTACTS.is_empty());
    }

    #[test]
    fn skill_levels_are_valid_percentages() {
        for skill in SKILLS {
            assert!(skill.level <= 100, "{} exceeds 100%", skill.name);
        }
    }

    #[test]
    fn projects_carry_tags_and_links() {
        for project in PROJECTS {
            assert!(!project.title.is_empty());
            assert!(!project.tags.is_empty(), "{} has no tags", project.title);
            assert!(!project.link.is_empty());
        }
    }

    #[test]
    fn contact_targets_are_navigable() {
        for contact in CONTACTS {
            assert!(!contact.label.is_empty());
            assert!(!contact.target.is_empty(), "{} has no target", contact.label);
        }
    }

    #[test]
    fn section_anchors_are_unique() {
        let anchors: Vec<&str> = SectionId::ALL.iter().map(|s| s.anchor()).collect();
        let mut deduped = anchors.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(anchors.len(), deduped.len());
    }
}
