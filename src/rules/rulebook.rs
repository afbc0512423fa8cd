//! Read-only reference data: classes and skills

use crate::rules::attributes::AttributeScores;
use crate::rules::classes::{standard_classes, ClassRequirements};
use crate::rules::skills::{standard_skills, SkillDefinition};

/// Classes and skills a roster is judged against
#[derive(Debug, Clone)]
pub struct RuleBook {
    classes: Vec<ClassRequirements>,
    skills: Vec<SkillDefinition>,
}

impl Default for RuleBook {
    fn default() -> Self {
        Self::standard()
    }
}

impl RuleBook {
    pub fn new(classes: Vec<ClassRequirements>, skills: Vec<SkillDefinition>) -> Self {
        Self { classes, skills }
    }

    /// Built-in Barbarian/Wizard/Bard classes and the eighteen standard skills
    pub fn standard() -> Self {
        Self::new(standard_classes(), standard_skills())
    }

    pub fn classes(&self) -> &[ClassRequirements] {
        &self.classes
    }

    pub fn skills(&self) -> &[SkillDefinition] {
        &self.skills
    }

    /// Look up a class by name (case-insensitive)
    pub fn class(&self, name: &str) -> Option<&ClassRequirements> {
        let name = name.trim();
        self.classes.iter().find(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// Look up a skill by name (case-insensitive)
    pub fn skill(&self, name: &str) -> Option<&SkillDefinition> {
        let name = name.trim();
        self.skills.iter().find(|s| s.name.eq_ignore_ascii_case(name))
    }

    /// Eligibility of every class, in definition order
    pub fn eligibility<'a>(
        &'a self,
        scores: &'a AttributeScores,
    ) -> impl Iterator<Item = (&'a ClassRequirements, bool)> + 'a {
        self.classes.iter().map(move |c| (c, c.is_eligible(scores)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::attributes::Attribute;

    #[test]
    fn test_standard_lookup() {
        let book = RuleBook::standard();
        assert_eq!(book.classes().len(), 3);
        assert_eq!(book.skill("sleight of hand").unwrap().attribute, Attribute::Dexterity);
        assert_eq!(book.class("WIZARD").unwrap().name, "Wizard");
        assert!(book.skill("Cooking").is_none());
    }

    #[test]
    fn test_eligibility_in_order() {
        let book = RuleBook::standard();
        let mut scores = AttributeScores::uniform(9);
        scores.set(Attribute::Charisma, 15);

        let result: Vec<(String, bool)> = book
            .eligibility(&scores)
            .map(|(c, ok)| (c.name.clone(), ok))
            .collect();
        assert_eq!(
            result,
            vec![
                ("Barbarian".to_string(), false),
                ("Wizard".to_string(), false),
                ("Bard".to_string(), true),
            ]
        );
    }
}
