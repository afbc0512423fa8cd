//! Integration tests for attribute budgeting, eligibility and skill checks

use character_sheet::command::{parse_command, CommandExecutor, ExecutionResult};
use character_sheet::core::SheetConfig;
use character_sheet::rules::{
    modifier, parse_rulebook, resolve_check, Attribute, AttributeScores, Outcome, RuleBook,
};
use character_sheet::sheet::Roster;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Test 1: Documented modifier values
#[test]
fn test_modifier_table() {
    assert_eq!(modifier(10), 0);
    assert_eq!(modifier(15), 2);
    assert_eq!(modifier(8), -1);
}

/// Test 2: roll 15 + 2 meets DC 17 but not DC 18
#[test]
fn test_skill_check_threshold() {
    assert_eq!(resolve_check("Stealth", 15, 2, 17).outcome, Outcome::Success);
    assert_eq!(resolve_check("Stealth", 15, 2, 18).outcome, Outcome::Failure);
}

/// Test 3: Spending points to qualify for a class
#[test]
fn test_build_a_wizard() {
    let mut roster = Roster::default();
    let index = roster.add_character();
    let rules = RuleBook::standard();
    let wizard = rules.class("Wizard").unwrap();

    assert!(!wizard.is_eligible(&roster.character(index).unwrap().attributes));

    for _ in 0..4 {
        roster.adjust_attribute(index, Attribute::Intelligence, 1).unwrap();
    }
    let character = roster.character(index).unwrap();
    assert_eq!(character.score(Attribute::Intelligence), 14);
    assert!(wizard.is_eligible(&character.attributes));
    assert!(!rules.class("Bard").unwrap().is_eligible(&character.attributes));

    // Dropping a secondary attribute under 9 loses the class
    roster.adjust_attribute(index, Attribute::Strength, -1).unwrap();
    roster.adjust_attribute(index, Attribute::Strength, -1).unwrap();
    let character = roster.character(index).unwrap();
    assert_eq!(character.score(Attribute::Strength), 8);
    assert!(!wizard.is_eligible(&character.attributes));
}

/// Test 4: Characters have independent budgets
#[test]
fn test_budgets_are_per_character() {
    let mut roster = Roster::default();
    roster.add_character();
    roster.add_character();

    for _ in 0..10 {
        roster.adjust_attribute(0, Attribute::Charisma, 1).unwrap();
    }
    assert!(roster.adjust_attribute(0, Attribute::Charisma, 1).is_err());
    assert!(roster.adjust_attribute(1, Attribute::Charisma, 1).is_ok());
    assert_eq!(roster.remaining_points(1).unwrap(), 9);
}

/// Test 5: A larger configured budget is honoured
#[test]
fn test_configured_budget() {
    let config = SheetConfig {
        max_attribute_total: 72,
        ..SheetConfig::default()
    };
    let mut roster = Roster::from_config(&config, RuleBook::standard());
    roster.add_character();
    for _ in 0..12 {
        roster.adjust_attribute(0, Attribute::Strength, 1).unwrap();
    }
    assert!(roster.adjust_attribute(0, Attribute::Strength, 1).is_err());
}

/// Test 6: Custom rulebook skills drive checks
#[test]
fn test_custom_rulebook_skill() {
    let rules = parse_rulebook(
        r#"
        [[skills]]
        name = "Endurance"
        attribute = "Constitution"
        "#,
    )
    .unwrap();
    let mut roster = Roster::new(rules, 70, 10);
    roster.add_character();
    for _ in 0..6 {
        roster.adjust_attribute(0, Attribute::Constitution, 1).unwrap();
    }

    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let result = roster
        .roll_skill_check(&mut rng, 0, "endurance", 10)
        .unwrap()
        .unwrap();
    assert_eq!(result.skill, "Endurance");
    assert_eq!(result.modifier, 3);
    assert!((4..=23).contains(&result.total));

    // Standard skills are gone with the override
    assert!(roster.roll_skill_check(&mut rng, 0, "Stealth", 10).unwrap().is_none());
}

/// Test 7: A typed session drives the roster end to end
#[tokio::test]
async fn test_command_session() {
    let mut roster = Roster::default();
    let mut rng = ChaCha8Rng::seed_from_u64(5);

    let script = [
        "add",
        "inc 1 cha",
        "inc 1 cha",
        "inc 1 cha",
        "inc 1 cha",
        "roll 1 Persuasion 12",
    ];
    for line in script {
        let command = parse_command(line).unwrap().unwrap();
        let mut executor = CommandExecutor::new(&mut roster, None, false);
        let result = executor.execute(&mut rng, &command).await;
        assert!(!matches!(result, ExecutionResult::Rejected(_)), "{}: {:?}", line, result);
    }

    let character = roster.character(0).unwrap();
    assert_eq!(character.score(Attribute::Charisma), 14);
    assert!(roster.rules().class("Bard").unwrap().is_eligible(&character.attributes));

    let check = roster.last_check_for(0).unwrap();
    assert_eq!(check.skill, "Persuasion");
    assert_eq!(check.modifier, 2);
    assert_eq!(check.dc, 12);
    assert_eq!(check.outcome.is_success(), check.roll + 2 >= 12);
}

fn attribute_strategy() -> impl Strategy<Value = Attribute> {
    prop::sample::select(Attribute::all().to_vec())
}

proptest! {
    /// No sequence of +/-1 adjustments pushes a new character over budget,
    /// and no score goes negative
    #[test]
    fn prop_budget_never_exceeded(
        steps in prop::collection::vec((attribute_strategy(), prop::bool::ANY), 0..200)
    ) {
        let mut roster = Roster::default();
        roster.add_character();

        for (attribute, up) in steps {
            let delta = if up { 1 } else { -1 };
            let _ = roster.adjust_attribute(0, attribute, delta);

            let character = roster.character(0).unwrap();
            prop_assert!(character.total() <= 70);
            for attr in Attribute::all() {
                prop_assert!(character.score(*attr) >= 0);
            }
        }
    }

    /// Eligibility holds exactly when every minimum is met
    #[test]
    fn prop_eligibility_matches_minimums(
        scores in prop::collection::vec(0i32..20, 6)
    ) {
        let attrs: AttributeScores = Attribute::all()
            .iter()
            .copied()
            .zip(scores.iter().copied())
            .collect();

        for class in RuleBook::standard().classes() {
            let expected = class
                .minimums
                .iter()
                .all(|&(attr, min)| attrs.score(attr) >= min);
            prop_assert_eq!(class.is_eligible(&attrs), expected);
        }
    }

    /// The seeded check total is always roll + modifier, roll in 1..=20
    #[test]
    fn prop_check_total(seed in any::<u64>(), dc in -5i32..30) {
        let mut roster = Roster::default();
        roster.add_character();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let result = roster.roll_skill_check(&mut rng, 0, "Athletics", dc).unwrap().unwrap();
        prop_assert!((1..=20).contains(&result.roll));
        prop_assert_eq!(result.total, result.roll + result.modifier);
        prop_assert_eq!(result.outcome.is_success(), result.total >= dc);
    }
}
