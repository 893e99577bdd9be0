//! Property-based tests for rule chains.

mod common;

use std::rc::Rc;

use common::TextField;
use fieldguard_validator::prelude::*;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum RuleKind {
    Required,
    Min(usize),
    Max(usize),
}

impl RuleKind {
    fn boxed(&self) -> BoxedRule<str> {
        match self {
            RuleKind::Required => Box::new(required()),
            RuleKind::Min(min) => Box::new(MinLength::with_message(*min, "min #")),
            RuleKind::Max(max) => Box::new(MaxLength::with_message(*max, "max #")),
        }
    }
}

fn rule_kind() -> impl Strategy<Value = RuleKind> {
    prop_oneof![
        Just(RuleKind::Required),
        (0usize..8).prop_map(RuleKind::Min),
        (0usize..8).prop_map(RuleKind::Max),
    ]
}

fn build(field: &Rc<TextField>, kinds: &[RuleKind]) -> Validator<TextField> {
    kinds
        .iter()
        .fold(
            ValidatorBuilder::new(Rc::clone(field)).skip_validate_on_change(),
            |builder, kind| builder.rule(kind.boxed()),
        )
        .build()
}

proptest! {
    #[test]
    fn passes_iff_every_rule_passes(kinds in prop::collection::vec(rule_kind(), 0..5), text in "[a-z ]{0,10}") {
        let field = TextField::new().with_text(&text).shared();
        let validator = build(&field, &kinds);

        let all_pass = kinds.iter().all(|s| s.boxed().validate(&text).is_ok());
        prop_assert_eq!(validator.validate(), all_pass);
    }

    #[test]
    fn reports_message_of_first_failing_rule(kinds in prop::collection::vec(rule_kind(), 1..5), text in "[a-z ]{0,10}") {
        let field = TextField::new().with_text(&text).shared();
        let validator = build(&field, &kinds);

        let expected = kinds
            .iter()
            .find_map(|s| s.boxed().validate(&text).err())
            .map(|e| e.message.into_owned());

        validator.validate();
        prop_assert_eq!(field.error(), expected.clone());
        prop_assert_eq!(validator.error(), expected);
    }

    #[test]
    fn validate_is_idempotent(kinds in prop::collection::vec(rule_kind(), 0..5), text in ".{0,10}") {
        let field = TextField::new().with_text(&text).shared();
        let validator = build(&field, &kinds);

        let r1 = validator.validate();
        let after_first = field.error();
        let r2 = validator.validate();

        prop_assert_eq!(r1, r2);
        prop_assert_eq!(after_first, field.error());
        prop_assert_eq!(field.call_count(), 2);
    }
}
