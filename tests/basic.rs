use evidentia::{
    cases::{EvidenceSet, LiteralStatus},
    config::Config,
    db::KnowledgeBase,
    structures::literal::Literal,
};

const WEATHER: &str = "sunny, stay_home.
~happy :- sunny, stay_home.
~work_well :- stay_home.
happy :- stay_home.
work_well :- happy.";

fn weather_base() -> KnowledgeBase {
    KnowledgeBase::from_text(WEATHER, Config::default()).unwrap()
}

mod classification {
    use super::*;

    #[test]
    fn contained_entailed_unsupported() {
        let kb = weather_base();

        assert_eq!(
            kb.status(&Literal::positive("sunny")),
            Ok(LiteralStatus::Contained)
        );
        assert_eq!(
            kb.status(&Literal::positive("stay_home")),
            Ok(LiteralStatus::Contained)
        );
        for name in ["happy", "work_well"] {
            assert_eq!(
                kb.status(&Literal::positive(name)),
                Ok(LiteralStatus::Entailed)
            );
            assert_eq!(
                kb.status(&Literal::negative(name)),
                Ok(LiteralStatus::Entailed)
            );
        }

        let kb = KnowledgeBase::from_text("p :- q.", Config::default()).unwrap();
        assert_eq!(
            kb.status(&Literal::positive("q")),
            Ok(LiteralStatus::Unsupported)
        );
    }

    #[test]
    fn queries_for_absent_literals_fail() {
        let kb = weather_base();

        assert!(kb.status(&Literal::positive("snow")).is_err());
        assert!(kb.case(&Literal::negative("sunny")).is_err());
        assert!(kb.evidence_sets(&Literal::negative("stay_home")).is_err());
    }
}

mod evidence {
    use super::*;

    #[test]
    fn happy_has_one_argument() {
        let kb = weather_base();

        let sets: Vec<EvidenceSet> = kb
            .evidence_sets(&Literal::positive("happy"))
            .unwrap()
            .collect();

        // The stay-home clause together with the happy rule.
        assert_eq!(sets.len(), 1);
        assert_eq!(sets[0].len(), 2);

        let strings: Vec<String> = sets[0].iter().map(|key| kb.support_string(*key)).collect();
        assert!(strings.contains(&"stay_home, sunny.".to_owned()));
        assert!(strings.contains(&"happy :- stay_home.".to_owned()));
    }

    #[test]
    fn work_well_builds_on_happy() {
        let kb = weather_base();

        let sets: Vec<EvidenceSet> = kb
            .evidence_sets(&Literal::positive("work_well"))
            .unwrap()
            .collect();

        assert_eq!(sets.len(), 1);
        assert_eq!(sets[0].len(), 3);

        let strings: Vec<String> = sets[0].iter().map(|key| kb.support_string(*key)).collect();
        assert!(strings.contains(&"stay_home, sunny.".to_owned()));
        assert!(strings.contains(&"happy :- stay_home.".to_owned()));
        assert!(strings.contains(&"work_well :- happy.".to_owned()));
    }

    #[test]
    fn counts_follow_clauses_plus_rule_products() {
        // p: two clauses, one rule over a (2 sets) and b (1 set), and one
        // rule over b alone. So 2 + 2 * 1 + 1 = 5.
        let kb = KnowledgeBase::from_text(
            "p. p, x. a. a, y. b. p :- a, b. p :- b.",
            Config::default(),
        )
        .unwrap();

        let count = kb.evidence_sets(&Literal::positive("p")).unwrap().count();
        assert_eq!(count, 5);
    }

    #[test]
    fn unsupported_literals_have_no_arguments() {
        let kb = KnowledgeBase::from_text("p :- q. r.", Config::default()).unwrap();

        assert_eq!(kb.evidence_sets(&Literal::positive("q")).unwrap().count(), 0);
        assert_eq!(kb.arguments(&Literal::positive("p")).unwrap().count(), 0);
    }

    #[test]
    fn cyclic_rules_terminate() {
        let kb = KnowledgeBase::from_text("p :- q. q :- p.", Config::default()).unwrap();

        assert_eq!(kb.evidence_sets(&Literal::positive("p")).unwrap().count(), 0);
        assert_eq!(kb.evidence_sets(&Literal::positive("q")).unwrap().count(), 0);
        assert_eq!(kb.is_supported(&Literal::positive("p")), Ok(false));
    }

    #[test]
    fn arguments_carry_their_claim() {
        let kb = weather_base();
        let happy = Literal::positive("happy");

        let claim = kb.canonical(&happy).unwrap();
        for argument in kb.arguments(&happy).unwrap() {
            assert_eq!(argument.claim, claim);
            assert!(!argument.support.is_empty());
        }
    }
}
