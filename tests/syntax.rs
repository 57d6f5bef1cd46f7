use std::io::Write;

use evidentia::{
    builder::{parse::Program, Source},
    config::Config,
    db::KnowledgeBase,
    structures::{clause::Clause, literal::Literal, rule::Rule},
    types::err::{ErrorKind, NotFoundError, ParseError},
};

const WEATHER: &str = "sunny, stay_home.
~happy :- sunny, stay_home.
~work_well :- stay_home.
happy :- stay_home.
work_well :- happy.";

mod round_trips {
    use super::*;

    #[test]
    fn structures_reparse() {
        let clause = Clause::new([Literal::negative("raining"), Literal::positive("happy")]).unwrap();
        let program = Program::parse(&clause.to_string()).unwrap();
        assert_eq!(program.clauses, vec![clause]);

        let rule = Rule::new(
            Literal::positive("goodday"),
            [Literal::positive("happy"), Literal::negative("raining")],
        )
        .unwrap();
        let program = Program::parse(&rule.to_string()).unwrap();
        assert_eq!(program.rules, vec![rule]);
    }

    #[test]
    fn knowledge_base_reparses() {
        let kb = KnowledgeBase::from_text(WEATHER, Config::default()).unwrap();

        let rendered = kb.to_string();
        let reparsed = KnowledgeBase::from_text(&rendered, Config::default()).unwrap();

        assert_eq!(kb, reparsed);
        assert_eq!(rendered, reparsed.to_string());
    }

    #[test]
    fn interning_order_is_irrelevant_to_equality() {
        let forwards = KnowledgeBase::from_text("a, b. p :- a.", Config::default()).unwrap();
        let backwards = KnowledgeBase::from_text("p :- a. b, a.", Config::default()).unwrap();

        assert_eq!(forwards, backwards);
    }
}

mod errors {
    use super::*;

    #[test]
    fn parse_failures() {
        let cases = [
            ("a. b", ParseError::UnterminatedStatement("b".to_owned())),
            ("a. . b.", ParseError::EmptyStatement),
            (":- a.", ParseError::EmptyRuleHead),
            ("p :- .", ParseError::EmptyRuleBody),
            ("p, q :- r.", ParseError::MultipleRuleHeads),
            ("p :- 2q.", ParseError::InvalidToken("2q".to_owned())),
        ];

        for (text, expected) in cases {
            assert_eq!(
                KnowledgeBase::from_text(text, Config::default()),
                Err(ErrorKind::Parse(expected.clone())),
                "for input {text:?}"
            );
        }
    }

    #[test]
    fn structural_failures_are_immediate() {
        assert!(Clause::new(Vec::<Literal>::new()).is_err());
        assert!(Rule::new(Literal::positive("p"), Vec::<Literal>::new()).is_err());
    }
}

mod sources {
    use super::*;

    #[test]
    fn text_which_is_not_a_path_parses_directly() {
        let kb = KnowledgeBase::from_path_or_text(WEATHER, Config::default()).unwrap();

        assert_eq!(kb.clause_count(), 1);
        assert_eq!(kb.rule_count(), 4);
    }

    #[test]
    fn paths_are_tried_first() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("weather.pl");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(WEATHER.as_bytes()).unwrap();

        let from_path = KnowledgeBase::from_path(&path, Config::default()).unwrap();
        let from_auto =
            KnowledgeBase::from_path_or_text(path.to_str().unwrap(), Config::default()).unwrap();
        let from_text = KnowledgeBase::from_text(WEATHER, Config::default()).unwrap();

        assert_eq!(from_path, from_text);
        assert_eq!(from_auto, from_text);
    }

    #[test]
    fn missing_explicit_path_fails() {
        let missing = std::path::Path::new("no/such/file.pl");

        assert_eq!(
            KnowledgeBase::from_path(missing, Config::default()),
            Err(ErrorKind::NotFound(NotFoundError::NoFile))
        );
    }

    #[test]
    fn unresolvable_string_reports_both_failures() {
        let result = KnowledgeBase::from_path_or_text("no/such/file.pl", Config::default());

        match result {
            Err(ErrorKind::NotFound(NotFoundError::UnresolvedSource(
                ParseError::InvalidToken(_),
            ))) => {}
            other => panic!("Unexpected result: {other:?}"),
        }
    }

    #[test]
    fn tagged_sources_funnel_together() {
        let parts = Source::Parts {
            clauses: vec![
                Clause::new([Literal::positive("sunny"), Literal::positive("stay_home")]).unwrap(),
            ],
            rules: vec![
                Rule::new(
                    Literal::negative("happy"),
                    [Literal::positive("sunny"), Literal::positive("stay_home")],
                )
                .unwrap(),
                Rule::new(Literal::negative("work_well"), [Literal::positive("stay_home")])
                    .unwrap(),
                Rule::new(Literal::positive("happy"), [Literal::positive("stay_home")]).unwrap(),
                Rule::new(Literal::positive("work_well"), [Literal::positive("happy")]).unwrap(),
            ],
        };

        let from_parts = KnowledgeBase::from_source(parts, Config::default()).unwrap();
        let from_text =
            KnowledgeBase::from_source(Source::Text(WEATHER.to_owned()), Config::default())
                .unwrap();

        assert_eq!(from_parts, from_text);
    }
}
