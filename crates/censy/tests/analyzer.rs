use censy::{
    analyze, AnalysisResult, AnalyzeError, AnalyzeOptions, Analyzer, Category, Confidence,
    Decision, Dictionary, DictionaryStore, Lang, WordList,
};
use expect_test::{expect, Expect};
use itertools::Itertools;
use std::sync::Arc;

fn dict() -> Dictionary {
    let en = Lang::new("en").unwrap();

    let store = DictionaryStore::default();
    store
        .add_blacklist(Some(&en), ["asshole", "troll", "fuck", "penis", "ass", "pepek"])
        .unwrap();
    store
        .add_whitelist(Some(&en), ["class", "adonis", "hola"])
        .unwrap();

    Dictionary::clone(&store.snapshot())
}

fn run(text: &str) -> AnalysisResult {
    analyze(&dict(), text, &AnalyzeOptions::default())
}

/// Renders the result as `filtered | decision | detections...`,
/// where every detection is `category:confidence:word->matches:distance`
#[track_caller]
fn check(text: &str, expected: Expect) {
    let result = run(text);

    assert_eq!(result.original, text);
    assert_eq!(result.error, None);

    let detections = result
        .detections
        .iter()
        .map(|detection| {
            format!(
                "{}:{}:{}->{}:{}",
                detection.category,
                detection.confidence,
                detection.word,
                detection.matches.join("|"),
                detection.distance,
            )
        })
        .join(" ");

    let actual = format!("{} | {} | {detections}", result.filtered, result.decision);

    expected.assert_eq(actual.trim_end());
}

#[track_caller]
fn assert_rejected(text: &str, error: AnalyzeError) {
    let result = run(text);

    assert_eq!(result.error, Some(error));
    assert_eq!(result.decision, Decision::Allow);
    assert!(!result.is_profane);
    assert_eq!(result.filtered, text);
    assert!(result.detections.is_empty());
}

mod validation {
    use super::*;

    #[test_log::test]
    fn too_short() {
        assert_rejected("hi", AnalyzeError::InvalidLength);
    }

    #[test_log::test]
    fn empty_input_has_invalid_characters() {
        assert_rejected("", AnalyzeError::InvalidCharacters);

        let result = analyze(&dict(), "", &AnalyzeOptions::username());
        assert_eq!(result.error, Some(AnalyzeError::InvalidCharacters));
    }

    #[test_log::test]
    fn too_long() {
        assert_rejected(&"a".repeat(101), AnalyzeError::InvalidLength);
        assert_rejected(&"fuck ".repeat(30), AnalyzeError::InvalidLength);
    }

    #[test_log::test]
    fn special_characters_are_accepted_in_text() {
        check("hello!", expect!["hello! | allow |"]);
    }

    #[test_log::test]
    fn control_characters_are_analyzed() {
        let result = run("fuck\u{0}");

        assert_eq!(result.error, None);
        assert_eq!(result.decision, Decision::Censor);
        assert_eq!(result.filtered, "f***\u{0}");
        assert_eq!(result.detections.len(), 1);
    }

    #[test_log::test]
    fn username_charset() {
        let dict = dict();

        let result = analyze(&dict, "fu ck", &AnalyzeOptions::username());
        assert_eq!(result.error, Some(AnalyzeError::InvalidCharacters));
        assert_eq!(result.filtered, "fu ck");
        assert!(result.detections.is_empty());

        let result = analyze(&dict, "xX_Tr0ll_Xx", &AnalyzeOptions::username());
        assert_eq!(result.error, None);
        assert_eq!(result.filtered, "xX_T****_Xx");
    }

    #[test_log::test]
    fn error_serializes_as_string() {
        expect![[r#"{"original":"hi","filtered":"hi","isProfane":false,"decision":"ALLOW","error":"Invalid length","detections":[]}"#]]
            .assert_eq(&serde_json::to_string(&run("hi")).unwrap());
    }
}

mod confidence {
    use super::*;

    #[test_log::test]
    fn exact_match() {
        check(
            "asshole",
            expect!["a****** | censor | blacklist:optimist:asshole->asshole:0 blacklist:optimist:ass->ass:0"],
        );
        check("penis", expect!["p**** | censor | blacklist:optimist:penis->penis:0"]);
    }

    #[test_log::test]
    fn leet_exact_match() {
        check(
            "asshol3",
            expect!["a****** | censor | blacklist:optimist:asshole->asshole:0 blacklist:optimist:ass->ass:0"],
        );
    }

    #[test_log::test]
    fn fuzzy_match_with_different_first_letter() {
        check(
            "Denis",
            expect!["D**** | censor | whitelist:optimist:denis->adonis:2 blacklist:doubt:denis->penis:1"],
        );
        check(
            "denis",
            expect!["d**** | censor | whitelist:optimist:denis->adonis:2 blacklist:doubt:denis->penis:1"],
        );
    }

    #[test_log::test]
    fn mixed_confidence() {
        check(
            "den1s fuck",
            expect!["d**** f*** | censor | blacklist:optimist:fuck->fuck:0 whitelist:optimist:denis->adonis:2 blacklist:doubt:denis->penis:1"],
        );
    }

    #[test_log::test]
    fn substring_match() {
        check(
            "fuckasshol",
            expect!["f***a**hol | censor | blacklist:optimist:fuck->fuck:0 blacklist:optimist:ass->ass:0"],
        );
    }

    #[test_log::test]
    fn whitelist_closer_than_blacklist() {
        check("adinis", expect!["adinis | allow | whitelist:optimist:adinis->adonis:1"]);
        check("cllss", expect!["cllss | allow | whitelist:optimist:cllss->class:1"]);
    }

    #[test_log::test]
    fn whitelist_and_blacklist_tokens() {
        check(
            "c11ls fuck",
            expect!["c11ls f*** | censor | blacklist:optimist:fuck->fuck:0 whitelist:optimist:ciils->class:3"],
        );
    }

    #[test_log::test]
    fn multiple_fuzzy_tokens() {
        let result = run("Denis 8enis");

        assert_eq!(result.detections.len(), 4);
        assert!(result
            .detections_of(Category::Blacklist)
            .all(|detection| detection.confidence == Confidence::Doubt));

        check(
            "Denis 8enis",
            expect!["D**** 8**** | censor | whitelist:optimist:denis->adonis:2 blacklist:doubt:denis->penis:1 whitelist:optimist:benis->adonis:3 blacklist:doubt:benis->penis:1"],
        );
    }

    #[test_log::test]
    fn non_ascii_tokens_are_lowercased() {
        check("DÉNIS", expect!["DÉNIS | allow | whitelist:optimist:dénis->adonis:2"]);
    }

    #[test_log::test]
    fn fuzzy_false_positive_on_common_word() {
        // Short common words may be close enough to a blacklisted word
        check(
            "you are a clown",
            expect!["you a** a clown | censor | whitelist:optimist:you->hola:3 blacklist:optimist:are->ass:2 whitelist:optimist:clown->class:3"],
        );
    }
}

mod threshold {
    use super::*;

    #[test_log::test]
    fn distance_one() {
        check("trolll", expect!["t****l | censor | blacklist:optimist:troll->troll:0"]);
    }

    #[test_log::test]
    fn distance_three() {
        check("trolaaa", expect!["t****** | censor | blacklist:optimist:trolaaa->troll:3"]);
    }

    #[test_log::test]
    fn threshold_option_is_reserved() {
        let dict = dict();

        for threshold in [0, 1, 10] {
            let options = AnalyzeOptions {
                threshold,
                ..AnalyzeOptions::default()
            };
            assert_eq!(analyze(&dict, "trolaaa", &options), run("trolaaa"));
        }
    }
}

mod obfuscation {
    use super::*;

    #[test_log::test]
    fn hyphens() {
        check("f-u-c-k", expect!["f-*-*-* | censor | blacklist:optimist:fuck->fuck:0"]);
    }

    #[test_log::test]
    fn nested() {
        check(
            "fuck asstt",
            expect!["f*** a**tt | censor | blacklist:optimist:fuck->fuck:0 blacklist:optimist:ass->ass:0"],
        );
    }

    #[test_log::test]
    fn spaced() {
        check("fu ck", expect!["f* c* | censor | blacklist:optimist:fuck->fuck:0"]);
    }

    #[test_log::test]
    fn fully_spaced_stays_readable() {
        check("f u c k", expect!["f u c k | censor | blacklist:optimist:fuck->fuck:0"]);
    }

    #[test_log::test]
    fn whitelisted_token_next_to_profane() {
        check(
            "class asstt",
            expect!["class a**tt | censor | blacklist:optimist:ass->ass:0 whitelist:optimist:class->class:0"],
        );
    }

    #[test_log::test]
    fn spaced_and_leet() {
        check(
            "fu ckass1",
            expect!["f* c*a**1 | censor | blacklist:optimist:fuck->fuck:0 blacklist:optimist:ass->ass:0"],
        );
    }

    #[test_log::test]
    fn partially_whitelisted_match() {
        check(
            "hola s5tt",
            expect!["hola s*tt | censor | blacklist:optimist:ass->ass:0 whitelist:optimist:hola->hola:0"],
        );
    }

    #[test_log::test]
    fn heavily_hyphenated() {
        check(
            "f-u-c-k-a-s-s",
            expect!["f-*-*-*-a-*-* | censor | blacklist:optimist:fuck->fuck:0 blacklist:optimist:ass->ass:0"],
        );
    }

    #[test_log::test]
    fn short_words_need_the_same_first_letter() {
        check(
            "pepek sss",
            expect!["p**** sss | censor | blacklist:optimist:pepek->pepek:0 whitelist:optimist:sss->class:3"],
        );
    }

    #[test_log::test]
    fn separators_are_never_masked() {
        check("p3n1s-lover", expect!["p****-lover | censor | blacklist:optimist:penis->penis:0"]);
    }
}

mod dictionary {
    use super::*;

    #[test_log::test]
    fn clean_text_with_empty_dictionary() {
        let result = analyze(&Dictionary::default(), "fuck you", &AnalyzeOptions::default());

        assert_eq!(result.decision, Decision::Allow);
        assert_eq!(result.filtered, "fuck you");
        assert!(result.detections.is_empty());
    }

    #[test_log::test]
    fn analyzer_uses_a_snapshot_of_the_store() {
        let store = Arc::new(DictionaryStore::new(dict()));
        let analyzer = Analyzer::new(store.clone());

        assert!(analyzer.analyze("shit happens").detections.is_empty());

        store.add_blacklist(None, ["shit"]).unwrap();
        assert_eq!(analyzer.analyze("shit happens").filtered, "s*** happens");

        store.add_whitelist(None, ["shitake"]).unwrap();
        assert_eq!(analyzer.analyze("shitake").decision, Decision::Allow);

        store.remove_blacklist(None, ["shit"]).unwrap();
        assert_eq!(analyzer.analyze("shit happens").filtered, "shit happens");
    }

    #[test_log::test]
    fn concurrent_analysis_and_mutation() {
        let store = Arc::new(DictionaryStore::new(dict()));
        let analyzer = Analyzer::new(store.clone());

        std::thread::scope(|scope| {
            scope.spawn(|| {
                for i in 0..100 {
                    store.add_whitelist(None, [format!("word{i}")]).unwrap();
                }
            });

            for _ in 0..4 {
                scope.spawn(|| {
                    for _ in 0..100 {
                        assert_eq!(analyzer.analyze("fu ck").filtered, "f* c*");
                    }
                });
            }
        });

        assert_eq!(store.snapshot().whitelist().len(), 103);
    }

    #[test_log::test]
    fn word_lists_from_json() {
        let blacklist = WordList::from_json(r#"{ "en": ["troll"], "id": ["pepek"] }"#).unwrap();
        let whitelist = WordList::from_json(r#"{ "en": ["hola"] }"#).unwrap();
        let dict = Dictionary::new(blacklist, whitelist);

        let result = analyze(&dict, "tr0ll p3p3k", &AnalyzeOptions::default());
        assert_eq!(result.filtered, "t**** p****");
    }
}

#[test_log::test]
fn result_json() {
    let actual = serde_json::to_string_pretty(&run("fu ck")).unwrap();

    expect![[r#"
        {
          "original": "fu ck",
          "filtered": "f* c*",
          "isProfane": true,
          "decision": "CENSOR",
          "detections": [
            {
              "word": "fuck",
              "confidence": "OPTIMIST",
              "matches": [
                "fuck"
              ],
              "distance": 0,
              "category": "BLACKLIST"
            }
          ]
        }"#]]
    .assert_eq(&actual);
}
