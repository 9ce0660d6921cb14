use search_engine::{parse_suggestion_payload, SuggestionError, SuggestionResult};

#[test]
fn two_element_payload_is_parsed() {
    let result = parse_suggestion_payload(br#"["par",["paris","parrot"]]"#).expect("valid payload");
    assert_eq!(
        result,
        SuggestionResult {
            query: "par".to_string(),
            suggestions: vec!["paris".to_string(), "parrot".to_string()],
        }
    );
}

#[test]
fn empty_suggestion_list_is_valid() {
    let result = parse_suggestion_payload(br#"["zzqx",[]]"#).expect("valid payload");
    assert_eq!(result.query, "zzqx");
    assert!(result.suggestions.is_empty());
}

#[test]
fn unicode_suggestions_survive() {
    let result = parse_suggestion_payload("[\"caf\",[\"café\",\"cafétéria\"]]".as_bytes())
        .expect("valid payload");
    assert_eq!(result.suggestions, vec!["café", "cafétéria"]);
}

#[test]
fn malformed_shapes_are_rejected() {
    let cases: [&[u8]; 7] = [
        br#"["par"]"#,
        br#"["par",["paris"],["desc"],["url"]]"#,
        br#"["par","paris"]"#,
        br#"[42,["paris"]]"#,
        br#"["par",["paris",7]]"#,
        br#"{"query":"par","suggestions":["paris"]}"#,
        b"not json",
    ];
    for body in cases {
        assert_eq!(
            parse_suggestion_payload(body),
            Err(SuggestionError::MalformedSuggestionPayload),
            "body {:?}",
            String::from_utf8_lossy(body)
        );
    }
}
