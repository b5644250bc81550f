use treebank_utils::morphology::{Case, Gender, Number, PartOfSpeech, Person};
use treebank_utils::{Artificial, Morph, MorphError, Sentence, Token, Word};

#[test]
fn test_decode_through_public_api() {
    let morph = Morph::decode("n-s---mn-").unwrap();
    assert_eq!(morph.pos, PartOfSpeech::Noun);
    assert_eq!(morph.person, Person::Unset);
    assert_eq!(morph.number, Number::Singular);
    assert_eq!(morph.gender, Gender::Masculine);
    assert_eq!(morph.case, Case::Nominative);
}

#[test]
fn test_error_kinds_are_distinguishable() {
    let too_short = Morph::decode("short").unwrap_err();
    let bad_symbol = Morph::decode("z--------").unwrap_err();

    assert!(matches!(too_short, MorphError::InvalidLength { .. }));
    assert!(matches!(bad_symbol, MorphError::UnknownSymbol { .. }));

    assert_eq!(
        too_short.to_string(),
        "tag `short` has length 5, expected 9"
    );
    assert_eq!(
        bad_symbol.to_string(),
        "unknown part of speech symbol `z` at position 0"
    );
}

#[test]
fn test_morph_serializes_as_labels() {
    let morph = Morph::decode("v3spia---").unwrap();
    let json = serde_json::to_value(&morph).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "pos": "verb",
            "person": "3rd",
            "number": "singular",
            "tense": "present",
            "mood": "indicative",
            "voice": "active",
            "gender": "-",
            "case": "-",
            "degree": "-",
        })
    );

    let back: Morph = serde_json::from_value(json).unwrap();
    assert_eq!(back, morph);
}

#[test]
fn test_sentence_record() {
    let sentence = Sentence {
        id: "2899586".to_string(),
        document_id: "urn:cts:greekLit:tlg0012.tlg001.perseus-grc1".to_string(),
        subdoc: Some("1.1-1.32".to_string()),
    };
    assert_eq!(sentence.id, "2899586");
    assert_eq!(sentence.clone(), sentence);
}

#[test]
fn test_artificial_word_fields_retrievable() {
    let artificial = Artificial {
        id: "1-1".to_string(),
        form: "[ellipsis]".to_string(),
        lemma: None,
        postag: Some("---------".to_string()),
        head: Some("1".to_string()),
        relation: Some("SUBJ".to_string()),
        cite: None,
        kind: "ellipsis".to_string(),
    };
    assert_eq!(artificial.id, "1-1");
    assert_eq!(artificial.form, "[ellipsis]");
    assert_eq!(artificial.lemma, None);
    assert_eq!(artificial.postag.as_deref(), Some("---------"));
    assert_eq!(artificial.head.as_deref(), Some("1"));
    assert_eq!(artificial.relation.as_deref(), Some("SUBJ"));
    assert_eq!(artificial.cite, None);
    assert_eq!(artificial.kind, "ellipsis");
}

#[test]
fn test_token_discriminated_by_type_field() {
    let with_type = serde_json::json!({
        "id": "1-1",
        "form": "[0]",
        "head": "0",
        "relation": "PRED",
        "type": "elliptic",
    });
    let without_type = serde_json::json!({
        "id": "1",
        "form": "μῆνιν",
        "lemma": "μῆνις",
        "postag": "n-s---fa-",
        "head": "0",
        "relation": "OBJ",
    });

    match serde_json::from_value::<Token>(with_type).unwrap() {
        Token::Artificial(artificial) => assert_eq!(artificial.kind, "elliptic"),
        Token::Word(_) => panic!("token with a type field must be artificial"),
    }
    match serde_json::from_value::<Token>(without_type).unwrap() {
        Token::Word(word) => assert_eq!(word.form, "μῆνιν"),
        Token::Artificial(_) => panic!("token without a type field must be a word"),
    }
}

#[test]
fn test_word_postag_decodes_separately() {
    let word = Word {
        id: "1".to_string(),
        form: "μῆνιν".to_string(),
        lemma: Some("μῆνις".to_string()),
        postag: Some("n-s---fa-".to_string()),
        head: Some("0".to_string()),
        relation: Some("OBJ".to_string()),
        cite: None,
    };
    let morph: Morph = word.postag.as_deref().unwrap().parse().unwrap();
    assert_eq!(morph.pos, PartOfSpeech::Noun);
    assert_eq!(morph.gender, Gender::Feminine);
    assert_eq!(morph.case, Case::Accusative);
}

#[test]
fn test_optional_fields_omitted_from_json() {
    let word = Word {
        id: "5".to_string(),
        form: "δὲ".to_string(),
        lemma: None,
        postag: None,
        head: None,
        relation: None,
        cite: None,
    };
    let json = serde_json::to_value(&word).unwrap();
    assert_eq!(json, serde_json::json!({ "id": "5", "form": "δὲ" }));
}
