use qigua_core::{
    decode_codes, encode_codes, parse_code, Catalog, CatalogError, Color, Element, Kind,
    OracleError, Token,
};

#[test]
fn standard_catalog_has_fixed_counts() {
    let catalog = Catalog::standard();
    assert_eq!(catalog.len(), 32);
    let counts = catalog.counts();
    assert_eq!(counts[&Kind::General], 2);
    assert_eq!(counts[&Kind::Advisor], 4);
    assert_eq!(counts[&Kind::Elephant], 4);
    assert_eq!(counts[&Kind::Chariot], 4);
    assert_eq!(counts[&Kind::Horse], 4);
    assert_eq!(counts[&Kind::Cannon], 4);
    assert_eq!(counts[&Kind::Soldier], 10);
}

#[test]
fn standard_catalog_splits_every_kind_by_color() {
    let catalog = Catalog::standard();
    for kind in Kind::ALL {
        let red = catalog
            .get_all()
            .iter()
            .filter(|t| t.kind == kind && t.color == Color::Red)
            .count();
        let black = catalog
            .get_all()
            .iter()
            .filter(|t| t.kind == kind && t.color == Color::Black)
            .count();
        assert_eq!(red, black, "{kind:?}");
    }
}

#[test]
fn standard_catalog_is_in_definition_order() {
    let all = Catalog::standard().get_all();
    assert_eq!(all[0].kind, Kind::General);
    assert_eq!(all[0].color, Color::Red);
    assert_eq!(all[1].color, Color::Black);
    assert!(all[22..].iter().all(|t| t.kind == Kind::Soldier));
    assert_eq!(Catalog::standard().get_all(), all);
}

#[test]
fn standard_catalog_passes_validation() {
    let tokens = Catalog::standard().get_all().to_vec();
    let rebuilt = Catalog::from_tokens(tokens).expect("valid catalog");
    assert_eq!(rebuilt.get_all(), Catalog::standard().get_all());
}

#[test]
fn lookup_returns_points_and_element() {
    let catalog = Catalog::standard();
    assert_eq!(
        catalog.lookup(Kind::General, Color::Red),
        Ok((80, Element::Metal))
    );
    assert_eq!(
        catalog.lookup(Kind::Cannon, Color::Black),
        Ok((15, Element::Water))
    );
    assert_eq!(
        catalog.lookup(Kind::Soldier, Color::Red),
        Ok((10, Element::Earth))
    );
}

#[test]
fn points_do_not_depend_on_color() {
    let catalog = Catalog::standard();
    for kind in Kind::ALL {
        let (red, _) = catalog.lookup(kind, Color::Red).expect("red entry");
        let (black, _) = catalog.lookup(kind, Color::Black).expect("black entry");
        assert_eq!(red, black);
    }
}

#[test]
fn short_catalog_is_rejected() {
    let mut tokens = Catalog::standard().get_all().to_vec();
    tokens.retain(|t| !(t.kind == Kind::Horse && t.color == Color::Black));
    assert_eq!(
        Catalog::from_tokens(tokens).unwrap_err(),
        CatalogError::WrongTokenCount(30)
    );
}

#[test]
fn uneven_split_is_rejected() {
    let mut tokens = Catalog::standard().get_all().to_vec();
    let idx = tokens
        .iter()
        .position(|t| t.kind == Kind::Chariot && t.color == Color::Black)
        .expect("black chariot");
    tokens[idx] = Token::new(Kind::Chariot, Color::Red, 30, Element::Wood);
    assert_eq!(
        Catalog::from_tokens(tokens).unwrap_err(),
        CatalogError::UnevenColorSplit {
            kind: Kind::Chariot,
            red: 3,
            black: 1,
        }
    );
}

#[test]
fn conflicting_attributes_are_rejected() {
    let mut tokens = Catalog::standard().get_all().to_vec();
    let idx = tokens
        .iter()
        .rposition(|t| t.kind == Kind::Horse && t.color == Color::Red)
        .expect("red horse");
    tokens[idx].points = 25;
    assert_eq!(
        Catalog::from_tokens(tokens).unwrap_err(),
        CatalogError::InconsistentAttributes {
            kind: Kind::Horse,
            color: Color::Red,
        }
    );
}

#[test]
fn mismatch_reports_the_side_that_differs() {
    let mut tokens = Catalog::standard().get_all().to_vec();
    for token in tokens.iter_mut().filter(|t| t.kind == Kind::Cannon) {
        if token.color == Color::Black {
            token.points = 16;
        }
    }
    assert_eq!(
        Catalog::from_tokens(tokens).unwrap_err(),
        CatalogError::InconsistentAttributes {
            kind: Kind::Cannon,
            color: Color::Black,
        }
    );
}

#[test]
fn both_sides_must_match_the_piece_table() {
    let mut tokens = Catalog::standard().get_all().to_vec();
    for token in tokens.iter_mut().filter(|t| t.kind == Kind::General) {
        token.points = 1_000_000_000;
        token.element = Element::Water;
    }
    assert_eq!(
        Catalog::from_tokens(tokens).unwrap_err(),
        CatalogError::InconsistentAttributes {
            kind: Kind::General,
            color: Color::Red,
        }
    );

    let mut tokens = Catalog::standard().get_all().to_vec();
    for token in tokens.iter_mut().filter(|t| t.kind == Kind::Soldier) {
        token.element = Element::Wood;
    }
    assert!(Catalog::from_tokens(tokens).is_err());
}

#[test]
fn every_catalog_entry_round_trips_through_its_code() {
    let catalog = Catalog::standard();
    for token in catalog.get_all() {
        let code = token.code();
        assert_eq!(code.chars().count(), 2);
        let decoded = Token::from_code(&code, catalog).expect("decode");
        assert_eq!(&decoded, token);
    }
}

#[test]
fn labels_differ_by_color() {
    let catalog = Catalog::standard();
    for kind in Kind::ALL {
        let red = catalog.token(kind, Color::Red).expect("red");
        let black = catalog.token(kind, Color::Black).expect("black");
        assert_ne!(red.label(), black.label());
    }
    let general = catalog.token(Kind::General, Color::Red).expect("general");
    assert_eq!(general.label(), "帥");
}

macro_rules! malformed_case {
    ($name:ident, $code:expr) => {
        #[test]
        fn $name() {
            assert_eq!(
                parse_code($code),
                Err(OracleError::MalformedToken($code.to_string()))
            );
        }
    };
}

malformed_case!(malformed_empty, "");
malformed_case!(malformed_single_char, "R");
malformed_case!(malformed_three_chars, "RKK");
malformed_case!(malformed_color, "GK");
malformed_case!(malformed_kind, "RZ");
malformed_case!(malformed_swapped, "KR");

#[test]
fn codes_are_case_insensitive_and_trimmed() {
    assert_eq!(parse_code(" bp "), Ok((Kind::Soldier, Color::Black)));
    assert_eq!(parse_code("rR"), Ok((Kind::Chariot, Color::Red)));
}

#[test]
fn decode_drops_malformed_codes_without_defaulting() {
    let decoded = decode_codes(["RK", "??", "BA", "RX", "bc"], Catalog::standard())
        .expect("catalog resolves every kind");
    let codes: Vec<String> = decoded.tokens.iter().map(Token::code).collect();
    assert_eq!(codes, vec!["RK", "BA", "BC"]);
    assert_eq!(decoded.dropped, vec!["??".to_string(), "RX".to_string()]);
    assert_eq!(encode_codes(&decoded.tokens), "RK,BA,BC");
}

#[test]
fn token_json_carries_derived_fields() {
    let token = Catalog::standard()
        .token(Kind::Horse, Color::Black)
        .expect("horse");
    let value = serde_json::to_value(token).expect("serialize");
    assert_eq!(value["kind"], "horse");
    assert_eq!(value["color"], "black");
    assert_eq!(value["label"], "馬");
    assert_eq!(value["points"], 20);
    assert_eq!(value["element"], "wood");
    assert_eq!(value["code"], "BH");
}

#[test]
fn token_json_ignores_client_points() {
    let token: Token =
        serde_json::from_str(r#"{"kind":"cannon","color":"red","points":999,"element":"fire"}"#)
            .expect("deserialize");
    assert_eq!(token.points, 15);
    assert_eq!(token.element, Element::Water);
}

#[test]
fn token_json_rejects_unknown_kind() {
    let result: Result<Token, _> = serde_json::from_str(r#"{"kind":"queen","color":"red"}"#);
    assert!(result.is_err());
}
