use qigua_core::{
    count_friend_pairs, decode_codes, identify_patterns, missing_talents, Balance, Catalog, Color,
    EchoOutlook, Kind, Pattern, RomanticPairing, Selection, Talent, Token,
};

fn selection(codes: [&str; 5]) -> Selection {
    let decoded = decode_codes(codes, Catalog::standard()).expect("decode");
    assert!(decoded.dropped.is_empty(), "bad codes {:?}", decoded.dropped);
    Selection::new(decoded.tokens).expect("five tokens")
}

fn patterns(codes: [&str; 5]) -> Vec<Pattern> {
    identify_patterns(&selection(codes).assign())
}

fn token(kind: Kind, color: Color) -> Token {
    Catalog::standard().token(kind, color).expect("catalog entry")
}

/// Every coloring of a fixed kind layout, red where the bit is set.
fn colorings(kinds: [Kind; 5]) -> impl Iterator<Item = Selection> {
    (0u32..32).map(move |mask| {
        let tokens = kinds
            .iter()
            .enumerate()
            .map(|(idx, kind)| {
                let color = if mask & (1 << idx) != 0 {
                    Color::Red
                } else {
                    Color::Black
                };
                token(*kind, color)
            })
            .collect();
        Selection::new(tokens).expect("five tokens")
    })
}

const MIXED_KINDS: [Kind; 5] = [
    Kind::Horse,
    Kind::Chariot,
    Kind::Elephant,
    Kind::Cannon,
    Kind::Advisor,
];

#[test]
fn balance_scores_only_two_three_splits() {
    for sel in colorings(MIXED_KINDS) {
        let balance = Balance::of(&sel.assign().tally());
        assert!(balance.score == 95 || balance.score == 100);
        assert_eq!(balance.score == 100, matches!(balance.red, 2 | 3));
        assert_eq!(balance.balanced, balance.score == 100);
        assert_eq!(balance.red + balance.black, 5);
    }
}

#[test]
fn soldier_always_satisfies_earth() {
    for sel in colorings([
        Kind::Soldier,
        Kind::Horse,
        Kind::Horse,
        Kind::Advisor,
        Kind::Advisor,
    ]) {
        let missing = missing_talents(&sel.assign().tally());
        assert!(!missing.contains(&Talent::Earth));
        assert!(!missing.contains(&Talent::Heaven));
    }
}

#[test]
fn missing_talents_are_reported_in_order() {
    let sel = selection(["RA", "BA", "RH", "BH", "RC"]);
    assert_eq!(
        missing_talents(&sel.assign().tally()),
        vec![Talent::Heaven, Talent::Earth]
    );
    let sel = selection(["RK", "BR", "RR", "BK", "BR"]);
    assert_eq!(
        missing_talents(&sel.assign().tally()),
        vec![Talent::Human, Talent::Earth]
    );
}

#[test]
fn separation_never_fires_with_two_colors() {
    for sel in colorings(MIXED_KINDS) {
        assert!(!identify_patterns(&sel.assign()).contains(&Pattern::Separation));
    }
}

#[test]
fn singular_standout_needs_one_or_four_red() {
    for sel in colorings(MIXED_KINDS) {
        let red = sel
            .tokens()
            .iter()
            .filter(|t| t.color == Color::Red)
            .count();
        let hit = identify_patterns(&sel.assign()).contains(&Pattern::SingularStandout);
        assert_eq!(hit, red == 1 || red == 4, "red = {red}");
    }
}

#[test]
fn all_red_selection() {
    assert_eq!(
        patterns(["RK", "RA", "RA", "RE", "RR"]),
        vec![
            Pattern::AllRed,
            Pattern::ConvergingStars,
            Pattern::CrossBlessing,
            Pattern::Victory,
            Pattern::Umbrella,
            Pattern::Career,
            Pattern::Wealth,
            Pattern::Consumption,
        ]
    );
}

#[test]
fn all_black_never_echoes() {
    let found = patterns(["BP", "BH", "BE", "BC", "BA"]);
    assert_eq!(found[0], Pattern::AllBlack);
    assert!(!found.iter().any(|p| matches!(p, Pattern::Echo(_))));
    assert!(!found.contains(&Pattern::Separation));
    assert!(!found.contains(&Pattern::SingularStandout));
}

#[test]
fn black_center_echo_is_favorable() {
    assert_eq!(
        patterns(["BP", "RH", "RH", "RC", "RC"]),
        vec![
            Pattern::SingularStandout,
            Pattern::Echo(EchoOutlook::Favorable),
            Pattern::Victory,
            Pattern::Umbrella,
            Pattern::Romantic(RomanticPairing::TwinCannons),
            Pattern::Entanglement,
            Pattern::Consumption,
        ]
    );
}

#[test]
fn red_center_echo_is_unfavorable() {
    let found = patterns(["RP", "BH", "BR", "BE", "BA"]);
    assert!(found.contains(&Pattern::Echo(EchoOutlook::Unfavorable)));
    assert!(!found.contains(&Pattern::ConvergingStars));
}

#[test]
fn cross_blessing_on_vertical_arm() {
    let found = patterns(["RP", "BH", "RR", "RE", "RA"]);
    assert!(found.contains(&Pattern::CrossBlessing));
    assert!(!found.contains(&Pattern::Victory));
    assert!(!found.contains(&Pattern::Umbrella));
}

#[test]
fn victory_and_umbrella_overlap() {
    let found = patterns(["BK", "RH", "RR", "RE", "RA"]);
    assert!(found.contains(&Pattern::Victory));
    assert!(found.contains(&Pattern::Umbrella));
}

#[test]
fn romantic_prefers_twin_cannons() {
    let found = patterns(["RC", "BK", "BC", "RP", "BP"]);
    assert!(found.contains(&Pattern::Romantic(RomanticPairing::TwinCannons)));
    assert!(!found.contains(&Pattern::Romantic(RomanticPairing::CannonGeneral)));
}

#[test]
fn romantic_cannon_with_general() {
    let found = patterns(["RC", "BK", "RP", "BP", "RE"]);
    assert!(found.contains(&Pattern::Romantic(RomanticPairing::CannonGeneral)));
}

#[test]
fn friend_pairs_count_same_color_only() {
    let mixed = selection(["RA", "BA", "RH", "BH", "RP"]);
    assert_eq!(count_friend_pairs(mixed.tokens()), 0);
    assert!(!identify_patterns(&mixed.assign()).contains(&Pattern::Entanglement));

    let paired = selection(["RA", "RA", "BH", "BH", "RP"]);
    assert_eq!(count_friend_pairs(paired.tokens()), 2);
    assert!(identify_patterns(&paired.assign()).contains(&Pattern::Entanglement));
}

#[test]
fn soldiers_do_not_count_as_friend_pairs() {
    let sel = selection(["RP", "RP", "BP", "BP", "RK"]);
    assert_eq!(count_friend_pairs(sel.tokens()), 0);
}

#[test]
fn good_friend_needs_same_kind_opposite_color() {
    assert!(patterns(["RA", "BA", "RH", "BH", "RP"]).contains(&Pattern::GoodFriend));
    assert!(!patterns(["RA", "BH", "RH", "BE", "RP"]).contains(&Pattern::GoodFriend));
    assert!(!patterns(["RK", "BK", "RH", "BE", "RP"]).contains(&Pattern::GoodFriend));
}

#[test]
fn career_and_wealth() {
    let found = patterns(["BE", "RH", "BP", "BP", "RC"]);
    assert!(found.contains(&Pattern::Career));
    assert!(!found.contains(&Pattern::Wealth));

    let found = patterns(["BK", "RE", "BP", "RP", "RC"]);
    assert!(found.contains(&Pattern::Wealth));
    assert!(!found.contains(&Pattern::Career));
}

#[test]
fn pattern_names_serialize_as_strings() {
    let value = serde_json::to_value(vec![
        Pattern::Echo(EchoOutlook::Favorable),
        Pattern::Romantic(RomanticPairing::CannonGeneral),
    ])
    .expect("serialize");
    assert_eq!(value, serde_json::json!(["聲聲格（外人看好）", "桃花格（包將）"]));
}
