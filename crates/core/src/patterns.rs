use crate::{Color, Kind, PositionAssignment, Slot, Tally, Token};
use serde::ser::Serializer;
use serde::Serialize;

pub const BALANCED_SCORE: u32 = 100;
pub const UNBALANCED_SCORE: u32 = 95;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Balance {
    pub red: usize,
    pub black: usize,
    pub balanced: bool,
    pub score: u32,
}

impl Balance {
    pub fn of(tally: &Tally) -> Self {
        let (red, black) = (tally.red(), tally.black());
        let balanced = matches!((red, black), (2, 3) | (3, 2));
        Self {
            red,
            black,
            balanced,
            score: if balanced {
                BALANCED_SCORE
            } else {
                UNBALANCED_SCORE
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Talent {
    Heaven,
    Human,
    Earth,
}

impl Talent {
    pub const ALL: [Talent; 3] = [Talent::Heaven, Talent::Human, Talent::Earth];

    /// Kinds that satisfy the talent. Soldier sits in both Heaven and Earth.
    pub fn kinds(self) -> &'static [Kind] {
        match self {
            Talent::Heaven => &[Kind::General, Kind::Chariot, Kind::Soldier],
            Talent::Human => &[Kind::Advisor, Kind::Horse, Kind::Cannon],
            Talent::Earth => &[Kind::Elephant, Kind::Soldier],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Talent::Heaven => "天格",
            Talent::Human => "人格",
            Talent::Earth => "地格",
        }
    }
}

impl Serialize for Talent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

pub fn missing_talents(tally: &Tally) -> Vec<Talent> {
    Talent::ALL
        .into_iter()
        .filter(|talent| !talent.kinds().iter().any(|kind| tally.has(*kind)))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EchoOutlook {
    /// Black center: outsiders think well of you.
    Favorable,
    /// Red center: outsiders think poorly of you.
    Unfavorable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RomanticPairing {
    TwinCannons,
    CannonGeneral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pattern {
    AllRed,
    AllBlack,
    SingularStandout,
    Echo(EchoOutlook),
    ConvergingStars,
    CrossBlessing,
    Victory,
    Umbrella,
    Romantic(RomanticPairing),
    UnityOfThree,
    Career,
    Wealth,
    Entanglement,
    Separation,
    Consumption,
    GoodFriend,
}

impl Pattern {
    pub fn id(self) -> &'static str {
        match self {
            Pattern::AllRed => "all_red",
            Pattern::AllBlack => "all_black",
            Pattern::SingularStandout => "singular_standout",
            Pattern::Echo(EchoOutlook::Favorable) => "echo_favorable",
            Pattern::Echo(EchoOutlook::Unfavorable) => "echo_unfavorable",
            Pattern::ConvergingStars => "converging_stars",
            Pattern::CrossBlessing => "cross_blessing",
            Pattern::Victory => "victory",
            Pattern::Umbrella => "umbrella",
            Pattern::Romantic(RomanticPairing::TwinCannons) => "romantic_twin_cannons",
            Pattern::Romantic(RomanticPairing::CannonGeneral) => "romantic_cannon_general",
            Pattern::UnityOfThree => "unity_of_three",
            Pattern::Career => "career",
            Pattern::Wealth => "wealth",
            Pattern::Entanglement => "entanglement",
            Pattern::Separation => "separation",
            Pattern::Consumption => "consumption",
            Pattern::GoodFriend => "good_friend",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Pattern::AllRed => "全紅格",
            Pattern::AllBlack => "全黑格",
            Pattern::SingularStandout => "一枝獨秀格",
            Pattern::Echo(EchoOutlook::Favorable) => "聲聲格（外人看好）",
            Pattern::Echo(EchoOutlook::Unfavorable) => "聲聲格（外人看不好）",
            Pattern::ConvergingStars => "眾星拱月格",
            Pattern::CrossBlessing => "十字天助格",
            Pattern::Victory => "勝利格",
            Pattern::Umbrella => "雨傘格",
            Pattern::Romantic(RomanticPairing::TwinCannons) => "桃花格（包包）",
            Pattern::Romantic(RomanticPairing::CannonGeneral) => "桃花格（包將）",
            Pattern::UnityOfThree => "三人同心格",
            Pattern::Career => "事業格",
            Pattern::Wealth => "富貴格",
            Pattern::Entanglement => "困擾格",
            Pattern::Separation => "分離格（離婚格）",
            Pattern::Consumption => "消耗格",
            Pattern::GoodFriend => "好朋友格",
        }
    }
}

impl Serialize for Pattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

type PatternRule = fn(&PositionAssignment, &Tally) -> Option<Pattern>;

// Evaluation order is the reporting order.
const PATTERN_RULES: [PatternRule; 15] = [
    uniform_color,
    singular_standout,
    echo,
    converging_stars,
    cross_blessing,
    victory,
    umbrella,
    romantic,
    unity_of_three,
    career,
    wealth,
    entanglement,
    separation,
    consumption,
    good_friend,
];

/// Kinds that form a good-friend pair with an opposite-colored copy of themselves.
pub const GOOD_FRIEND_KINDS: [Kind; 6] = [
    Kind::Advisor,
    Kind::Elephant,
    Kind::Chariot,
    Kind::Soldier,
    Kind::Horse,
    Kind::Cannon,
];

/// Kinds whose same-colored pairs count toward entanglement.
pub const FRIEND_PAIR_KINDS: [Kind; 3] = [Kind::Advisor, Kind::Cannon, Kind::Horse];

pub fn identify_patterns(positions: &PositionAssignment) -> Vec<Pattern> {
    let tally = positions.tally();
    PATTERN_RULES
        .iter()
        .filter_map(|rule| rule(positions, &tally))
        .collect()
}

pub fn is_good_friend(a: &Token, b: &Token) -> bool {
    a.color != b.color && a.kind == b.kind && GOOD_FRIEND_KINDS.contains(&a.kind)
}

pub fn has_duplicate_piece(tokens: &[Token]) -> bool {
    tokens
        .iter()
        .enumerate()
        .any(|(idx, token)| tokens[idx + 1..].iter().any(|other| token.same_piece(other)))
}

pub fn count_friend_pairs(tokens: &[Token]) -> usize {
    let mut pairs = 0;
    for kind in FRIEND_PAIR_KINDS {
        for color in Color::ALL {
            let count = tokens
                .iter()
                .filter(|token| token.kind == kind && token.color == color)
                .count();
            pairs += count / 2;
        }
    }
    pairs
}

fn when(hit: bool, pattern: Pattern) -> Option<Pattern> {
    hit.then_some(pattern)
}

fn uniform_color(_: &PositionAssignment, tally: &Tally) -> Option<Pattern> {
    match (tally.red(), tally.black()) {
        (_, 0) => Some(Pattern::AllRed),
        (0, _) => Some(Pattern::AllBlack),
        _ => None,
    }
}

fn singular_standout(_: &PositionAssignment, tally: &Tally) -> Option<Pattern> {
    when(matches!(tally.red(), 1 | 4), Pattern::SingularStandout)
}

fn echo(positions: &PositionAssignment, _: &Tally) -> Option<Pattern> {
    let center = positions.center.color;
    if !positions.surrounding().all(|(_, token)| token.color != center) {
        return None;
    }
    Some(Pattern::Echo(match center {
        Color::Black => EchoOutlook::Favorable,
        Color::Red => EchoOutlook::Unfavorable,
    }))
}

fn converging_stars(positions: &PositionAssignment, _: &Tally) -> Option<Pattern> {
    when(positions.same_color(&Slot::ALL), Pattern::ConvergingStars)
}

fn cross_blessing(positions: &PositionAssignment, _: &Tally) -> Option<Pattern> {
    let hit = positions.same_color(&[Slot::Center, Slot::Left, Slot::Right])
        || positions.same_color(&[Slot::Center, Slot::Top, Slot::Bottom]);
    when(hit, Pattern::CrossBlessing)
}

fn victory(positions: &PositionAssignment, _: &Tally) -> Option<Pattern> {
    when(
        positions.same_color(&[Slot::Left, Slot::Right, Slot::Bottom]),
        Pattern::Victory,
    )
}

fn umbrella(positions: &PositionAssignment, _: &Tally) -> Option<Pattern> {
    when(
        positions.same_color(&[Slot::Left, Slot::Right, Slot::Top]),
        Pattern::Umbrella,
    )
}

// Priority rule: twin cannons win over the cannon/general pairing.
fn romantic(_: &PositionAssignment, tally: &Tally) -> Option<Pattern> {
    if tally.kind(Kind::Cannon) >= 2 {
        Some(Pattern::Romantic(RomanticPairing::TwinCannons))
    } else if tally.has(Kind::Cannon) && tally.has(Kind::General) {
        Some(Pattern::Romantic(RomanticPairing::CannonGeneral))
    } else {
        None
    }
}

fn unity_of_three(_: &PositionAssignment, tally: &Tally) -> Option<Pattern> {
    when(tally.kind(Kind::Soldier) >= 3, Pattern::UnityOfThree)
}

fn career(_: &PositionAssignment, tally: &Tally) -> Option<Pattern> {
    let hit =
        tally.has(Kind::Elephant) && (tally.has(Kind::Chariot) || tally.has(Kind::Horse));
    when(hit, Pattern::Career)
}

fn wealth(_: &PositionAssignment, tally: &Tally) -> Option<Pattern> {
    let hit =
        tally.has(Kind::General) && (tally.has(Kind::Advisor) || tally.has(Kind::Elephant));
    when(hit, Pattern::Wealth)
}

fn entanglement(positions: &PositionAssignment, _: &Tally) -> Option<Pattern> {
    when(
        count_friend_pairs(&positions.tokens()) >= 2,
        Pattern::Entanglement,
    )
}

fn separation(positions: &PositionAssignment, _: &Tally) -> Option<Pattern> {
    let center = positions.center.color;
    let split = |a: &Token, b: &Token| a.color != center && b.color != center && a.color != b.color;
    let hit = split(&positions.left, &positions.right) || split(&positions.top, &positions.bottom);
    when(hit, Pattern::Separation)
}

fn consumption(positions: &PositionAssignment, _: &Tally) -> Option<Pattern> {
    when(
        has_duplicate_piece(&positions.tokens()),
        Pattern::Consumption,
    )
}

fn good_friend(positions: &PositionAssignment, _: &Tally) -> Option<Pattern> {
    let hit = positions
        .surrounding()
        .any(|(_, token)| is_good_friend(&positions.center, token));
    when(hit, Pattern::GoodFriend)
}
