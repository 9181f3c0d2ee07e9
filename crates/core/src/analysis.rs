use crate::texts::{self, CLAUSE_DELIMITER};
use crate::{has_duplicate_piece, is_good_friend, Element, PositionAssignment, Slot, Token};
use serde::Serialize;
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    pub state: String,
    pub interaction: String,
    pub give_and_take: String,
}

impl Analysis {
    pub fn of(positions: &PositionAssignment) -> Self {
        Self {
            state: analyze_state(positions),
            interaction: analyze_interaction(positions),
            give_and_take: analyze_give_and_take(positions),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    Supportive,
    Complementary,
    Friction,
}

impl Relation {
    fn column(self) -> usize {
        match self {
            Relation::Supportive => 0,
            Relation::Complementary => 1,
            Relation::Friction => 2,
        }
    }
}

pub fn relation(positions: &PositionAssignment, slot: Slot) -> Relation {
    let center = &positions.center;
    let other = positions.get(slot);
    if other.color == center.color {
        Relation::Supportive
    } else if is_good_friend(center, other) {
        Relation::Complementary
    } else {
        Relation::Friction
    }
}

pub fn analyze_state(positions: &PositionAssignment) -> String {
    let center = &positions.center;
    let mut lines = vec![format!(
        "{}，{}。",
        texts::center_archetype(center.kind),
        texts::center_disposition(center.color)
    )];
    lines.push(format!("\n{}", texts::SURROUNDING_HEADER));
    for (_, token) in positions.surrounding() {
        let (same, different) = texts::influence(token.kind);
        let text = if token.color == center.color {
            same
        } else {
            different
        };
        lines.push(format!("- 來自（{}）的{}。", token.label(), text));
    }
    lines.join("\n")
}

pub fn analyze_interaction(positions: &PositionAssignment) -> String {
    Slot::SURROUNDING
        .iter()
        .zip(texts::INTERACTION.iter())
        .map(|(slot, row)| row[relation(positions, *slot).column()])
        .collect::<Vec<_>>()
        .join(CLAUSE_DELIMITER)
}

pub fn analyze_give_and_take(positions: &PositionAssignment) -> String {
    let tokens = positions.tokens();
    let center = &positions.center;
    let total: u32 = tokens.iter().map(|token| token.points).sum();
    let (same, different): (Vec<&Token>, Vec<&Token>) = tokens
        .iter()
        .partition(|token| token.color == center.color);
    let same_points: u32 = same.iter().map(|token| token.points).sum();
    let different_points: u32 = different.iter().map(|token| token.points).sum();

    // center / total compared as integers: >= 0.4 and >= 0.25
    let share = if center.points * 5 >= total * 2 {
        0
    } else if center.points * 4 >= total {
        1
    } else {
        2
    };
    let support = match same.len() {
        n if n >= 4 => 0,
        3 => 1,
        _ => 2,
    };
    let challenge = match different.len() {
        n if n >= 3 => 0,
        2 => 1,
        _ => 2,
    };
    let returns = match same_points.cmp(&different_points) {
        Ordering::Greater => 0,
        Ordering::Equal => 1,
        Ordering::Less => 2,
    };

    [
        texts::PERSONAL_SHARE[share],
        texts::SUPPORT[support],
        texts::CHALLENGE[challenge],
        texts::RETURN[returns],
    ]
    .join(CLAUSE_DELIMITER)
}

pub const ELEMENT_EXCESS_THRESHOLD: usize = 3;

pub fn analyze_health(positions: &PositionAssignment) -> String {
    let tally = positions.tally();
    let mut issues: Vec<&str> = Vec::new();
    issues.extend(
        Element::ALL
            .iter()
            .filter(|element| tally.element(**element) >= ELEMENT_EXCESS_THRESHOLD)
            .map(|element| texts::element_excess(*element)),
    );
    issues.extend(
        Element::ALL
            .iter()
            .filter(|element| tally.element(**element) == 0)
            .map(|element| texts::element_deficiency(*element)),
    );
    if let Some(warning) = texts::center_health(positions.center.kind) {
        issues.push(warning);
    }
    if has_duplicate_piece(&positions.tokens()) {
        issues.push(texts::CONSUMPTION_HEALTH);
    }
    if issues.is_empty() {
        issues.push(texts::BALANCED_HEALTH);
    }
    issues.join(CLAUSE_DELIMITER)
}
