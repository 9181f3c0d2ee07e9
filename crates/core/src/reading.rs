use crate::{
    analyze_health, generate_suggestions, identify_patterns, missing_talents, Analysis, Balance,
    Pattern, PositionAssignment, Selection, Talent,
};
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reading {
    pub selection: Selection,
    pub positions: PositionAssignment,
    pub balanced: bool,
    pub balance_score: u32,
    pub missing_talents: Vec<Talent>,
    pub patterns: Vec<Pattern>,
    pub analysis: Analysis,
    pub health: String,
    pub suggestions: Vec<String>,
}

/// Interprets a completed selection. Pure and deterministic.
pub fn divine(selection: &Selection) -> Reading {
    let positions = selection.assign();
    let tally = positions.tally();
    let balance = Balance::of(&tally);
    let patterns = identify_patterns(&positions);
    let suggestions = generate_suggestions(&positions, &patterns, &balance);
    debug!(
        red = balance.red,
        black = balance.black,
        patterns = ?patterns.iter().map(|p| p.id()).collect::<Vec<_>>(),
        "divined selection"
    );
    Reading {
        selection: *selection,
        positions,
        balanced: balance.balanced,
        balance_score: balance.score,
        missing_talents: missing_talents(&tally),
        analysis: Analysis::of(&positions),
        health: analyze_health(&positions),
        patterns,
        suggestions,
    }
}
