use crate::texts;
use crate::{Balance, Pattern, PositionAssignment};

pub const ELEMENT_COUNSEL_THRESHOLD: usize = 3;

/// Builds the ordered suggestion list. Each rule contributes at most one
/// entry; the list is never empty.
pub fn generate_suggestions(
    positions: &PositionAssignment,
    patterns: &[Pattern],
    balance: &Balance,
) -> Vec<String> {
    let tally = positions.tally();
    let mut suggestions: Vec<String> = Vec::new();

    if !balance.balanced {
        let text = if balance.red > 3 {
            texts::TOO_MUCH_RED
        } else {
            texts::TOO_MUCH_BLACK
        };
        suggestions.push(text.to_string());
    }

    suggestions.extend(
        patterns
            .iter()
            .filter_map(|pattern| texts::pattern_counsel(*pattern))
            .map(str::to_string),
    );

    let center = positions.center.kind;
    let mut counsel = texts::center_counsel(center).to_string();
    for (partner, clause) in texts::center_partners(center) {
        if *partner != center && tally.has(*partner) {
            counsel.push(' ');
            counsel.push_str(clause);
        }
    }
    suggestions.push(counsel);

    for (element, text) in texts::ELEMENT_COUNSEL {
        if tally.element(element) >= ELEMENT_COUNSEL_THRESHOLD {
            suggestions.push(text.to_string());
        }
    }

    if suggestions.is_empty() {
        suggestions.extend(texts::FALLBACK_COUNSEL.iter().map(|text| text.to_string()));
    }
    suggestions
}
