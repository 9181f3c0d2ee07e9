use crate::{CatalogError, Color, Element, Kind, Token};
use once_cell::sync::Lazy;
use std::collections::{BTreeMap, HashMap};

pub const CATALOG_SIZE: usize = 32;

// (kind, color, points, element, copies of this color)
const DEFINITIONS: [(Kind, Color, u32, Element, usize); 14] = [
    (Kind::General, Color::Red, 80, Element::Metal, 1),
    (Kind::General, Color::Black, 80, Element::Metal, 1),
    (Kind::Advisor, Color::Red, 60, Element::Metal, 2),
    (Kind::Advisor, Color::Black, 60, Element::Metal, 2),
    (Kind::Elephant, Color::Red, 40, Element::Fire, 2),
    (Kind::Elephant, Color::Black, 40, Element::Fire, 2),
    (Kind::Chariot, Color::Red, 30, Element::Wood, 2),
    (Kind::Chariot, Color::Black, 30, Element::Wood, 2),
    (Kind::Horse, Color::Red, 20, Element::Wood, 2),
    (Kind::Horse, Color::Black, 20, Element::Wood, 2),
    (Kind::Cannon, Color::Red, 15, Element::Water, 2),
    (Kind::Cannon, Color::Black, 15, Element::Water, 2),
    (Kind::Soldier, Color::Red, 10, Element::Earth, 5),
    (Kind::Soldier, Color::Black, 10, Element::Earth, 5),
];

static STANDARD: Lazy<Catalog> = Lazy::new(Catalog::build_standard);

pub fn expected_copies(kind: Kind) -> usize {
    match kind {
        Kind::General => 2,
        Kind::Soldier => 10,
        Kind::Advisor | Kind::Elephant | Kind::Chariot | Kind::Horse | Kind::Cannon => 4,
    }
}

#[derive(Debug, Clone)]
pub struct Catalog {
    tokens: Vec<Token>,
    table: HashMap<(Kind, Color), (u32, Element)>,
}

impl Catalog {
    /// The built-in 32-piece set, shared for the lifetime of the process.
    pub fn standard() -> &'static Catalog {
        &STANDARD
    }

    fn build_standard() -> Self {
        let mut tokens = Vec::with_capacity(CATALOG_SIZE);
        let mut table = HashMap::new();
        for (kind, color, points, element, copies) in DEFINITIONS {
            table.insert((kind, color), (points, element));
            for _ in 0..copies {
                tokens.push(Token::new(kind, color, points, element));
            }
        }
        Self { tokens, table }
    }

    /// Validates a token list against the fixed piece table: 32 tokens, the
    /// per-kind counts, an even color split and the table's points and element
    /// for every token.
    pub fn from_tokens(tokens: Vec<Token>) -> Result<Self, CatalogError> {
        if tokens.len() != CATALOG_SIZE {
            return Err(CatalogError::WrongTokenCount(tokens.len()));
        }

        for token in &tokens {
            if fixed_attributes(token.kind, token.color)? != (token.points, token.element) {
                return Err(CatalogError::InconsistentAttributes {
                    kind: token.kind,
                    color: token.color,
                });
            }
        }

        for kind in Kind::ALL {
            let red = count_where(&tokens, |t| t.kind == kind && t.color == Color::Red);
            let black = count_where(&tokens, |t| t.kind == kind && t.color == Color::Black);
            let expected = expected_copies(kind);
            if red + black != expected {
                return Err(CatalogError::WrongKindCount {
                    kind,
                    expected,
                    found: red + black,
                });
            }
            if red != black {
                return Err(CatalogError::UnevenColorSplit { kind, red, black });
            }
        }

        let table = tokens
            .iter()
            .map(|token| ((token.kind, token.color), (token.points, token.element)))
            .collect();
        Ok(Self { tokens, table })
    }

    /// Tokens in definition order, never shuffled.
    pub fn get_all(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn lookup(&self, kind: Kind, color: Color) -> Result<(u32, Element), CatalogError> {
        self.table
            .get(&(kind, color))
            .copied()
            .ok_or(CatalogError::UnknownCombination { kind, color })
    }

    pub fn token(&self, kind: Kind, color: Color) -> Result<Token, CatalogError> {
        let (points, element) = self.lookup(kind, color)?;
        Ok(Token::new(kind, color, points, element))
    }

    pub fn counts(&self) -> BTreeMap<Kind, usize> {
        let mut counts = BTreeMap::new();
        for token in &self.tokens {
            *counts.entry(token.kind).or_insert(0) += 1;
        }
        counts
    }
}

fn fixed_attributes(kind: Kind, color: Color) -> Result<(u32, Element), CatalogError> {
    DEFINITIONS
        .iter()
        .find(|(k, c, ..)| *k == kind && *c == color)
        .map(|(_, _, points, element, _)| (*points, *element))
        .ok_or(CatalogError::UnknownCombination { kind, color })
}

fn count_where(tokens: &[Token], predicate: impl Fn(&Token) -> bool) -> usize {
    tokens.iter().filter(|token| predicate(*token)).count()
}
