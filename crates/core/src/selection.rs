use crate::{Color, Element, Kind, OracleError, Token};
use serde::Serialize;

pub const SELECTION_SIZE: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    Center,
    Left,
    Right,
    Top,
    Bottom,
}

impl Slot {
    /// Pick order: the n-th pick lands in `ALL[n]`.
    pub const ALL: [Slot; 5] = [Slot::Center, Slot::Left, Slot::Right, Slot::Top, Slot::Bottom];
    pub const SURROUNDING: [Slot; 4] = [Slot::Left, Slot::Right, Slot::Top, Slot::Bottom];

    pub fn id(self) -> &'static str {
        match self {
            Slot::Center => "center",
            Slot::Left => "left",
            Slot::Right => "right",
            Slot::Top => "top",
            Slot::Bottom => "bottom",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Slot::Center => "中",
            Slot::Left => "左",
            Slot::Right => "右",
            Slot::Top => "上",
            Slot::Bottom => "下",
        }
    }
}

/// Five picked tokens in pick order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Selection([Token; SELECTION_SIZE]);

impl Selection {
    pub fn new(tokens: Vec<Token>) -> Result<Self, OracleError> {
        let len = tokens.len();
        let tokens: [Token; SELECTION_SIZE] = tokens
            .try_into()
            .map_err(|_| OracleError::WrongSelectionSize(len))?;
        Ok(Self(tokens))
    }

    pub fn tokens(&self) -> &[Token; SELECTION_SIZE] {
        &self.0
    }

    pub fn assign(&self) -> PositionAssignment {
        let [center, left, right, top, bottom] = self.0;
        PositionAssignment {
            center,
            left,
            right,
            top,
            bottom,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PositionAssignment {
    pub center: Token,
    pub left: Token,
    pub right: Token,
    pub top: Token,
    pub bottom: Token,
}

impl PositionAssignment {
    pub fn get(&self, slot: Slot) -> &Token {
        match slot {
            Slot::Center => &self.center,
            Slot::Left => &self.left,
            Slot::Right => &self.right,
            Slot::Top => &self.top,
            Slot::Bottom => &self.bottom,
        }
    }

    pub fn tokens(&self) -> [Token; SELECTION_SIZE] {
        [self.center, self.left, self.right, self.top, self.bottom]
    }

    pub fn surrounding(&self) -> impl Iterator<Item = (Slot, &Token)> + '_ {
        Slot::SURROUNDING.into_iter().map(|slot| (slot, self.get(slot)))
    }

    pub fn same_color(&self, slots: &[Slot]) -> bool {
        let mut colors = slots.iter().map(|slot| self.get(*slot).color);
        match colors.next() {
            Some(first) => colors.all(|color| color == first),
            None => true,
        }
    }

    pub fn tally(&self) -> Tally {
        Tally::of(&self.tokens())
    }
}

/// Per-kind, per-element and per-color counts over a set of tokens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    kinds: [usize; 7],
    elements: [usize; 5],
    red: usize,
    black: usize,
}

impl Tally {
    pub fn of(tokens: &[Token]) -> Self {
        let mut tally = Tally::default();
        for token in tokens {
            tally.kinds[token.kind.index()] += 1;
            tally.elements[token.element.index()] += 1;
            match token.color {
                Color::Red => tally.red += 1,
                Color::Black => tally.black += 1,
            }
        }
        tally
    }

    pub fn kind(&self, kind: Kind) -> usize {
        self.kinds[kind.index()]
    }

    pub fn has(&self, kind: Kind) -> bool {
        self.kind(kind) > 0
    }

    pub fn element(&self, element: Element) -> usize {
        self.elements[element.index()]
    }

    pub fn red(&self) -> usize {
        self.red
    }

    pub fn black(&self) -> usize {
        self.black
    }
}
