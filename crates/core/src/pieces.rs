use crate::Catalog;
use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    General,
    Advisor,
    Elephant,
    Chariot,
    Horse,
    Cannon,
    Soldier,
}

impl Kind {
    pub const ALL: [Kind; 7] = [
        Kind::General,
        Kind::Advisor,
        Kind::Elephant,
        Kind::Chariot,
        Kind::Horse,
        Kind::Cannon,
        Kind::Soldier,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn id(self) -> &'static str {
        match self {
            Kind::General => "general",
            Kind::Advisor => "advisor",
            Kind::Elephant => "elephant",
            Kind::Chariot => "chariot",
            Kind::Horse => "horse",
            Kind::Cannon => "cannon",
            Kind::Soldier => "soldier",
        }
    }

    /// Both glyphs, red first.
    pub fn name(self) -> &'static str {
        match self {
            Kind::General => "帥/將",
            Kind::Advisor => "仕/士",
            Kind::Elephant => "相/象",
            Kind::Chariot => "俥/車",
            Kind::Horse => "傌/馬",
            Kind::Cannon => "炮/包",
            Kind::Soldier => "兵/卒",
        }
    }

    /// Wire letter, following the WXF piece letters.
    pub fn code(self) -> char {
        match self {
            Kind::General => 'K',
            Kind::Advisor => 'A',
            Kind::Elephant => 'E',
            Kind::Chariot => 'R',
            Kind::Horse => 'H',
            Kind::Cannon => 'C',
            Kind::Soldier => 'P',
        }
    }

    pub fn from_code(code: char) -> Option<Self> {
        match code.to_ascii_uppercase() {
            'K' => Some(Kind::General),
            'A' => Some(Kind::Advisor),
            'E' => Some(Kind::Elephant),
            'R' => Some(Kind::Chariot),
            'H' => Some(Kind::Horse),
            'C' => Some(Kind::Cannon),
            'P' => Some(Kind::Soldier),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    Red,
    Black,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::Red, Color::Black];

    pub fn id(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Black => "black",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::Red => "紅",
            Color::Black => "黑",
        }
    }

    pub fn code(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Black => 'B',
        }
    }

    pub fn from_code(code: char) -> Option<Self> {
        match code.to_ascii_uppercase() {
            'R' => Some(Color::Red),
            'B' => Some(Color::Black),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

impl Element {
    pub const ALL: [Element; 5] = [
        Element::Wood,
        Element::Fire,
        Element::Earth,
        Element::Metal,
        Element::Water,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn id(self) -> &'static str {
        match self {
            Element::Wood => "wood",
            Element::Fire => "fire",
            Element::Earth => "earth",
            Element::Metal => "metal",
            Element::Water => "water",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Element::Wood => "木",
            Element::Fire => "火",
            Element::Earth => "土",
            Element::Metal => "金",
            Element::Water => "水",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: Kind,
    pub color: Color,
    pub points: u32,
    pub element: Element,
}

impl Token {
    pub fn new(kind: Kind, color: Color, points: u32, element: Element) -> Self {
        Self {
            kind,
            color,
            points,
            element,
        }
    }

    pub fn label(&self) -> &'static str {
        match (self.color, self.kind) {
            (Color::Red, Kind::General) => "帥",
            (Color::Red, Kind::Advisor) => "仕",
            (Color::Red, Kind::Elephant) => "相",
            (Color::Red, Kind::Chariot) => "俥",
            (Color::Red, Kind::Horse) => "傌",
            (Color::Red, Kind::Cannon) => "炮",
            (Color::Red, Kind::Soldier) => "兵",
            (Color::Black, Kind::General) => "將",
            (Color::Black, Kind::Advisor) => "士",
            (Color::Black, Kind::Elephant) => "象",
            (Color::Black, Kind::Chariot) => "車",
            (Color::Black, Kind::Horse) => "馬",
            (Color::Black, Kind::Cannon) => "包",
            (Color::Black, Kind::Soldier) => "卒",
        }
    }

    pub fn same_piece(&self, other: &Token) -> bool {
        self.kind == other.kind && self.color == other.color
    }
}

#[derive(Serialize)]
struct TokenView {
    kind: Kind,
    color: Color,
    label: &'static str,
    points: u32,
    element: Element,
    code: String,
}

impl Serialize for Token {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        TokenView {
            kind: self.kind,
            color: self.color,
            label: self.label(),
            points: self.points,
            element: self.element,
            code: self.code(),
        }
        .serialize(serializer)
    }
}

#[derive(Deserialize)]
struct TokenRef {
    kind: Kind,
    color: Color,
}

// Points and element are never taken from the input; the registry owns them.
impl<'de> Deserialize<'de> for Token {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = TokenRef::deserialize(deserializer)?;
        Catalog::standard()
            .token(raw.kind, raw.color)
            .map_err(de::Error::custom)
    }
}
