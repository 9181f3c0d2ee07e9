use crate::{Color, Kind};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("no catalog entry for {kind:?} ({color:?})")]
    UnknownCombination { kind: Kind, color: Color },
    #[error("catalog must hold 32 tokens, found {0}")]
    WrongTokenCount(usize),
    #[error("catalog holds {found} {kind:?} tokens, expected {expected}")]
    WrongKindCount {
        kind: Kind,
        expected: usize,
        found: usize,
    },
    #[error("{kind:?} tokens split {red} red / {black} black")]
    UnevenColorSplit {
        kind: Kind,
        red: usize,
        black: usize,
    },
    #[error("{kind:?} ({color:?}) does not match the piece table")]
    InconsistentAttributes { kind: Kind, color: Color },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OracleError {
    #[error("malformed token code {0:?}")]
    MalformedToken(String),
    #[error("a selection needs exactly 5 tokens, got {0}")]
    WrongSelectionSize(usize),
    #[error("pick {index} is outside a board of {len}")]
    PickOutOfRange { index: usize, len: usize },
    #[error("board index {0} picked twice")]
    DuplicatePick(usize),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
