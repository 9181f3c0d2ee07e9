use crate::{Catalog, OracleError, RngState, Selection, Token, SELECTION_SIZE};
use serde::Serialize;

/// One shuffled copy of the catalog, alive for a single round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    pub seed: u64,
    pub pieces: Vec<Token>,
}

impl Board {
    pub fn shuffled(catalog: &Catalog, rng: &mut RngState) -> Self {
        let mut pieces = catalog.get_all().to_vec();
        rng.shuffle(&mut pieces);
        Self {
            seed: rng.seed(),
            pieces,
        }
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Picks board positions in order, without replacement.
    pub fn select(&self, indices: &[usize]) -> Result<Selection, OracleError> {
        if indices.len() != SELECTION_SIZE {
            return Err(OracleError::WrongSelectionSize(indices.len()));
        }
        let mut picked = Vec::with_capacity(SELECTION_SIZE);
        for (pos, &index) in indices.iter().enumerate() {
            if indices[..pos].contains(&index) {
                return Err(OracleError::DuplicatePick(index));
            }
            let token = self.pieces.get(index).ok_or(OracleError::PickOutOfRange {
                index,
                len: self.pieces.len(),
            })?;
            picked.push(*token);
        }
        Selection::new(picked)
    }
}

/// Board generator entry point: a fresh, independently shuffled board per call.
pub fn get_board() -> Board {
    Board::shuffled(Catalog::standard(), &mut RngState::from_entropy())
}
