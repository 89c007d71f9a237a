use serde::{Deserialize, Serialize};

/// Player-visible state of a single grid cell.
///
/// A revealed cell carries its adjacent-mine count. Flagged and revealed are
/// mutually exclusive by construction, and nothing transitions out of
/// `Revealed`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    #[default]
    Hidden,
    Flagged,
    Revealed(u8),
}

impl CellState {
    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed(_))
    }

    pub const fn is_flagged(self) -> bool {
        matches!(self, Self::Flagged)
    }
}
