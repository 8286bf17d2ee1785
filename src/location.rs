use ndarray::Ix;
use strum::VariantArray;

pub(crate) type Coord = usize;

/// Side length of a Gogen board.
pub const GRID_SIZE: Coord = 5;

#[derive(Clone, Eq, Hash, Copy, PartialEq, Ord, PartialOrd, Debug)]
/// A location `(row, col)` on a board. The top left corner is `Location(0, 0)`.
pub struct Location(pub Coord, pub Coord);

impl Location {
    pub(crate) fn as_index(&self) -> (Ix, Ix) {
        (self.0, self.1)
    }

    pub(crate) fn offset_by(self, rhs: (isize, isize)) -> Self {
        Self(self.0.wrapping_add_signed(rhs.0), self.1.wrapping_add_signed(rhs.1))
    }

    /// Whether this location lies on a [`GRID_SIZE`] square board.
    pub fn in_bounds(&self) -> bool {
        self.0 < GRID_SIZE && self.1 < GRID_SIZE
    }

    /// All in-bounds locations reachable by one [`KingStep`], i.e. the up to 8 cells touching this one.
    pub fn neighbors(self) -> impl Iterator<Item = Location> {
        KingStep::VARIANTS.iter()
            .map(move |step| step.attempt_from(self))
            .filter(Location::in_bounds)
    }

    /// Whether `self` and `other` are distinct and touch by side or corner.
    pub fn is_adjacent_to(&self, other: &Location) -> bool {
        self != other && self.0.abs_diff(other.0) <= 1 && self.1.abs_diff(other.1) <= 1
    }
}

impl From<(Ix, Ix)> for Location {
    fn from(value: (Ix, Ix)) -> Self {
        Self(value.0, value.1)
    }
}

/// The eight moves of a chess king; two cells are adjacent on a Gogen board iff one such step separates them.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub enum KingStep {
    /// One row up.
    Up,
    /// One row up and one column right.
    UpRight,
    /// One column right.
    Right,
    /// One row down and one column right.
    DownRight,
    /// One row down.
    Down,
    /// One row down and one column left.
    DownLeft,
    /// One column left.
    Left,
    /// One row up and one column left.
    UpLeft,
}

impl KingStep {
    /// Steps which, taken from a location, land on a location later in row-major order.
    /// Following only these visits every adjacent pair of cells exactly once.
    pub const FORWARD_VARIANTS: &'static [Self] = &[Self::Right, Self::DownLeft, Self::Down, Self::DownRight];

    /// Attempt the step from `location` in the direction specified by `self` and return the resultant [`Location`].
    /// The result may be out of bounds; leaving the top or left edge wraps to a huge coordinate.
    pub fn attempt_from(&self, location: Location) -> Location {
        match self {
            Self::Up => location.offset_by((-1, 0)),
            Self::UpRight => location.offset_by((-1, 1)),
            Self::Right => location.offset_by((0, 1)),
            Self::DownRight => location.offset_by((1, 1)),
            Self::Down => location.offset_by((1, 0)),
            Self::DownLeft => location.offset_by((1, -1)),
            Self::Left => location.offset_by((0, -1)),
            Self::UpLeft => location.offset_by((-1, -1)),
        }
    }
}
