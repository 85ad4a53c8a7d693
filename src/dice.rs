//! Dice types for a five-die roll.

use crate::error::DiceError;

/// Number of dice rolled each turn.
pub const DICE_COUNT: usize = 5;

/// Number of faces on a die.
pub const FACE_COUNT: u8 = 6;

/// A snapshot of the five face-up die values for one roll.
///
/// Faces are validated at construction; a `Roll` always holds values in
/// `1..=6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Roll {
    /// Face-up values, in die order.
    faces: [u8; DICE_COUNT],
}

impl Roll {
    /// Creates a roll from five face values.
    ///
    /// # Errors
    ///
    /// Returns [`DiceError::InvalidFace`] if any value is outside `1..=6`.
    ///
    /// # Example
    ///
    /// ```
    /// use yachtrs::Roll;
    ///
    /// let roll = Roll::new([1, 2, 3, 4, 5]).unwrap();
    /// assert_eq!(roll.sum(), 15);
    /// assert!(Roll::new([0, 2, 3, 4, 5]).is_err());
    /// ```
    pub const fn new(faces: [u8; DICE_COUNT]) -> Result<Self, DiceError> {
        let mut i = 0;
        while i < DICE_COUNT {
            if faces[i] < 1 || faces[i] > FACE_COUNT {
                return Err(DiceError::InvalidFace { face: faces[i] });
            }
            i += 1;
        }
        Ok(Self { faces })
    }

    /// Creates a roll from faces already known to be in range.
    pub(crate) const fn from_faces(faces: [u8; DICE_COUNT]) -> Self {
        debug_assert!(faces[0] >= 1);
        Self { faces }
    }

    /// Returns the face-up values in die order.
    #[must_use]
    pub const fn faces(&self) -> [u8; DICE_COUNT] {
        self.faces
    }

    /// Returns the sum of all five faces.
    #[must_use]
    pub const fn sum(&self) -> u32 {
        let mut total = 0;
        let mut i = 0;
        while i < DICE_COUNT {
            total += self.faces[i] as u32;
            i += 1;
        }
        total
    }

    /// Returns how many dice show each face, indexed by `face - 1`.
    #[must_use]
    pub const fn counts(&self) -> [u8; FACE_COUNT as usize] {
        let mut counts = [0u8; FACE_COUNT as usize];
        let mut i = 0;
        while i < DICE_COUNT {
            counts[(self.faces[i] - 1) as usize] += 1;
            i += 1;
        }
        counts
    }

    /// Returns how many dice show the given face.
    ///
    /// Faces outside `1..=6` count as zero.
    #[must_use]
    pub const fn face_count(&self, face: u8) -> u8 {
        if face < 1 || face > FACE_COUNT {
            return 0;
        }
        self.counts()[(face - 1) as usize]
    }

    /// Returns whether all five dice show the same face.
    #[must_use]
    pub const fn is_five_of_a_kind(&self) -> bool {
        self.face_count(self.faces[0]) == DICE_COUNT as u8
    }
}

impl Default for Roll {
    /// All dice showing 1, the state before the first roll of a game.
    fn default() -> Self {
        Self {
            faces: [1; DICE_COUNT],
        }
    }
}
