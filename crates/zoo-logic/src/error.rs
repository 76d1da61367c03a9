//! Crate-wide error type.
//!
//! Every fallible engine operation returns `Result<_, ZooError>` and leaves
//! state untouched on failure. Run-ending conditions (bankruptcy, no animals,
//! unwinnable missions) are not errors; see [`crate::game::DayOutcome`].

use thiserror::Error;

use crate::animal::AnimalId;
use crate::exhibit::ExhibitId;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ZooError {
    #[error("No animal with id {0}")]
    UnknownAnimal(AnimalId),
    #[error("No exhibit with id {0}")]
    UnknownExhibit(ExhibitId),
    #[error("Insufficient funds: need ${needed:.0}, have ${available:.0}")]
    InsufficientFunds { needed: f64, available: f64 },
    #[error("Animal is not alive")]
    NotAlive,
    #[error("Animal is too tired: needs {required} energy, has {energy}")]
    TooTired { required: i32, energy: i32 },
    #[error("Exhibit is at full capacity")]
    ExhibitFull,
    #[error("Animal is already in this exhibit")]
    AlreadyInExhibit,
    #[error("Animal is not in this exhibit")]
    NotInExhibit,
    #[error("Animal is not in any exhibit")]
    NotPlaced,
    #[error("Animal is already in the destination exhibit")]
    SameExhibit,
    #[error("Animal {0} could not be returned to its exhibit")]
    Stranded(AnimalId),
    #[error("Amount must be positive, got {0}")]
    InvalidAmount(i32),
    #[error("Name cannot be empty")]
    EmptyName,
    #[error("No action points remaining today")]
    NoActionPoints,
    #[error("The run has ended")]
    RunOver,
}
