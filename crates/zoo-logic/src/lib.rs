//! Pure simulation logic for Zooperator.
//!
//! This crate contains the whole zoo engine independent of any terminal,
//! menu loop, or runtime. Functions take plain data and return results,
//! making them unit-testable and drivable from the headless simtest as
//! easily as from an interactive front end.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`actions`] | Per-day action point budget and action log |
//! | [`animal`] | Animal vitals, clamping, eating, sleep and nightly decay |
//! | [`board`] | Mission board: evaluation, rewards, advance gate, unwinnable check |
//! | [`config`] | Run configuration loading and validation |
//! | [`constants`] | Tuning constants (thresholds, weights, prices, wages) |
//! | [`economy`] | Visitors, revenue, expenses, projected balance, rating |
//! | [`error`] | Crate-wide error type |
//! | [`exhibit`] | Capacity-bounded exhibits with cleanliness |
//! | [`game`] | Day cycle driver, game-over detection, final review |
//! | [`generation`] | Randomized ages and capacities at purchase time |
//! | [`habitat`] | Habitat types and exhibit catalog |
//! | [`keeper`] | Player actions: feed, play, exercise, treat, clean |
//! | [`mission`] | Mission kinds, records and templates |
//! | [`schedule`] | The day-indexed mission table |
//! | [`settlement`] | Nightly welfare rules and end-of-day settlement |
//! | [`species`] | Species catalog: costs, decay, habitat, rarity |
//! | [`zoo`] | The zoo registry: ownership, placement, balance, day |

pub mod actions;
pub mod animal;
pub mod board;
pub mod config;
pub mod constants;
pub mod economy;
pub mod error;
pub mod exhibit;
pub mod game;
pub mod generation;
pub mod habitat;
pub mod keeper;
pub mod mission;
pub mod schedule;
pub mod settlement;
pub mod species;
pub mod zoo;

pub use error::ZooError;
