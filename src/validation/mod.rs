//! Schema validation
//!
//! Pure checks applied before any write, independent of the storage
//! backend, so they can be exercised without opening a store.

mod event;
mod roster;

pub use event::{
    validate_event, validate_quarter, validate_stored_event, ValidEvent, MAX_QUARTER, MIN_QUARTER,
};
pub use roster::{validate_box_score, validate_game, validate_player, validate_player_update};
