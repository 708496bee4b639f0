//! Action resolution formulas.
//!
//! Pure functions over validated configuration plus an injected
//! [`RngSource`](crate::env::RngSource). The engine sequences these; the
//! formulas themselves never touch match state.

pub mod damage;
pub mod heal;
pub mod hit;

pub use damage::{DamageRoll, mitigate, roll_damage};
pub use heal::roll_heal;
pub use hit::{check_hit, hit_chance};
