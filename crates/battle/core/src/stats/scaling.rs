//! Growth curve evaluation.
//!
//! The rounding modes differ per stat and are load-bearing: HP rounds
//! down and attack rounds up, which keeps HP growth conservative and
//! damage growth generous across the level curve. Speed and defense
//! round to nearest. Do not unify them.

/// Maximum HP at `level`.
///
/// # Formula
///
/// ```text
/// max_hp = floor(base_hp × ln(level + 1) × hp_growth)
/// clamped ≥ 1
/// ```
pub fn max_hp(level: u32, base_hp: f64, hp_growth: f64) -> u32 {
    let curve = f64::from(level + 1).ln();
    (base_hp * curve * hp_growth).floor().max(1.0) as u32
}

/// Attack power at `level`.
///
/// # Formula
///
/// ```text
/// attack = ceil(base_attack × ln(level + 1) × attack_growth)
/// clamped ≥ 1
/// ```
pub fn attack(level: u32, base_attack: f64, attack_growth: f64) -> u32 {
    let curve = f64::from(level + 1).ln();
    (base_attack * curve * attack_growth).ceil().max(1.0) as u32
}

/// Speed at `level`.
///
/// # Formula
///
/// ```text
/// speed = round(base_speed + speed_growth_per_level × (level − 1))
/// clamped ≥ 1
/// ```
pub fn speed(level: u32, base_speed: f64, speed_growth_per_level: f64) -> u32 {
    let raw = base_speed + speed_growth_per_level * f64::from(level.max(1) - 1);
    raw.round().max(1.0) as u32
}

/// Defense at `level`.
///
/// # Formula
///
/// ```text
/// defense = round(base_defense + defense_growth_per_level × (level − 1))
/// clamped ≥ 0
/// ```
///
/// Zero base and growth reproduce the defense-less stat variant.
pub fn defense(level: u32, base_defense: f64, defense_growth_per_level: f64) -> u32 {
    let raw = base_defense + defense_growth_per_level * f64::from(level.max(1) - 1);
    raw.round().max(0.0) as u32
}
