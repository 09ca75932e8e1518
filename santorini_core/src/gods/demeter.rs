use crate::gods::{GodName, GodPower, god_power};

/// Demeter may follow its build with a second one on a different square.
pub const fn build_demeter() -> GodPower {
    god_power(GodName::Demeter).with_max_builds(2)
}
