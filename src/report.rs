use std::fmt;

use itertools::Itertools;
use uom::si::{electrical_resistance::ohm, f64::ElectricalResistance};

/// Formats a sequence of resistances as `[a, b, ...]`, in ohms,
/// with the shortest representation that round-trips each value.
#[derive(Copy, Clone, Debug)]
pub struct ResistanceListDisplayer<'a> {
    resistances: &'a [ElectricalResistance],
}

impl<'a> fmt::Display for ResistanceListDisplayer<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}]",
            self.resistances
                .iter()
                .map(|r| format!("{:?}", r.get::<ohm>()))
                .join(", ")
        )
    }
}

pub fn display(resistances: &[ElectricalResistance]) -> ResistanceListDisplayer<'_> {
    ResistanceListDisplayer { resistances }
}
