use thiserror::Error;
use uom::si::{
    electrical_conductance::siemens,
    electrical_resistance::ohm,
    f64::{ElectricalConductance, ElectricalResistance},
};

/// Reasons a resistor list cannot be wired up in parallel.
#[derive(Error, Clone, Copy, Debug, PartialEq)]
pub enum ResistorError {
    #[error("resistor list is empty, at least one resistor is required")]
    Empty,

    /// `value` is in ohms.
    #[error("resistor {index} has non-finite resistance {value} Ω")]
    NotFinite { index: usize, value: f64 },

    /// `value` is in ohms.
    #[error("resistor {index} has non-positive resistance {value} Ω")]
    NonPositive { index: usize, value: f64 },

    /// `value` is in ohms.
    #[error("resistor {index} with resistance {value} Ω overflows the total conductance")]
    ConductanceOverflow { index: usize, value: f64 },
}

/// Check that the list is non-empty, that every resistance is finite and strictly positive
/// and that the running sum of conductances stays finite.
/// Reports the first offending resistor.
pub fn validate(resistors: &[ElectricalResistance]) -> Result<(), ResistorError> {
    if resistors.is_empty() {
        return Err(ResistorError::Empty);
    }

    let mut inverse_sum = ElectricalConductance::new::<siemens>(0.0);
    for (index, resistor) in resistors.iter().enumerate() {
        let value = resistor.get::<ohm>();
        if !value.is_finite() {
            return Err(ResistorError::NotFinite { index, value });
        }
        if value <= 0.0 {
            return Err(ResistorError::NonPositive { index, value });
        }

        // Tiny (subnormal) resistances have no finite reciprocal
        inverse_sum += resistor.recip();
        if !inverse_sum.is_finite() {
            return Err(ResistorError::ConductanceOverflow { index, value });
        }
    }

    Ok(())
}

/// Equivalent resistance of each prefix of `resistors` connected in parallel.
///
/// The i-th output is `1 / (1/r_0 + ... + 1/r_i)`, accumulated left to right.
/// The whole input is validated before anything is computed.
pub fn running_parallel_resistance(
    resistors: &[ElectricalResistance],
) -> Result<Vec<ElectricalResistance>, ResistorError> {
    validate(resistors)?;

    let mut inverse_sum = ElectricalConductance::new::<siemens>(0.0);
    let mut equivalents = Vec::with_capacity(resistors.len());

    for (index, resistor) in resistors.iter().enumerate() {
        inverse_sum += resistor.recip();
        let equivalent: ElectricalResistance = inverse_sum.recip();
        tracing::debug!(
            index,
            resistor = resistor.get::<ohm>(),
            equivalent = equivalent.get::<ohm>(),
            "added resistor in parallel"
        );
        equivalents.push(equivalent);
    }

    Ok(equivalents)
}
