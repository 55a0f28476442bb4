use anyhow::Context;
use uom::si::f64::ElectricalResistance;

use crate::parallel::{self, ResistorError};

#[cfg(test)]
use proptest::{
    arbitrary::Arbitrary,
    prelude::prop,
    strategy::{BoxedStrategy, Strategy},
};
#[cfg(test)]
use uom::si::electrical_resistance::ohm;

/// Resistor values compiled into the binary.
const BUILTIN_RESISTORS: &str = include_str!("../resistors.json5");

/// Ordered list of resistors, in the order they get connected in parallel.
#[derive(Clone, Debug, PartialEq)]
pub struct ResistorSet {
    pub resistors: Vec<ElectricalResistance>,
}

impl ResistorSet {
    /// The resistor list built into the program.
    pub fn builtin() -> anyhow::Result<Self> {
        Self::from_json(BUILTIN_RESISTORS).context("Built-in resistor list is invalid")
    }

    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let loaded: as_loaded::ResistorSet = json5::from_str(json)?;
        let converted: ResistorSet = loaded.try_into()?;
        tracing::debug!(?converted, "loaded resistor set");
        Ok(converted)
    }

    pub fn running_parallel_resistance(&self) -> Result<Vec<ElectricalResistance>, ResistorError> {
        parallel::running_parallel_resistance(&self.resistors)
    }
}

impl TryFrom<as_loaded::ResistorSet> for ResistorSet {
    type Error = anyhow::Error;
    fn try_from(value: as_loaded::ResistorSet) -> Result<Self, Self::Error> {
        parallel::validate(&value.resistors)?;
        Ok(ResistorSet {
            resistors: value.resistors,
        })
    }
}

#[cfg(test)]
impl Arbitrary for ResistorSet {
    type Parameters = ();
    type Strategy = BoxedStrategy<ResistorSet>;

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        prop::collection::vec(1e-3f64..1e6f64, 1..50)
            .prop_map(|values| ResistorSet {
                resistors: values
                    .into_iter()
                    .map(ElectricalResistance::new::<ohm>)
                    .collect(),
            })
            .boxed()
    }
}

mod as_loaded {
    use serde::Deserialize;
    use uom::si::f64::ElectricalResistance;

    /// Resistances are given in ohms.
    #[derive(Clone, Debug, Deserialize, PartialEq)]
    #[serde(deny_unknown_fields)]
    pub struct ResistorSet {
        pub resistors: Vec<ElectricalResistance>,
    }
}
