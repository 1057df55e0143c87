//! Canned lookup for demonstrations without registry credentials.

use super::{LookupMode, VehicleLookup};
use crate::record::{Scalar, VehicleRecord};
use crate::Result;

/// Always answers with the same Porsche Boxster, whatever the plate.
#[derive(Debug, Default, Clone)]
pub struct FixtureLookup;

impl FixtureLookup {
    pub fn new() -> Self {
        FixtureLookup
    }

    pub fn record() -> VehicleRecord {
        VehicleRecord {
            make: Some(Scalar::from("PORSCHE")),
            model: Some(Scalar::from("BOXSTER 2.7")),
            registration_date: Some(Scalar::from("2007-05-09")),
            fuel: Some(Scalar::from("ESSENCE")),
            horsepower: Some(Scalar::Integer(245)),
            color: Some(Scalar::from("BLEU")),
            body_style: Some(Scalar::from("CABRIOLET")),
            ..Default::default()
        }
    }
}

impl VehicleLookup for FixtureLookup {
    fn lookup(&self, _plate: &str) -> Result<Option<VehicleRecord>> {
        Ok(Some(Self::record()))
    }

    fn mode(&self) -> LookupMode {
        LookupMode::Fixture
    }
}
