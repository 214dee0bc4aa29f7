// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Per-frequency-band acoustic coefficients of a wall

use crate::error::{Error, Result};

/// Absorption and scattering per frequency band, with the derived
/// transmission and energy reflection.
///
/// - `energy_reflection[i] = 1 - absorption[i]`
/// - `transmission[i] = sqrt(1 - absorption[i])`
#[derive(Debug, Clone, PartialEq)]
pub struct BandCoefficients {
    absorption: Vec<f64>,
    scatter: Vec<f64>,
    transmission: Vec<f64>,
    energy_reflection: Vec<f64>,
}

impl BandCoefficients {
    /// Validate the coefficients and derive the reflection terms.
    ///
    /// Both lists must have the same length and every value must lie in
    /// `[0, 1]`.
    pub fn new(absorption: Vec<f64>, scatter: Vec<f64>) -> Result<Self> {
        if absorption.len() != scatter.len() {
            return Err(Error::BandCountMismatch {
                absorption: absorption.len(),
                scatter: scatter.len(),
            });
        }

        check_unit_range("absorption", &absorption)?;
        check_unit_range("scattering", &scatter)?;

        let energy_reflection: Vec<f64> = absorption.iter().map(|a| 1.0 - a).collect();
        let transmission = energy_reflection.iter().map(|r| r.sqrt()).collect();

        Ok(Self {
            absorption,
            scatter,
            transmission,
            energy_reflection,
        })
    }

    /// Same coefficients in every band
    pub fn uniform(absorption: f64, scatter: f64, n_bands: usize) -> Result<Self> {
        Self::new(vec![absorption; n_bands], vec![scatter; n_bands])
    }

    pub fn n_bands(&self) -> usize {
        self.transmission.len()
    }

    pub fn absorption(&self) -> &[f64] {
        &self.absorption
    }

    pub fn scatter(&self) -> &[f64] {
        &self.scatter
    }

    pub fn transmission(&self) -> &[f64] {
        &self.transmission
    }

    pub fn energy_reflection(&self) -> &[f64] {
        &self.energy_reflection
    }
}

fn check_unit_range(kind: &'static str, values: &[f64]) -> Result<()> {
    match values
        .iter()
        .enumerate()
        .find(|(_, v)| !(0.0..=1.0).contains(*v))
    {
        Some((band, &value)) => Err(Error::InvalidCoefficient { kind, band, value }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_derived_coefficients() {
        let bands = BandCoefficients::new(vec![0.0, 0.19, 0.75, 1.0], vec![0.1; 4]).unwrap();
        assert_eq!(bands.n_bands(), 4);
        assert_relative_eq!(bands.energy_reflection()[1], 0.81, epsilon = 1e-12);
        assert_relative_eq!(bands.transmission()[1], 0.9, epsilon = 1e-12);
        assert_relative_eq!(bands.transmission()[2], 0.5, epsilon = 1e-12);
        assert_eq!(bands.transmission()[3], 0.0);
        for (t, r) in bands.transmission().iter().zip(bands.energy_reflection()) {
            assert_relative_eq!(t * t, *r, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_band_count_mismatch() {
        let result = BandCoefficients::new(vec![0.1, 0.2, 0.3], vec![0.1, 0.2]);
        assert_eq!(
            result,
            Err(Error::BandCountMismatch {
                absorption: 3,
                scatter: 2
            })
        );
    }

    #[test]
    fn test_out_of_range_coefficients() {
        let result = BandCoefficients::new(vec![0.1, 1.5], vec![0.0, 0.0]);
        assert!(matches!(
            result,
            Err(Error::InvalidCoefficient {
                kind: "absorption",
                band: 1,
                ..
            })
        ));
        let result = BandCoefficients::new(vec![0.1], vec![f64::NAN]);
        assert!(matches!(
            result,
            Err(Error::InvalidCoefficient {
                kind: "scattering",
                band: 0,
                ..
            })
        ));
    }

    #[test]
    fn test_uniform() {
        let bands = BandCoefficients::uniform(0.2, 0.1, 6).unwrap();
        assert_eq!(bands.n_bands(), 6);
        assert!(bands.absorption().iter().all(|&a| a == 0.2));
        assert!(bands.scatter().iter().all(|&s| s == 0.1));
    }

    #[test]
    fn test_no_bands() {
        let bands = BandCoefficients::new(Vec::new(), Vec::new()).unwrap();
        assert_eq!(bands.n_bands(), 0);
    }
}
