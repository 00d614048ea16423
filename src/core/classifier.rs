use crate::config::Thresholds;
use crate::core::{Assessment, Label, Package, ThresholdProvider};
use crate::utils::error::Result;
use crate::utils::validation::validate_positive_measure;

/// Builds a [`Package`] after checking that every measurement is positive.
///
/// Fails with [`crate::SortError::ValidationError`] naming the first
/// offending field, in the order width, height, length, mass.
pub fn create(width: i64, height: i64, length: i64, mass: i64) -> Result<Package> {
    let width = validate_positive_measure("width", width)?;
    let height = validate_positive_measure("height", height)?;
    let length = validate_positive_measure("length", length)?;
    let mass = validate_positive_measure("mass", mass)?;
    Ok(Package::from_validated(width, height, length, mass))
}

/// Bulky under the default thresholds.
pub fn is_bulky(package: &Package) -> bool {
    Classifier::<Thresholds>::default().is_bulky(package)
}

/// Heavy under the default thresholds.
pub fn is_heavy(package: &Package) -> bool {
    Classifier::<Thresholds>::default().is_heavy(package)
}

/// Sorts a package using the default thresholds. Invalid input is `REJECTED`.
pub fn classify(width: i64, height: i64, length: i64, mass: i64) -> Label {
    Classifier::<Thresholds>::default().classify(width, height, length, mass)
}

#[derive(Debug, Clone, Default)]
pub struct Classifier<T: ThresholdProvider = Thresholds> {
    thresholds: T,
}

impl<T: ThresholdProvider> Classifier<T> {
    pub fn new(thresholds: T) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &T {
        &self.thresholds
    }

    pub fn is_bulky(&self, package: &Package) -> bool {
        let length_threshold = self.thresholds.length_threshold();
        package.volume() >= u128::from(self.thresholds.volume_threshold())
            || package.dimensions().iter().any(|&d| d >= length_threshold)
    }

    pub fn is_heavy(&self, package: &Package) -> bool {
        package.mass() >= self.thresholds.weight_threshold()
    }

    pub fn classify(&self, width: i64, height: i64, length: i64, mass: i64) -> Label {
        self.assess(width, height, length, mass).label
    }

    /// Like [`Classifier::classify`] but keeps the intermediate results.
    pub fn assess(&self, width: i64, height: i64, length: i64, mass: i64) -> Assessment {
        let package = match create(width, height, length, mass) {
            Ok(package) => package,
            Err(e) => {
                tracing::debug!("Rejecting invalid package: {}", e);
                return Assessment {
                    package: None,
                    bulky: false,
                    heavy: false,
                    label: Label::Rejected,
                    reason: Some(e.to_string()),
                };
            }
        };

        let bulky = self.is_bulky(&package);
        let heavy = self.is_heavy(&package);
        let label = match (bulky, heavy) {
            (true, true) => Label::Rejected,
            (true, false) | (false, true) => Label::Special,
            (false, false) => Label::Standard,
        };

        tracing::debug!(
            width = package.width(),
            height = package.height(),
            length = package.length(),
            mass = package.mass(),
            bulky,
            heavy,
            label = label.as_str(),
            "Classified package"
        );

        Assessment {
            package: Some(package),
            bulky,
            heavy,
            label,
            reason: None,
        }
    }
}
