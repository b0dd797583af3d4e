use serde::{Deserialize, Serialize};

/// A tracked nutrient, expressed per 100 units of a food.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Nutrient {
    Energy,
    Protein,
    Fat,
    Carbohydrate,
    Sugar,
    Sodium,
}

impl Nutrient {
    /// The macro set shown on every day summary.
    pub const CORE: [Nutrient; 4] = [
        Nutrient::Energy,
        Nutrient::Protein,
        Nutrient::Fat,
        Nutrient::Carbohydrate,
    ];

    pub const ALL: [Nutrient; 6] = [
        Nutrient::Energy,
        Nutrient::Protein,
        Nutrient::Fat,
        Nutrient::Carbohydrate,
        Nutrient::Sugar,
        Nutrient::Sodium,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Nutrient::Energy => "Energy",
            Nutrient::Protein => "Protein",
            Nutrient::Fat => "Fat",
            Nutrient::Carbohydrate => "Carbohydrate",
            Nutrient::Sugar => "Sugar",
            Nutrient::Sodium => "Sodium",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Nutrient::Energy => "kcal",
            Nutrient::Sodium => "mg",
            _ => "g",
        }
    }

    /// Key used by the backend for the per-100 reference value.
    pub fn field_name(self) -> &'static str {
        match self {
            Nutrient::Energy => "energyPer100",
            Nutrient::Protein => "proteinPer100",
            Nutrient::Fat => "fatPer100",
            Nutrient::Carbohydrate => "carbohydratePer100",
            Nutrient::Sugar => "sugarPer100",
            Nutrient::Sodium => "sodiumPer100",
        }
    }
}

impl std::fmt::Display for Nutrient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-100-unit reference values for a food. Any field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutrientProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub energy_per100: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protein_per100: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fat_per100: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carbohydrate_per100: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sugar_per100: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sodium_per100: Option<f64>,
}

impl NutrientProfile {
    /// Reference value for one nutrient.
    #[inline]
    pub fn per_hundred(&self, nutrient: Nutrient) -> Option<f64> {
        match nutrient {
            Nutrient::Energy => self.energy_per100,
            Nutrient::Protein => self.protein_per100,
            Nutrient::Fat => self.fat_per100,
            Nutrient::Carbohydrate => self.carbohydrate_per100,
            Nutrient::Sugar => self.sugar_per100,
            Nutrient::Sodium => self.sodium_per100,
        }
    }

    /// Builder-style setter, mostly for fixtures and catalogue entries.
    pub fn with(mut self, nutrient: Nutrient, value: f64) -> Self {
        let slot = match nutrient {
            Nutrient::Energy => &mut self.energy_per100,
            Nutrient::Protein => &mut self.protein_per100,
            Nutrient::Fat => &mut self.fat_per100,
            Nutrient::Carbohydrate => &mut self.carbohydrate_per100,
            Nutrient::Sugar => &mut self.sugar_per100,
            Nutrient::Sodium => &mut self.sodium_per100,
        };
        *slot = Some(value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_lookup_matches_field() {
        let profile = NutrientProfile::default()
            .with(Nutrient::Energy, 250.0)
            .with(Nutrient::Sodium, 400.0);

        assert_eq!(profile.per_hundred(Nutrient::Energy), Some(250.0));
        assert_eq!(profile.per_hundred(Nutrient::Sodium), Some(400.0));
        assert_eq!(profile.per_hundred(Nutrient::Protein), None);
    }

    #[test]
    fn test_profile_wire_names() {
        let profile = NutrientProfile::default().with(Nutrient::Carbohydrate, 12.5);
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["carbohydratePer100"], 12.5);
        assert!(json.get("energyPer100").is_none());

        for nutrient in Nutrient::ALL {
            let profile = NutrientProfile::default().with(nutrient, 1.0);
            let json = serde_json::to_value(&profile).unwrap();
            assert_eq!(json[nutrient.field_name()], 1.0);
        }
    }

    #[test]
    fn test_units() {
        assert_eq!(Nutrient::Energy.unit(), "kcal");
        assert_eq!(Nutrient::Sodium.unit(), "mg");
        assert_eq!(Nutrient::Fat.unit(), "g");
    }
}
