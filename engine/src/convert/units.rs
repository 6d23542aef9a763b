// Unit conversion tables. Linear categories convert through a base unit
// (meter, gram, milliliter); temperature is the one affine special case.

use crate::error::EngineError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Length,
    Weight,
    Temperature,
    Volume,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Length,
        Category::Weight,
        Category::Temperature,
        Category::Volume,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Category::Length => "Length",
            Category::Weight => "Weight",
            Category::Temperature => "Temperature",
            Category::Volume => "Volume",
        }
    }

    pub fn units(&self) -> &'static [Unit] {
        match self {
            Category::Length => LENGTH_UNITS,
            Category::Weight => WEIGHT_UNITS,
            Category::Temperature => TEMPERATURE_UNITS,
            Category::Volume => VOLUME_UNITS,
        }
    }

    pub fn unit(&self, id: &str) -> Result<&'static Unit, EngineError> {
        self.units()
            .iter()
            .find(|u| u.id == id)
            .ok_or_else(|| EngineError::UnknownUnit(id.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Unit {
    pub id: &'static str,
    pub name: &'static str,
    /// Multiplier to the category's base unit. Unused for temperature.
    pub factor: f64,
}

const LENGTH_UNITS: &[Unit] = &[
    Unit { id: "mm", name: "Millimeter (mm)", factor: 0.001 },
    Unit { id: "cm", name: "Centimeter (cm)", factor: 0.01 },
    Unit { id: "m", name: "Meter (m)", factor: 1.0 },
    Unit { id: "km", name: "Kilometer (km)", factor: 1000.0 },
    Unit { id: "in", name: "Inch (in)", factor: 0.0254 },
    Unit { id: "ft", name: "Foot (ft)", factor: 0.3048 },
    Unit { id: "yd", name: "Yard (yd)", factor: 0.9144 },
    Unit { id: "mi", name: "Mile (mi)", factor: 1609.344 },
];

const WEIGHT_UNITS: &[Unit] = &[
    Unit { id: "mg", name: "Milligram (mg)", factor: 0.001 },
    Unit { id: "g", name: "Gram (g)", factor: 1.0 },
    Unit { id: "kg", name: "Kilogram (kg)", factor: 1000.0 },
    Unit { id: "oz", name: "Ounce (oz)", factor: 28.3495 },
    Unit { id: "lb", name: "Pound (lb)", factor: 453.592 },
    Unit { id: "st", name: "Stone (st)", factor: 6350.29 },
    Unit { id: "ton", name: "Metric Ton (t)", factor: 1_000_000.0 },
];

const TEMPERATURE_UNITS: &[Unit] = &[
    Unit { id: "c", name: "Celsius (°C)", factor: 1.0 },
    Unit { id: "f", name: "Fahrenheit (°F)", factor: 1.0 },
    Unit { id: "k", name: "Kelvin (K)", factor: 1.0 },
];

const VOLUME_UNITS: &[Unit] = &[
    Unit { id: "ml", name: "Milliliter (ml)", factor: 1.0 },
    Unit { id: "l", name: "Liter (l)", factor: 1000.0 },
    Unit { id: "floz", name: "Fluid Ounce (fl oz)", factor: 29.5735 },
    Unit { id: "cup", name: "Cup", factor: 236.588 },
    Unit { id: "pt", name: "Pint (pt)", factor: 473.176 },
    Unit { id: "qt", name: "Quart (qt)", factor: 946.353 },
    Unit { id: "gal", name: "Gallon (gal)", factor: 3785.41 },
];

pub fn convert(category: Category, from: &str, to: &str, value: f64) -> Result<f64, EngineError> {
    let from = category.unit(from)?;
    let to = category.unit(to)?;
    if category == Category::Temperature {
        return Ok(convert_temperature(from.id, to.id, value));
    }
    let base = value * from.factor;
    Ok(base / to.factor)
}

fn convert_temperature(from: &str, to: &str, value: f64) -> f64 {
    match (from, to) {
        ("c", "f") => value * 9.0 / 5.0 + 32.0,
        ("c", "k") => value + 273.15,
        ("f", "c") => (value - 32.0) * 5.0 / 9.0,
        ("f", "k") => (value - 32.0) * 5.0 / 9.0 + 273.15,
        ("k", "c") => value - 273.15,
        ("k", "f") => (value - 273.15) * 9.0 / 5.0 + 32.0,
        _ => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::utils::trim_fixed;

    #[test]
    fn test_celsius_fahrenheit_round_points() {
        let f = convert(Category::Temperature, "c", "f", 0.0).unwrap();
        assert_eq!(trim_fixed(f, 4), "32");
        let c = convert(Category::Temperature, "f", "c", 32.0).unwrap();
        assert_eq!(trim_fixed(c, 4), "0");
    }

    #[test]
    fn test_kelvin_paths() {
        assert!((convert(Category::Temperature, "c", "k", 0.0).unwrap() - 273.15).abs() < 1e-9);
        assert!((convert(Category::Temperature, "k", "f", 273.15).unwrap() - 32.0).abs() < 1e-9);
        assert!((convert(Category::Temperature, "f", "k", 212.0).unwrap() - 373.15).abs() < 1e-9);
    }

    #[test]
    fn test_same_temperature_unit_is_identity() {
        assert_eq!(convert(Category::Temperature, "c", "c", 21.5).unwrap(), 21.5);
    }

    #[test]
    fn test_length_through_base() {
        let ft = convert(Category::Length, "m", "ft", 1.0).unwrap();
        assert!((ft - 3.28084).abs() < 1e-4);
        let km = convert(Category::Length, "mi", "km", 1.0).unwrap();
        assert!((km - 1.609344).abs() < 1e-9);
    }

    #[test]
    fn test_weight_and_volume() {
        let lb = convert(Category::Weight, "kg", "lb", 1.0).unwrap();
        assert!((lb - 2.204624).abs() < 1e-5);
        let l = convert(Category::Volume, "gal", "l", 1.0).unwrap();
        assert!((l - 3.78541).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_unit_rejected() {
        assert_eq!(
            convert(Category::Length, "m", "furlong", 1.0),
            Err(EngineError::UnknownUnit("furlong".to_string()))
        );
    }
}
