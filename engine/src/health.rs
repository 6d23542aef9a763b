// Health & exercise formulas: BMI, MET-based calorie burn, Brzycki one-rep
// max, and the U.S. Navy circumference body-fat method.

use crate::error::EngineError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitSystem {
    /// Weight in kg, height in cm.
    Metric,
    /// Weight in lbs, height in inches.
    Imperial,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn classify(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::Normal
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obesity",
        }
    }
}

pub fn bmi(weight: f64, height: f64, system: UnitSystem) -> Result<f64, EngineError> {
    if weight <= 0.0 {
        return Err(EngineError::invalid_input("weight", weight.to_string()));
    }
    if height <= 0.0 {
        return Err(EngineError::invalid_input("height", height.to_string()));
    }
    let value = match system {
        UnitSystem::Metric => {
            let height_m = height / 100.0;
            weight / (height_m * height_m)
        }
        UnitSystem::Imperial => weight / (height * height) * 703.0,
    };
    Ok(value)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activity {
    Walking,
    Running,
    Cycling,
    Swimming,
    WeightLifting,
}

impl Activity {
    pub const ALL: [Activity; 5] = [
        Activity::Walking,
        Activity::Running,
        Activity::Cycling,
        Activity::Swimming,
        Activity::WeightLifting,
    ];

    pub fn met(&self) -> f64 {
        match self {
            Activity::Walking => 3.8,
            Activity::Running => 9.8,
            Activity::Cycling => 7.5,
            Activity::Swimming => 5.8,
            Activity::WeightLifting => 6.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Activity::Walking => "Walking",
            Activity::Running => "Running",
            Activity::Cycling => "Cycling",
            Activity::Swimming => "Swimming",
            Activity::WeightLifting => "Weight Lifting",
        }
    }
}

/// Calories burned = MET × weight (kg) × duration (hours).
pub fn calories_burned(weight_kg: f64, minutes: f64, activity: Activity) -> f64 {
    activity.met() * weight_kg * (minutes / 60.0)
}

/// Brzycki formula: 1RM = w × 36 / (37 − reps). Undefined at 37+ reps.
pub fn one_rep_max(weight: f64, reps: f64) -> Result<f64, EngineError> {
    if reps < 1.0 || reps >= 37.0 {
        return Err(EngineError::invalid_input("repetitions", reps.to_string()));
    }
    Ok(weight * 36.0 / (37.0 - reps))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

/// U.S. Navy body-fat estimate from circumference measurements (cm). The
/// log10 arguments must be positive, which rules out waist <= neck for men
/// and waist + hip <= neck for women.
pub fn body_fat(
    gender: Gender,
    height_cm: f64,
    waist_cm: f64,
    neck_cm: f64,
    hip_cm: f64,
) -> Result<f64, EngineError> {
    if height_cm <= 0.0 {
        return Err(EngineError::invalid_input("height", height_cm.to_string()));
    }
    let value = match gender {
        Gender::Male => {
            let girth = waist_cm - neck_cm;
            if girth <= 0.0 {
                return Err(EngineError::math_domain("log", girth));
            }
            495.0 / (1.0324 - 0.19077 * girth.log10() + 0.15456 * height_cm.log10()) - 450.0
        }
        Gender::Female => {
            let girth = waist_cm + hip_cm - neck_cm;
            if girth <= 0.0 {
                return Err(EngineError::math_domain("log", girth));
            }
            495.0 / (1.29579 - 0.35004 * girth.log10() + 0.221 * height_cm.log10()) - 450.0
        }
    };
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmi_metric() {
        // 70 kg at 175 cm -> 22.86
        let value = bmi(70.0, 175.0, UnitSystem::Metric).unwrap();
        assert!((value - 22.857).abs() < 1e-2);
    }

    #[test]
    fn test_bmi_imperial() {
        // 154 lbs at 69 in -> 22.74
        let value = bmi(154.0, 69.0, UnitSystem::Imperial).unwrap();
        assert!((value - 22.74).abs() < 1e-2);
    }

    #[test]
    fn test_bmi_rejects_nonpositive() {
        assert!(bmi(0.0, 175.0, UnitSystem::Metric).is_err());
        assert!(bmi(70.0, 0.0, UnitSystem::Metric).is_err());
    }

    #[test]
    fn test_bmi_categories() {
        assert_eq!(BmiCategory::classify(17.0), BmiCategory::Underweight);
        assert_eq!(BmiCategory::classify(18.5), BmiCategory::Normal);
        assert_eq!(BmiCategory::classify(24.9), BmiCategory::Normal);
        assert_eq!(BmiCategory::classify(27.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::classify(30.0), BmiCategory::Obese);
    }

    #[test]
    fn test_calories_burned() {
        // Running, 70 kg, 30 min: 9.8 * 70 * 0.5 = 343
        let kcal = calories_burned(70.0, 30.0, Activity::Running);
        assert!((kcal - 343.0).abs() < 1e-9);
    }

    #[test]
    fn test_one_rep_max() {
        // 100 kg x 10 reps: 100 * 36 / 27 = 133.33
        let max = one_rep_max(100.0, 10.0).unwrap();
        assert!((max - 133.333).abs() < 1e-2);
        assert_eq!(one_rep_max(100.0, 1.0).unwrap(), 100.0);
    }

    #[test]
    fn test_one_rep_max_rejects_out_of_range_reps() {
        assert!(one_rep_max(100.0, 37.0).is_err());
        assert!(one_rep_max(100.0, 0.0).is_err());
    }

    #[test]
    fn test_body_fat_male_reasonable_range() {
        let pct = body_fat(Gender::Male, 175.0, 80.0, 36.0, 0.0).unwrap();
        assert!(pct > 5.0 && pct < 30.0, "unexpected body fat {}", pct);
    }

    #[test]
    fn test_body_fat_female_uses_hip() {
        let pct = body_fat(Gender::Female, 165.0, 70.0, 33.0, 95.0).unwrap();
        assert!(pct > 10.0 && pct < 45.0, "unexpected body fat {}", pct);
    }

    #[test]
    fn test_body_fat_domain_guard() {
        // Waist smaller than neck makes the male log argument non-positive.
        assert!(body_fat(Gender::Male, 175.0, 30.0, 36.0, 0.0).is_err());
    }
}
