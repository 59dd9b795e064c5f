use std::fmt;

/// Reasons a [`Config`](crate::config::Config) is refused at start-up.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    NotPositive { field: &'static str, value: f32 },
    Zero { field: &'static str },
    SpawnRateFloorAboveBase { floor: u32, base: u32 },
    ProbabilityOutOfRange { field: &'static str, value: f64 },
    LivesOutOfRange { starting: u32, max: u32 },
    InvertedRange { field: &'static str, min: f32, max: f32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotPositive { field, value } => {
                write!(f, "{field} must be a positive number, got {value}")
            }
            Self::Zero { field } => write!(f, "{field} must be greater than zero"),
            Self::SpawnRateFloorAboveBase { floor, base } => write!(
                f,
                "min_spawn_rate ({floor}) must not exceed base_spawn_rate ({base})"
            ),
            Self::ProbabilityOutOfRange { field, value } => {
                write!(f, "{field} must lie in [0, 1], got {value}")
            }
            Self::LivesOutOfRange { starting, max } => write!(
                f,
                "starting_lives must be in 1..={max}, got {starting}"
            ),
            Self::InvertedRange { field, min, max } => {
                write!(f, "{field} is inverted: min {min} > max {max}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
