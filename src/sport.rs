// sport.rs — sport selection and per-sport animation constants.

use std::fmt;

use serde::Serialize;

/// Which kinematic profile and environment props apply. Selected once from
/// the collaborator's free-text sport value at scene setup, never re-matched
/// per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sport {
    Basketball,
    Soccer,
    Baseball,
    /// Fallback for any unrecognized sport label.
    Generic,
}

impl Sport {
    /// Case-insensitive substring match; unrecognized values fall back to
    /// [`Sport::Generic`], never an error. "football" is treated as soccer,
    /// as the source feed uses both words for the same sport.
    pub fn from_label(label: &str) -> Self {
        let lower = label.to_lowercase();
        if lower.contains("basketball") {
            Sport::Basketball
        } else if lower.contains("soccer") || lower.contains("football") {
            Sport::Soccer
        } else if lower.contains("baseball") {
            Sport::Baseball
        } else {
            Sport::Generic
        }
    }

    /// Frames per animation cycle at the 30 fps tick rate.
    pub fn cycle_len(self) -> u64 {
        match self {
            Sport::Generic => 60,
            _ => 90,
        }
    }
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Sport::Basketball => "Basketball",
            Sport::Soccer => "Soccer",
            Sport::Baseball => "Baseball",
            Sport::Generic => "General athletics",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(Sport::from_label("Basketball"), Sport::Basketball);
        assert_eq!(Sport::from_label("BASEBALL"), Sport::Baseball);
        assert_eq!(Sport::from_label("soccer"), Sport::Soccer);
    }

    #[test]
    fn substring_matches() {
        assert_eq!(Sport::from_label("U19 Soccer (girls)"), Sport::Soccer);
        assert_eq!(Sport::from_label("football"), Sport::Soccer);
    }

    #[test]
    fn unrecognized_falls_back_to_generic() {
        assert_eq!(Sport::from_label("hockey"), Sport::Generic);
        assert_eq!(Sport::from_label(""), Sport::Generic);
    }

    #[test]
    fn cycle_lengths() {
        assert_eq!(Sport::Basketball.cycle_len(), 90);
        assert_eq!(Sport::Soccer.cycle_len(), 90);
        assert_eq!(Sport::Baseball.cycle_len(), 90);
        assert_eq!(Sport::Generic.cycle_len(), 60);
    }
}
