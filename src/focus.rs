// focus.rs — maps correction text to the body regions worth highlighting.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

/// Closed set of body-region tags the renderer knows how to emphasize.
/// Declaration order fixes the iteration/caption order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FocusArea {
    Arm,
    Legs,
    Feet,
    FollowThrough,
    Posture,
    Hips,
}

impl FocusArea {
    pub const ALL: [FocusArea; 6] = [
        FocusArea::Arm,
        FocusArea::Legs,
        FocusArea::Feet,
        FocusArea::FollowThrough,
        FocusArea::Posture,
        FocusArea::Hips,
    ];

    /// Keyword group whose presence anywhere in the joined correction text
    /// pulls this tag in.
    fn keywords(self) -> &'static [&'static str] {
        match self {
            FocusArea::Arm => &["elbow", "arm", "release", "wrist", "shoulder"],
            FocusArea::Legs => &["knee", "leg", "stance", "squat", "bend"],
            FocusArea::Feet => &["foot", "balance", "plant", "step"],
            FocusArea::FollowThrough => &["follow through", "extension", "finish"],
            FocusArea::Posture => &["posture", "back", "core", "straight", "upright"],
            FocusArea::Hips => &["hip", "rotation", "twist", "turn"],
        }
    }
}

impl fmt::Display for FocusArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FocusArea::Arm => "arm",
            FocusArea::Legs => "legs",
            FocusArea::Feet => "feet",
            FocusArea::FollowThrough => "follow-through",
            FocusArea::Posture => "posture",
            FocusArea::Hips => "hips",
        };
        f.write_str(name)
    }
}

/// Membership-only set of focus tags, derived fresh from each correction list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FocusSet(BTreeSet<FocusArea>);

impl FocusSet {
    /// Join all corrections with spaces, lowercase, and test each tag's
    /// keyword group by substring. Idempotent, no ordering beyond the fixed
    /// enum order, no duplicates.
    pub fn classify(corrections: &[String]) -> Self {
        let joined = corrections.join(" ").to_lowercase();
        let mut set = BTreeSet::new();
        if joined.is_empty() {
            return Self(set);
        }
        for area in FocusArea::ALL {
            if area.keywords().iter().any(|kw| joined.contains(kw)) {
                set.insert(area);
            }
        }
        Self(set)
    }

    pub fn contains(&self, area: FocusArea) -> bool {
        self.0.contains(&area)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = FocusArea> + '_ {
        self.0.iter().copied()
    }

    /// Caption shown above the comparison, e.g. "Focus on: LEGS, POSTURE".
    /// `None` when the set is empty so the scene draws no caption at all.
    pub fn caption(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }
        let list = self
            .iter()
            .map(|a| a.to_string().to_uppercase())
            .collect::<Vec<_>>()
            .join(", ");
        Some(format!("Focus on: {list}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(lines: &[&str]) -> FocusSet {
        FocusSet::classify(&lines.iter().map(|s| s.to_string()).collect::<Vec<_>>())
    }

    #[test]
    fn empty_input_is_empty_set() {
        assert!(FocusSet::classify(&[]).is_empty());
        assert_eq!(classify(&[]).caption(), None);
    }

    #[test]
    fn single_keyword_hits_one_tag() {
        let set = classify(&["bend your knee more"]);
        assert!(set.contains(FocusArea::Legs));
        assert_eq!(set.iter().count(), 1);
    }

    #[test]
    fn tags_co_occur() {
        let set = classify(&["rotate your hips and follow through"]);
        assert!(set.contains(FocusArea::Hips));
        assert!(set.contains(FocusArea::FollowThrough));
    }

    #[test]
    fn membership_spans_multiple_corrections() {
        let set = classify(&["Plant your foot firmly.", "Keep your back straight."]);
        assert!(set.contains(FocusArea::Feet));
        assert!(set.contains(FocusArea::Posture));
        assert!(!set.contains(FocusArea::Arm));
    }

    #[test]
    fn classification_is_idempotent() {
        let lines = ["Watch the elbow on release.".to_string()];
        assert_eq!(FocusSet::classify(&lines), FocusSet::classify(&lines));
    }

    #[test]
    fn caption_uses_fixed_order() {
        let set = classify(&["straighten your back and bend the knee"]);
        assert_eq!(set.caption().as_deref(), Some("Focus on: LEGS, POSTURE"));
    }
}
