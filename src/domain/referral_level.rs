use serde::{Deserialize, Serialize};

/// Depth of a user in a referral tree. Level 1 is the tree root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReferralLevel(u8);

impl ReferralLevel {
    pub const ROOT: Self = Self(1);

    /// Clamps `val` into `1..=max_depth`.
    pub const fn new(val: u8, max_depth: u8) -> Self {
        let max = if max_depth == 0 { 1 } else { max_depth };
        let v = if val < 1 {
            1
        } else if val > max {
            max
        } else {
            val
        };
        Self(v)
    }

    /// Level of a direct child, clamped at `max_depth`.
    pub const fn child(self, max_depth: u8) -> Self {
        Self::new(self.0.saturating_add(1), max_depth)
    }

    #[inline]
    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for ReferralLevel {
    fn default() -> Self {
        Self::ROOT
    }
}

impl std::fmt::Display for ReferralLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "L{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn child_level_clamps_at_depth_cap() {
        let l4 = ReferralLevel::new(4, 5);
        assert_eq!(l4.child(5).value(), 5);
        assert_eq!(l4.child(5).child(5).value(), 5);
        assert_eq!(ReferralLevel::ROOT.child(5).value(), 2);
    }

    #[test]
    fn new_clamps_both_ends() {
        assert_eq!(ReferralLevel::new(0, 5), ReferralLevel::ROOT);
        assert_eq!(ReferralLevel::new(9, 5).value(), 5);
    }
}
