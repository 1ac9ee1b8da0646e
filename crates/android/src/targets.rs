//! Build target selection
//!
//! Resolves the `--main-only` / `--test-only` flags into the set of APKs
//! to compile.

/// Which APKs to compile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildTargets {
    /// Compile the main APK
    pub main: bool,
    /// Compile the instrumentation test APK(s)
    pub test: bool,
}

impl BuildTargets {
    /// Resolve targets from the `--main-only` / `--test-only` flags
    ///
    /// Each flag excludes the other target rather than selecting its own,
    /// so passing both deselects everything. The original scripts behave
    /// the same way; callers report the empty selection instead of
    /// treating it as a usage error.
    pub fn from_flags(main_only: bool, test_only: bool) -> Self {
        Self {
            main: !test_only,
            test: !main_only,
        }
    }

    /// True when no target is selected
    pub fn is_empty(&self) -> bool {
        !self.main && !self.test
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags_selects_both() {
        let targets = BuildTargets::from_flags(false, false);
        assert!(targets.main);
        assert!(targets.test);
    }

    #[test]
    fn test_main_only() {
        let targets = BuildTargets::from_flags(true, false);
        assert!(targets.main);
        assert!(!targets.test);
    }

    #[test]
    fn test_test_only() {
        let targets = BuildTargets::from_flags(false, true);
        assert!(!targets.main);
        assert!(targets.test);
    }

    #[test]
    fn test_both_flags_select_nothing() {
        let targets = BuildTargets::from_flags(true, true);
        assert!(targets.is_empty());
    }
}
