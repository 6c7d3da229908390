pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Gate consulted by every animated effect at start-up.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Motion {
    Full,
    Reduced,
}

impl Motion {
    pub fn resolve(system_prefers_reduced: bool, override_flag: bool) -> Self {
        if system_prefers_reduced || override_flag {
            Self::Reduced
        } else {
            Self::Full
        }
    }

    pub fn is_off(self) -> bool {
        matches!(self, Self::Reduced)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Reduced => "reduced",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gate_is_the_or_of_both_signals() {
        assert_eq!(Motion::resolve(false, false), Motion::Full);
        assert_eq!(Motion::resolve(true, false), Motion::Reduced);
        assert_eq!(Motion::resolve(false, true), Motion::Reduced);
        assert_eq!(Motion::resolve(true, true), Motion::Reduced);
    }

    #[test]
    fn only_reduced_turns_motion_off() {
        assert!(!Motion::Full.is_off());
        assert!(Motion::Reduced.is_off());
    }
}
