//! Verbosity levels and the bullet-count policy they imply.

/// How much body detail the generated message carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerbosityLevel {
    /// Subject only; breaking changes are still shown.
    Minimal,
    /// Short body: one to three bullets.
    Standard,
    /// Detailed body: three to five bullets.
    Detailed,
}

impl VerbosityLevel {
    /// Maps the `-v` flag count to a level (`0`, `1`, `2` and above).
    pub fn from_flag_count(count: u8) -> Self {
        match count {
            0 => Self::Minimal,
            1 => Self::Standard,
            _ => Self::Detailed,
        }
    }

    /// Returns the bullet policy for this level.
    pub fn policy(self) -> VerbosityPolicy {
        match self {
            Self::Minimal => VerbosityPolicy {
                min_bullets: 0,
                max_bullets: 0,
                force_empty: true,
            },
            Self::Standard => VerbosityPolicy {
                min_bullets: 1,
                max_bullets: 3,
                force_empty: false,
            },
            Self::Detailed => VerbosityPolicy {
                min_bullets: 3,
                max_bullets: 5,
                force_empty: false,
            },
        }
    }
}

/// Bullet-count contract carried explicitly through the pipeline instead of
/// being read from ambient state.
#[derive(Debug, Clone, Copy)]
pub struct VerbosityPolicy {
    /// Fewest bullets the structured path may emit.
    pub min_bullets: usize,
    /// Most bullets either path may emit.
    pub max_bullets: usize,
    /// Drops all bullets regardless of source.
    pub force_empty: bool,
}
