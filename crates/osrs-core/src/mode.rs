//! Hiscores game modes.
//!
//! Each mode has its own leaderboard, selected by a suffix on the hiscores
//! base URL. Callers may pass several flags at once; the most specific one wins:
//!
//! seasonal > deadman > ultimate > hardcore > ironman > normal

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single hiscores leaderboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    #[default]
    Normal,
    Ironman,
    /// Hardcore ironman.
    Hardcore,
    /// Ultimate ironman.
    Ultimate,
    Deadman,
    /// Leagues and other seasonal game modes.
    Seasonal,
}

impl GameMode {
    /// URL suffix appended to the hiscores base URL.
    pub fn suffix(self) -> &'static str {
        match self {
            GameMode::Normal => "",
            GameMode::Ironman => "_ironman",
            GameMode::Hardcore => "_hardcore_ironman",
            GameMode::Ultimate => "_ultimate",
            GameMode::Deadman => "_deadman",
            GameMode::Seasonal => "_seasonal",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GameMode::Normal => "normal",
            GameMode::Ironman => "ironman",
            GameMode::Hardcore => "hardcore",
            GameMode::Ultimate => "ultimate",
            GameMode::Deadman => "deadman",
            GameMode::Seasonal => "seasonal",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mode flags as a caller would set them.
///
/// Flags are not mutually exclusive; `resolve` picks one mode by precedence.
/// All flags false means the normal leaderboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeFlags {
    #[serde(default)]
    pub seasonal: bool,
    #[serde(default)]
    pub deadman: bool,
    #[serde(default)]
    pub ultimate: bool,
    #[serde(default)]
    pub hardcore: bool,
    #[serde(default)]
    pub ironman: bool,
}

impl ModeFlags {
    /// Flags for the normal leaderboard.
    pub fn normal() -> Self {
        Self::default()
    }

    /// Resolve the flags into exactly one mode.
    pub fn resolve(&self) -> GameMode {
        if self.seasonal {
            GameMode::Seasonal
        } else if self.deadman {
            GameMode::Deadman
        } else if self.ultimate {
            GameMode::Ultimate
        } else if self.hardcore {
            GameMode::Hardcore
        } else if self.ironman {
            GameMode::Ironman
        } else {
            GameMode::Normal
        }
    }
}

impl From<GameMode> for ModeFlags {
    fn from(mode: GameMode) -> Self {
        let mut flags = ModeFlags::default();
        match mode {
            GameMode::Normal => {}
            GameMode::Ironman => flags.ironman = true,
            GameMode::Hardcore => flags.hardcore = true,
            GameMode::Ultimate => flags.ultimate = true,
            GameMode::Deadman => flags.deadman = true,
            GameMode::Seasonal => flags.seasonal = true,
        }
        flags
    }
}

impl From<ModeFlags> for GameMode {
    fn from(flags: ModeFlags) -> Self {
        flags.resolve()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_normal() {
        assert_eq!(ModeFlags::default().resolve(), GameMode::Normal);
        assert_eq!(GameMode::Normal.suffix(), "");
    }

    #[test]
    fn test_single_flag_suffixes() {
        let cases = [
            (GameMode::Ironman, "_ironman"),
            (GameMode::Hardcore, "_hardcore_ironman"),
            (GameMode::Ultimate, "_ultimate"),
            (GameMode::Deadman, "_deadman"),
            (GameMode::Seasonal, "_seasonal"),
        ];
        for (mode, suffix) in cases {
            let flags = ModeFlags::from(mode);
            assert_eq!(flags.resolve(), mode);
            assert_eq!(flags.resolve().suffix(), suffix);
        }
    }

    #[test]
    fn test_precedence_resolves_conflicts() {
        let all = ModeFlags {
            seasonal: true,
            deadman: true,
            ultimate: true,
            hardcore: true,
            ironman: true,
        };
        assert_eq!(all.resolve(), GameMode::Seasonal);

        let hc_and_iron = ModeFlags {
            hardcore: true,
            ironman: true,
            ..Default::default()
        };
        assert_eq!(hc_and_iron.resolve(), GameMode::Hardcore);

        let dmm_and_uim = ModeFlags {
            deadman: true,
            ultimate: true,
            ..Default::default()
        };
        assert_eq!(dmm_and_uim.resolve(), GameMode::Deadman);
    }

    #[test]
    fn test_precedence_each_pair() {
        // highest precedence first
        let chain = [
            GameMode::Seasonal,
            GameMode::Deadman,
            GameMode::Ultimate,
            GameMode::Hardcore,
            GameMode::Ironman,
        ];
        for (i, &winner) in chain.iter().enumerate() {
            for &loser in &chain[i + 1..] {
                let a = ModeFlags::from(winner);
                let b = ModeFlags::from(loser);
                let both = ModeFlags {
                    seasonal: a.seasonal || b.seasonal,
                    deadman: a.deadman || b.deadman,
                    ultimate: a.ultimate || b.ultimate,
                    hardcore: a.hardcore || b.hardcore,
                    ironman: a.ironman || b.ironman,
                };
                assert_eq!(both.resolve(), winner, "{winner} + {loser}");
            }
        }

        let uim_and_hc = ModeFlags {
            ultimate: true,
            hardcore: true,
            ..Default::default()
        };
        assert_eq!(uim_and_hc.resolve(), GameMode::Ultimate);
    }

    #[test]
    fn test_mode_serde_lowercase() {
        let mode: GameMode = serde_json::from_str("\"hardcore\"").unwrap();
        assert_eq!(mode, GameMode::Hardcore);
        assert_eq!(serde_json::to_string(&GameMode::Ironman).unwrap(), "\"ironman\"");
    }
}
