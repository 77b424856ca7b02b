//! Session settings: who plays, how hard the computer tries, how it looks.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Who controls the O side.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(ascii_case_insensitive)]
pub enum GameMode {
    /// Two humans share the board.
    #[default]
    #[strum(to_string = "player-vs-player", serialize = "pvp")]
    PlayerVsPlayer,
    /// A human plays X against the computer playing O.
    #[strum(to_string = "player-vs-ai", serialize = "pvai")]
    PlayerVsAi,
}

impl GameMode {
    /// The side the computer controls in this mode, if any.
    pub fn ai_player(self) -> Option<crate::Player> {
        match self {
            GameMode::PlayerVsPlayer => None,
            GameMode::PlayerVsAi => Some(crate::Player::O),
        }
    }
}

/// Opponent strength under [`GameMode::PlayerVsAi`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Difficulty {
    /// Random moves.
    Easy,
    /// Wins, blocks and takes the center; otherwise random.
    #[default]
    Medium,
    /// Wins, blocks, center, corners, then edges.
    Hard,
}

/// Visual theme selection. Stored for the presentation layer only.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Theme {
    /// Flat colors.
    #[default]
    Modern,
    /// Pen and paper.
    Classic,
    /// Greens and wood.
    Nature,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_defaults() {
        assert_eq!(GameMode::default(), GameMode::PlayerVsPlayer);
        assert_eq!(Difficulty::default(), Difficulty::Medium);
        assert_eq!(Theme::default(), Theme::Modern);
    }

    #[test]
    fn test_mode_parses_aliases() {
        assert_eq!("pvai".parse::<GameMode>().ok(), Some(GameMode::PlayerVsAi));
        assert_eq!("PvP".parse::<GameMode>().ok(), Some(GameMode::PlayerVsPlayer));
        assert_eq!(
            "player-vs-ai".parse::<GameMode>().ok(),
            Some(GameMode::PlayerVsAi)
        );
    }

    #[test]
    fn test_display_parses_back() {
        for difficulty in Difficulty::iter() {
            assert_eq!(difficulty.to_string().parse::<Difficulty>().ok(), Some(difficulty));
        }
        for theme in Theme::iter() {
            assert_eq!(theme.to_string().parse::<Theme>().ok(), Some(theme));
        }
        assert_eq!(Difficulty::Hard.to_string(), "hard");
    }

    #[test]
    fn test_ai_side_only_in_ai_mode() {
        assert_eq!(GameMode::PlayerVsPlayer.ai_player(), None);
        assert_eq!(GameMode::PlayerVsAi.ai_player(), Some(crate::Player::O));
    }
}
