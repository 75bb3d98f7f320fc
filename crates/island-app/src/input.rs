//! Key bindings.
//!
//! Before the round starts any key starts it; once it has ended every key
//! is ignored.

use island_core::commands::PlayerCommand;
use island_core::enums::{GamePhase, Nudge};

/// What a key press means to the driver.
#[derive(Debug, Clone, PartialEq)]
pub enum KeyAction {
    Command(PlayerCommand),
    Quit,
    Ignore,
}

/// Map a key to an action for a round in `phase`.
pub fn map_key(key: char, phase: GamePhase) -> KeyAction {
    if key == 'q' || key == '\u{1b}' {
        return KeyAction::Quit;
    }
    if phase.is_terminal() {
        return KeyAction::Ignore;
    }
    if phase == GamePhase::Idle {
        return KeyAction::Command(PlayerCommand::StartRound);
    }

    let command = match key {
        'g' => PlayerCommand::TogglePause,
        'w' => PlayerCommand::AdjustElevation {
            direction: Nudge::Increase,
        },
        's' => PlayerCommand::AdjustElevation {
            direction: Nudge::Decrease,
        },
        'a' => PlayerCommand::AdjustAzimuth {
            direction: Nudge::Decrease,
        },
        'd' => PlayerCommand::AdjustAzimuth {
            direction: Nudge::Increase,
        },
        '=' => PlayerCommand::RefineTessellation,
        '-' => PlayerCommand::CoarsenTessellation,
        ' ' => PlayerCommand::Fire,
        _ => return KeyAction::Ignore,
    };
    KeyAction::Command(command)
}

/// Map every key of a typed line. Blank lines fire.
pub fn map_line(line: &str, phase: GamePhase) -> Vec<KeyAction> {
    let keys = line.trim_end_matches(['\r', '\n']);
    if keys.is_empty() {
        return vec![map_key(' ', phase)];
    }
    keys.chars().map(|key| map_key(key, phase)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_key_starts_the_round() {
        for key in ['x', 'w', ' ', 'g'] {
            assert_eq!(
                map_key(key, GamePhase::Idle),
                KeyAction::Command(PlayerCommand::StartRound)
            );
        }
    }

    #[test]
    fn test_keys_ignored_after_round_ends() {
        for phase in [GamePhase::Won, GamePhase::Lost] {
            assert_eq!(map_key(' ', phase), KeyAction::Ignore);
            assert_eq!(map_key('w', phase), KeyAction::Ignore);
            assert_eq!(map_key('q', phase), KeyAction::Quit);
        }
    }

    #[test]
    fn test_running_bindings() {
        let phase = GamePhase::Running;
        assert_eq!(map_key(' ', phase), KeyAction::Command(PlayerCommand::Fire));
        assert_eq!(
            map_key('d', phase),
            KeyAction::Command(PlayerCommand::AdjustAzimuth {
                direction: Nudge::Increase
            })
        );
        assert_eq!(
            map_key('s', phase),
            KeyAction::Command(PlayerCommand::AdjustElevation {
                direction: Nudge::Decrease
            })
        );
        assert_eq!(
            map_key('=', phase),
            KeyAction::Command(PlayerCommand::RefineTessellation)
        );
        assert_eq!(map_key('x', phase), KeyAction::Ignore);
    }

    #[test]
    fn test_map_line() {
        let actions = map_line("ww \n", GamePhase::Paused);
        assert_eq!(actions.len(), 3);
        assert_eq!(actions[2], KeyAction::Command(PlayerCommand::Fire));
        assert_eq!(
            map_line("\n", GamePhase::Running),
            vec![KeyAction::Command(PlayerCommand::Fire)]
        );
    }
}
