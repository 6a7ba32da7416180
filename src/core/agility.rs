//! # Agility
//!
//! An arrow is shown; press the matching key. Each hit scores a point and
//! draws a fresh arrow straight away. The first miss ends the round on the
//! round-over screen with the score intact.

use log::{debug, info};

use crate::core::action::{Action, Effect, TimerClass};
use crate::core::prompt::{PromptError, PromptSource};
use crate::core::state::{GameMode, GameState, Screen};

/// Handle one action while `Playing(Agility)`.
pub fn update(state: GameState, action: Action) -> (GameState, Effect) {
    let rearm = Effect::Schedule(TimerClass::Frame);

    let Action::Key(key) = action else {
        return (state, rearm);
    };
    let Some(pressed) = key.direction() else {
        return (state, rearm);
    };

    if state.prompt == Some(pressed) {
        debug!("Hit {:?}, score {}", pressed, state.score.saturating_add(1));
        (
            GameState {
                score: state.score.saturating_add(1),
                prompt: None,
                ..state
            },
            rearm,
        )
    } else {
        info!(
            "Miss: pressed {:?}, expected {:?}. Final score {}",
            pressed, state.prompt, state.score
        );
        (
            GameState {
                screen: Screen::RoundOver(GameMode::Agility),
                prompt: None,
                ..state
            },
            Effect::None,
        )
    }
}

/// Draw a prompt if an Agility round is waiting for one.
pub fn ensure_prompt(
    state: GameState,
    prompts: &mut dyn PromptSource,
) -> Result<GameState, PromptError> {
    if !state.is_playing(GameMode::Agility) || state.prompt.is_some() {
        return Ok(state);
    }
    let prompt = prompts.next_prompt()?;
    debug!("New prompt {:?} from {}", prompt, prompts.name());
    Ok(GameState {
        prompt: Some(prompt),
        ..state
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::Direction;
    use crate::test_support::{FailingPrompts, ScriptedPrompts, key, playing_agility};

    #[test]
    fn test_matching_key_scores_and_clears_prompt() {
        let (state, effect) = update(playing_agility(Direction::Up, 0), key("up"));
        assert_eq!(state.score, 1);
        assert!(state.prompt.is_none());
        assert_eq!(state.screen, Screen::Playing(GameMode::Agility));
        assert_eq!(effect, Effect::Schedule(TimerClass::Frame));
    }

    #[test]
    fn test_score_saturates_at_max() {
        let (state, _) = update(playing_agility(Direction::Up, u32::MAX), key("up"));
        assert_eq!(state.score, u32::MAX);
        assert!(state.prompt.is_none());
    }

    #[test]
    fn test_letter_bindings_score() {
        for (dir, id) in [
            (Direction::Up, "w"),
            (Direction::Down, "s"),
            (Direction::Left, "a"),
            (Direction::Right, "d"),
        ] {
            let (state, _) = update(playing_agility(dir, 5), key(id));
            assert_eq!(state.score, 6, "key {id}");
        }
    }

    #[test]
    fn test_wrong_key_ends_round() {
        let (state, effect) = update(playing_agility(Direction::Up, 3), key("down"));
        assert_eq!(state.screen, Screen::RoundOver(GameMode::Agility));
        assert_eq!(state.score, 3);
        assert_eq!(effect, Effect::None);
    }

    #[test]
    fn test_non_directional_keys_are_ignored() {
        let before = playing_agility(Direction::Right, 2);
        for id in ["x", "enter", "f13"] {
            let (state, effect) = update(before.clone(), key(id));
            assert_eq!(state, before);
            assert_eq!(effect, Effect::Schedule(TimerClass::Frame));
        }
    }

    #[test]
    fn test_timers_leave_state_alone() {
        let before = playing_agility(Direction::Left, 1);
        let (state, effect) = update(before.clone(), Action::Timer(TimerClass::Frame));
        assert_eq!(state, before);
        assert_eq!(effect, Effect::Schedule(TimerClass::Frame));
    }

    #[test]
    fn test_ensure_prompt_fills_empty_prompt() {
        let mut prompts = ScriptedPrompts::new(&[Direction::Left]);
        let state = GameState {
            prompt: None,
            ..playing_agility(Direction::Up, 0)
        };
        let state = ensure_prompt(state, &mut prompts).unwrap();
        assert_eq!(state.prompt, Some(Direction::Left));
    }

    #[test]
    fn test_ensure_prompt_keeps_existing_prompt() {
        let mut prompts = ScriptedPrompts::new(&[]);
        let state = ensure_prompt(playing_agility(Direction::Down, 0), &mut prompts).unwrap();
        assert_eq!(state.prompt, Some(Direction::Down));
    }

    #[test]
    fn test_ensure_prompt_skips_other_screens() {
        let mut prompts = FailingPrompts;
        let state = ensure_prompt(GameState::new(), &mut prompts).unwrap();
        assert!(state.prompt.is_none());
    }

    #[test]
    fn test_ensure_prompt_propagates_source_failure() {
        let mut prompts = FailingPrompts;
        let state = GameState {
            prompt: None,
            ..playing_agility(Direction::Up, 0)
        };
        assert!(ensure_prompt(state, &mut prompts).is_err());
    }
}
