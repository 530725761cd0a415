use crate::engine::allocation::design_dragon;
use crate::engine::api_client::GameApi;
use crate::engine::error::PlayError;
use crate::model::outcome::{Attempt, Outcome, PlayContext};

/// Plays one game: fetch it, check the weather, design a dragon, submit.
///
/// Errors end the attempt early but never panic; the returned context holds
/// everything gathered before the failing step.
pub fn play<A: GameApi + ?Sized>(api: &A, game_id: Option<u64>) -> Attempt {
    let mut context = PlayContext::new(game_id);
    let result = play_steps(api, game_id, &mut context);

    match &result {
        Ok(outcome) => log::info!(
            "Game {} finished: {}",
            context.game_id.unwrap_or_default(),
            outcome
        ),
        Err(err) => log::warn!("Game {:?} failed: {}", context.game_id, err),
    }

    Attempt { context, result }
}

fn play_steps<A: GameApi + ?Sized>(
    api: &A,
    game_id: Option<u64>,
    context: &mut PlayContext,
) -> Result<Outcome, PlayError> {
    let game = api.fetch_game(game_id)?;
    let game_id = game.game_id;
    context.game_id = Some(game_id);
    log::debug!("Game {}: knight {}", game_id, game.knight);

    let weather = api.fetch_weather(game_id)?;
    log::debug!("Game {}: weather {}", game_id, weather);

    let allocation = design_dragon(&game.knight, &weather);
    context.knight = Some(game.knight);
    context.weather = Some(weather);
    let allocation = allocation?;
    log::debug!("Game {}: designed {}", game_id, allocation);

    let outcome = api.submit(game_id, &allocation);
    context.allocation = Some(allocation);
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_support::{FakeApi, FakeGame};
    use crate::model::dragon::{Allocation, Dragon};
    use crate::model::knight::Knight;
    use crate::model::stat::Weather;

    fn knight() -> Knight {
        Knight {
            name: None,
            attack: 5,
            armor: 3,
            endurance: 1,
            agility: 0,
        }
    }

    #[test]
    fn submits_the_designed_dragon() {
        let api = FakeApi::new(vec![FakeGame::new(7, knight(), Weather::Normal, "Victory")]);
        let attempt = play(&api, None);

        assert!(attempt.is_victory());
        assert_eq!(attempt.context.game_id, Some(7));
        assert_eq!(attempt.context.weather, Some(Weather::Normal));

        let submitted = api.submissions();
        assert_eq!(
            submitted,
            vec![(7, Allocation::Dragon(Dragon::from_stats([7, 2, 0, 0])))]
        );
    }

    #[test]
    fn storm_submits_an_empty_solution() {
        let api = FakeApi::new(vec![FakeGame::new(3, knight(), Weather::Storm, "Defeat")]);
        let attempt = play(&api, None);

        assert!(!attempt.is_victory());
        assert_eq!(attempt.context.allocation, Some(Allocation::Unplayable));
        assert_eq!(api.submissions(), vec![(3, Allocation::Unplayable)]);
    }

    #[test]
    fn fetches_a_specific_game() {
        let api = FakeApi::new(vec![
            FakeGame::new(1, knight(), Weather::Normal, "Defeat"),
            FakeGame::new(2, knight(), Weather::Rain, "Victory"),
        ]);
        let attempt = play(&api, Some(2));

        assert!(attempt.is_victory());
        assert_eq!(attempt.context.game_id, Some(2));
        assert_eq!(api.submissions()[0].0, 2);
    }

    #[test]
    fn invalid_knight_fails_before_submitting() {
        let api = FakeApi::new(vec![FakeGame::new(4, Knight::default(), Weather::Normal, "Victory")]);
        let attempt = play(&api, None);

        assert!(matches!(attempt.result, Err(PlayError::InvalidInput(_))));
        assert_eq!(attempt.context.knight, Some(Knight::default()));
        assert_eq!(attempt.context.allocation, None);
        assert!(api.submissions().is_empty());
    }

    #[test]
    fn weather_failure_keeps_the_game_id() {
        let api = FakeApi::new(vec![FakeGame::new(8, knight(), Weather::Normal, "Victory")])
            .failing_weather();
        let attempt = play(&api, None);

        assert!(matches!(attempt.result, Err(PlayError::Parse(_))));
        assert_eq!(attempt.context.game_id, Some(8));
        assert!(api.submissions().is_empty());
    }

    #[test]
    fn unknown_game_id_is_reported() {
        let api = FakeApi::new(vec![]);
        let attempt = play(&api, Some(404));

        assert!(matches!(attempt.result, Err(PlayError::MalformedResponse(_))));
        assert_eq!(attempt.context.game_id, Some(404));
    }
}
