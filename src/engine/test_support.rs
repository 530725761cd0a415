use std::cell::{Cell, RefCell};

use crate::engine::api_client::GameApi;
use crate::engine::error::PlayError;
use crate::model::dragon::Allocation;
use crate::model::knight::{Game, Knight};
use crate::model::outcome::Outcome;
use crate::model::stat::Weather;

pub struct FakeGame {
    pub game_id: u64,
    pub knight: Knight,
    pub weather: Weather,
    pub status: String,
}

impl FakeGame {
    pub fn new(game_id: u64, knight: Knight, weather: Weather, status: &str) -> Self {
        Self {
            game_id,
            knight,
            weather,
            status: status.to_string(),
        }
    }
}

/// In-memory game server. New games are handed out in order.
pub struct FakeApi {
    games: Vec<FakeGame>,
    next: Cell<usize>,
    weather_fails: bool,
    submissions: RefCell<Vec<(u64, Allocation)>>,
}

impl FakeApi {
    pub fn new(games: Vec<FakeGame>) -> Self {
        Self {
            games,
            next: Cell::new(0),
            weather_fails: false,
            submissions: RefCell::new(Vec::new()),
        }
    }

    pub fn failing_weather(mut self) -> Self {
        self.weather_fails = true;
        self
    }

    pub fn submissions(&self) -> Vec<(u64, Allocation)> {
        self.submissions.borrow().clone()
    }

    fn find(&self, game_id: u64) -> Result<&FakeGame, PlayError> {
        self.games
            .iter()
            .find(|g| g.game_id == game_id)
            .ok_or_else(|| PlayError::MalformedResponse(format!("no game {}", game_id)))
    }
}

impl GameApi for FakeApi {
    fn fetch_game(&self, game_id: Option<u64>) -> Result<Game, PlayError> {
        let game = match game_id {
            Some(id) => self.find(id)?,
            None => {
                let idx = self.next.get();
                self.next.set(idx + 1);
                self.games
                    .get(idx)
                    .ok_or_else(|| PlayError::MalformedResponse("out of games".into()))?
            }
        };
        Ok(Game {
            game_id: game.game_id,
            knight: game.knight.clone(),
        })
    }

    fn fetch_weather(&self, game_id: u64) -> Result<Weather, PlayError> {
        if self.weather_fails {
            return Err(PlayError::Parse("unexpected end of document".into()));
        }
        Ok(self.find(game_id)?.weather.clone())
    }

    fn submit(&self, game_id: u64, allocation: &Allocation) -> Result<Outcome, PlayError> {
        self.submissions
            .borrow_mut()
            .push((game_id, allocation.clone()));
        let status = self.find(game_id)?.status.clone();
        Ok(Outcome::from_status(status, None))
    }
}
