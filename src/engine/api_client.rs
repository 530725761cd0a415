use reqwest::blocking::Client;

use crate::config::settings::Settings;
use crate::engine::error::PlayError;
use crate::engine::protocol::{decode_game, decode_outcome, SolutionRequest};
use crate::engine::weather_parser::parse_weather;
use crate::model::dragon::Allocation;
use crate::model::knight::Game;
use crate::model::outcome::Outcome;
use crate::model::stat::Weather;

/// The remote game service, one call per step of a game.
pub trait GameApi {
    /// Starts a new game, or re-fetches `game_id` when given.
    fn fetch_game(&self, game_id: Option<u64>) -> Result<Game, PlayError>;

    fn fetch_weather(&self, game_id: u64) -> Result<Weather, PlayError>;

    fn submit(&self, game_id: u64, allocation: &Allocation) -> Result<Outcome, PlayError>;
}

pub struct HttpGameApi {
    client: Client,
    settings: Settings,
}

impl HttpGameApi {
    pub fn new(settings: Settings) -> Result<Self, PlayError> {
        let client = Client::builder().timeout(settings.timeout()).build()?;
        Ok(Self { client, settings })
    }

    fn get_text(&self, url: &str) -> Result<String, PlayError> {
        log::debug!("GET {}", url);
        let body = self.client.get(url).send()?.error_for_status()?.text()?;
        Ok(body)
    }
}

impl GameApi for HttpGameApi {
    fn fetch_game(&self, game_id: Option<u64>) -> Result<Game, PlayError> {
        let url = match game_id {
            Some(id) => self.settings.specific_game_url(id),
            None => self.settings.game_url(),
        };
        decode_game(&self.get_text(&url)?)
    }

    fn fetch_weather(&self, game_id: u64) -> Result<Weather, PlayError> {
        parse_weather(&self.get_text(&self.settings.weather_url(game_id))?)
    }

    fn submit(&self, game_id: u64, allocation: &Allocation) -> Result<Outcome, PlayError> {
        let url = self.settings.solution_url(game_id);
        log::debug!("PUT {} with {}", url, allocation);

        let body = self
            .client
            .put(&url)
            .json(&SolutionRequest::new(allocation))
            .send()?
            .error_for_status()?
            .text()?;

        decode_outcome(&body)
    }
}
