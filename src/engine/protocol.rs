use serde::{Deserialize, Serialize};

use crate::engine::error::PlayError;
use crate::model::dragon::{Allocation, Dragon};
use crate::model::knight::Game;
use crate::model::outcome::Outcome;

/// Body of the solution PUT. An unplayable game sends `"dragon": null`.
#[derive(Serialize)]
pub struct SolutionRequest<'a> {
    pub dragon: Option<&'a Dragon>,
}

impl<'a> SolutionRequest<'a> {
    pub fn new(allocation: &'a Allocation) -> Self {
        Self {
            dragon: allocation.dragon(),
        }
    }
}

#[derive(Deserialize)]
pub struct SolutionResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

pub fn decode_game(body: &str) -> Result<Game, PlayError> {
    serde_json::from_str(body)
        .map_err(|e| PlayError::MalformedResponse(format!("game: {} in {:?}", e, body)))
}

pub fn decode_outcome(body: &str) -> Result<Outcome, PlayError> {
    let resp: SolutionResponse = serde_json::from_str(body)
        .map_err(|e| PlayError::MalformedResponse(format!("solution: {} in {:?}", e, body)))?;
    Ok(Outcome::from_status(resp.status, resp.message))
}
