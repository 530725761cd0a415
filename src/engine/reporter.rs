use std::fmt;
use std::io::{self, Write};

use crate::engine::api_client::GameApi;
use crate::engine::session::play;
use crate::model::outcome::Attempt;

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub count: u32,
    pub game_id: Option<u64>,
    pub verbose: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            count: 1,
            game_id: None,
            verbose: false,
        }
    }
}

/// Win/loss tally across a run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub won: u32,
    pub lost: u32,
}

impl Summary {
    pub fn record(&mut self, won: bool) {
        if won {
            self.won += 1;
        } else {
            self.lost += 1;
        }
    }

    pub fn played(&self) -> u32 {
        self.won + self.lost
    }

    /// Whole-number win percentage, halves rounded to even.
    /// `None` when no game was played.
    pub fn win_ratio_percent(&self) -> Option<u32> {
        let played = u64::from(self.played());
        if played == 0 {
            return None;
        }

        let scaled = u64::from(self.won) * 100;
        let (quotient, remainder) = (scaled / played, scaled % played);
        let round_up = remainder * 2 > played || (remainder * 2 == played && quotient % 2 == 1);
        let percent = if round_up { quotient + 1 } else { quotient };

        u32::try_from(percent).ok()
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Played: {}", self.played())?;
        writeln!(f, "Won: {}", self.won)?;
        writeln!(f, "Lost: {}", self.lost)?;
        match self.win_ratio_percent() {
            Some(percent) => writeln!(f, "Win ratio: {}%", percent),
            None => writeln!(f, "Win ratio: n/a"),
        }
    }
}

/// Plays the requested games one after another and prints a report.
///
/// A game that errors counts as a loss; the run carries on with the next one.
pub fn run<A, W>(api: &A, options: &RunOptions, out: &mut W) -> io::Result<Summary>
where
    A: GameApi + ?Sized,
    W: Write,
{
    let mut summary = Summary::default();

    let rounds = match options.game_id {
        Some(_) => 1,
        None => options.count.max(1),
    };

    for _ in 0..rounds {
        let attempt = play(api, options.game_id);
        report_attempt(out, &attempt, options.verbose)?;
        summary.record(attempt.is_victory());
    }

    writeln!(out)?;
    write!(out, "{}", summary)?;
    out.flush()?;

    Ok(summary)
}

fn report_attempt<W: Write>(out: &mut W, attempt: &Attempt, verbose: bool) -> io::Result<()> {
    let ctx = &attempt.context;
    let game_id = or_unknown(&ctx.game_id);

    match &attempt.result {
        Ok(outcome) => writeln!(out, "Game: {}, result: {}", game_id, outcome.status())?,
        Err(_) => writeln!(out, "Game: {}, result: error", game_id)?,
    }

    if verbose {
        writeln!(out, "Knight: {}", or_unknown(&ctx.knight))?;
        writeln!(out, "Dragon: {}", or_unknown(&ctx.allocation))?;
        writeln!(out)?;
    }

    if !attempt.is_victory() {
        match &attempt.result {
            Ok(outcome) => writeln!(out, "Response: {}", outcome)?,
            Err(err) => writeln!(out, "Error: {}", err)?,
        }
        writeln!(out, "Weather: {}", or_unknown(&ctx.weather))?;
        writeln!(out, "Knight: {}", or_unknown(&ctx.knight))?;
        writeln!(out, "Dragon: {}", or_unknown(&ctx.allocation))?;
        writeln!(out)?;
    }

    Ok(())
}

fn or_unknown<T: fmt::Display>(value: &Option<T>) -> String {
    value
        .as_ref()
        .map_or_else(|| "unknown".to_string(), |v| v.to_string())
}
