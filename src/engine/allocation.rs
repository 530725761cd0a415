use crate::engine::error::PlayError;
use crate::model::dragon::{Allocation, Dragon};
use crate::model::knight::Knight;
use crate::model::stat::{DragonStat, KnightAttribute, Weather, MAX_STAT};

/// Stat values indexed by `DragonStat::index`.
type StatLine = [u8; 4];

const DROUGHT_STAT: u8 = 5;

/// Builds the dragon that should beat `knight` in the given weather.
///
/// Storms ground every dragon, so nothing is built. Drought and rain have
/// fixed builds that ignore the knight. Any other weather mirrors the
/// knight's attributes onto the matching dragon stats, then nudges the
/// strongest stat up by taking one point from each of the others.
pub fn design_dragon(knight: &Knight, weather: &Weather) -> Result<Allocation, PlayError> {
    match weather {
        Weather::Storm => return Ok(Allocation::Unplayable),
        Weather::Drought => {
            return Ok(Allocation::Dragon(Dragon::from_stats([DROUGHT_STAT; 4])));
        }
        Weather::Rain => {
            // Only claws and scales count in the rain.
            let mut stats: StatLine = [0; 4];
            stats[DragonStat::ClawSharpness.index()] = MAX_STAT;
            stats[DragonStat::ScaleThickness.index()] = MAX_STAT;
            return Ok(Allocation::Dragon(Dragon::from_stats(stats)));
        }
        Weather::Normal | Weather::Fog | Weather::Unknown(_) => {}
    }

    let mut stats = mirror_knight(knight)?;
    let ranked = rank_stats(&stats);

    let (&target, donors) = ranked.split_first().ok_or_else(|| {
        PlayError::InvalidInput(format!("no attribute above zero to counter: {}", knight))
    })?;

    for &donor in donors {
        transfer_stat_points(&mut stats, donor, target, 1);
    }

    Ok(Allocation::Dragon(Dragon::from_stats(stats)))
}

/// Copies each attribute onto its dragon stat. Any attribute outside
/// 0..=10, negatives included, is an `InvalidInput`.
fn mirror_knight(knight: &Knight) -> Result<StatLine, PlayError> {
    let mut stats: StatLine = [0; 4];

    for attr in KnightAttribute::ALL {
        let value = knight.attribute(attr);
        let points = u8::try_from(value)
            .ok()
            .filter(|points| *points <= MAX_STAT)
            .ok_or_else(|| {
                PlayError::InvalidInput(format!(
                    "{} is {}, expected 0..={}",
                    attr.wire_name(),
                    value,
                    MAX_STAT
                ))
            })?;
        stats[attr.dragon_stat().index()] = points;
    }

    Ok(stats)
}

/// Non-zero stats, highest first. Equal values keep canonical order.
fn rank_stats(stats: &StatLine) -> Vec<DragonStat> {
    let mut ranked: Vec<DragonStat> = DragonStat::ALL
        .into_iter()
        .filter(|stat| stats[stat.index()] > 0)
        .collect();
    ranked.sort_by(|a, b| stats[b.index()].cmp(&stats[a.index()]));
    ranked
}

fn transfer_stat_points(stats: &mut StatLine, from: DragonStat, to: DragonStat, limit: u8) {
    let points = limit
        .min(MAX_STAT - stats[to.index()])
        .min(stats[from.index()]);
    stats[from.index()] -= points;
    stats[to.index()] += points;
}
