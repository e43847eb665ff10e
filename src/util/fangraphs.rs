use std::rc::Rc;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use chrono::{Datelike, Local};
use fxhash::FxHashMap;
use serde_json::Value;

use crate::util::hitting::BattingLine;
use crate::util::pitching::PitchingLine;
use crate::util::stat::Stat;
use crate::util::QueryError;

const LEADERS_URL: &str = "https://www.fangraphs.com/api/leaders/major-league/data";

// FanGraphs leaderboards start with the 1871 National Association season.
const FIRST_SEASON: i32 = 1871;

pub struct SeasonStats {
    pub pitching: Vec<PitchingLine>,
    pub batting: Vec<BattingLine>,
}

/// Handle on the stats backend. Owns the HTTP agent and an in-process cache
/// of already-fetched seasons, so repeated queries for the same year never
/// hit the network twice.
pub struct StatsClient {
    agent: ureq::Agent,
    cache: FxHashMap<i32, Rc<SeasonStats>>,
}

impl StatsClient {
    pub fn new() -> Self {
        Self {
            agent: ureq::AgentBuilder::new()
                .timeout(Duration::from_secs(30))
                .user_agent(concat!("bsbl-stats/", env!("CARGO_PKG_VERSION")))
                .build(),
            cache: FxHashMap::default(),
        }
    }

    /// Both qualified-player tables for one season. Every backend failure,
    /// from an out-of-range season to a transport error, comes back as
    /// `YearNotFound` with the cause attached.
    pub fn season_stats(&mut self, year: i32) -> Result<Rc<SeasonStats>, QueryError> {
        if let Some(stats) = self.cache.get(&year) {
            return Ok(Rc::clone(stats));
        }
        let current = Local::now().year();
        if year < FIRST_SEASON || year > current {
            return Err(QueryError::YearNotFound(anyhow!(
                "Season {year} is outside the supported {FIRST_SEASON}-{current} range"
            )));
        }
        let stats = Rc::new(self.fetch(year).map_err(QueryError::YearNotFound)?);
        self.cache.insert(year, Rc::clone(&stats));
        Ok(stats)
    }

    fn fetch(&self, year: i32) -> Result<SeasonStats> {
        let pitching = rows(&self.leaderboard(year, "pit")?)?
            .iter()
            .map(PitchingLine::from_row)
            .collect::<Result<Vec<_>>>()?;
        let batting = rows(&self.leaderboard(year, "bat")?)?
            .iter()
            .map(BattingLine::from_row)
            .collect::<Result<Vec<_>>>()?;
        Ok(SeasonStats { pitching, batting })
    }

    fn leaderboard(&self, year: i32, group: &str) -> Result<Value> {
        let season = year.to_string();
        self.agent
            .get(LEADERS_URL)
            .query("age", "")
            .query("pos", "all")
            .query("stats", group)
            .query("lg", "all")
            .query("qual", "y")
            .query("season", &season)
            .query("season1", &season)
            .query("ind", "0")
            .query("type", "8")
            .query("month", "0")
            .query("pageitems", "2000000000")
            .query("pagenum", "1")
            .call()
            .with_context(|| format!("Leaderboard request for the {year} season failed"))?
            .into_json::<Value>()
            .context("Leaderboard response was not a valid json")
    }
}

/// The row array of a leaderboard response. An empty leaderboard means no
/// qualified players for that season, which is a failure to the caller.
pub fn rows(response: &Value) -> Result<&Vec<Value>> {
    let rows = response["data"]
        .as_array()
        .context("Leaderboard response had no data rows")?;
    if rows.is_empty() {
        return Err(anyhow!("Leaderboard had no qualified players"));
    }
    Ok(rows)
}

pub fn row_str(row: &Value, key: &str) -> Result<String> {
    row[key]
        .as_str()
        .map(str::to_owned)
        .with_context(|| format!("Row didn't have a '{key}'"))
}

pub fn row_int(row: &Value, key: &str) -> Result<i64> {
    row[key]
        .as_f64()
        .map(|x| x as i64)
        .with_context(|| format!("Row didn't have a numeric '{key}'"))
}

pub fn row_stat(row: &Value, key: &str) -> Stat {
    Stat(row[key].as_f64())
}
