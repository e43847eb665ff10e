use core::fmt::Write;

use anyhow::Result;
use serde_json::Value;

use crate::util::fangraphs::{row_int, row_stat, row_str};
use crate::util::stat::{to_table_string, Stat};

/// One qualified hitter's season line, projected down to the fixed columns
/// the report prints.
#[derive(Clone)]
pub struct BattingLine {
    name: String,
    team: String,
    g: i64,
    age: i64,
    war: Stat,
    avg: Stat,
    obp: Stat,
    slg: Stat,
    ops: Stat,
    wrc_plus: Stat,
    xwoba: Stat,
}

impl BattingLine {
    pub fn from_row(row: &Value) -> Result<Self> {
        Ok(Self {
            name: row_str(row, "PlayerName")?,
            team: row_str(row, "TeamName")?,
            g: row_int(row, "G")?,
            age: row_int(row, "Age")?,
            war: row_stat(row, "WAR"),
            avg: row_stat(row, "AVG"),
            obp: row_stat(row, "OBP"),
            slg: row_stat(row, "SLG"),
            ops: row_stat(row, "OPS"),
            wrc_plus: row_stat(row, "wRC+"),
            xwoba: row_stat(row, "xwOBA"),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn summary(&self, year: i32) -> Result<String> {
        let Self {
            name,
            team,
            g,
            age,
            war,
            avg,
            obp,
            slg,
            ops,
            wrc_plus,
            xwoba,
        } = self;
        let mut out = String::new();
        writeln!(out, "In {year} , {name} played for {team} in his age {age} season.")?;
        writeln!(out, "In the {year} season, he slashed {avg} / {obp} / {slg} in {g} G to give him a {ops} OPS.")?;
        writeln!(out, "Going more in depth, {name} accumulated  {war} WAR with a wRC+ of {wrc_plus} and an xwOBA of {xwoba}")?;
        writeln!(out, "TLDR; {name} {year} Season Stats: \n")?;
        out.push_str(&to_table_string(&[
            ("WAR", war.to_string()),
            ("G", g.to_string()),
            ("AVG", avg.to_string()),
            ("OBP", obp.to_string()),
            ("SLG", slg.to_string()),
            ("OPS", ops.to_string()),
            ("wRC+", wrc_plus.to_string()),
            ("xwOBA", xwoba.to_string()),
        ])?);
        Ok(out)
    }
}

/// Same exhaustive-scan contract as the pitching table.
pub fn find_and_report(
    out: &mut String,
    name: &str,
    year: i32,
    table: &[BattingLine],
) -> Result<bool> {
    let mut found = false;
    for line in table {
        if line.name() == name {
            out.push_str(&line.summary(year)?);
            found = true;
        }
    }
    Ok(found)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn ohtani() -> Value {
        json!({
            "PlayerName": "Shohei Ohtani",
            "TeamName": "LAA",
            "G": 155.0,
            "Age": 26.0,
            "WAR": 4.9,
            "AVG": 0.257,
            "OBP": 0.372,
            "SLG": 0.592,
            "OPS": 0.965,
            "wRC+": 152.0,
            "xwOBA": 0.393
        })
    }

    #[test]
    fn parses_a_leaderboard_row() {
        let line = BattingLine::from_row(&ohtani()).unwrap();
        assert_eq!(line.name(), "Shohei Ohtani");
        assert_eq!(line.g, 155);
        assert_eq!(line.ops, Stat(Some(0.965)));
    }

    #[test]
    fn summary_wording_is_verbatim() {
        let summary = BattingLine::from_row(&ohtani()).unwrap().summary(2021).unwrap();
        let mut lines = summary.lines();
        assert_eq!(
            lines.next().unwrap(),
            "In 2021 , Shohei Ohtani played for LAA in his age 26 season."
        );
        assert_eq!(
            lines.next().unwrap(),
            "In the 2021 season, he slashed 0.257 / 0.372 / 0.592 in 155 G to give him a 0.965 OPS."
        );
        assert_eq!(
            lines.next().unwrap(),
            "Going more in depth, Shohei Ohtani accumulated  4.9 WAR with a wRC+ of 152.0 and an xwOBA of 0.393"
        );
        assert_eq!(lines.next().unwrap(), "TLDR; Shohei Ohtani 2021 Season Stats: ");
    }

    #[test]
    fn missing_name_fails_the_row() {
        let mut row = ohtani();
        row.as_object_mut().unwrap().remove("PlayerName");
        assert!(BattingLine::from_row(&row).is_err());
    }

    #[test]
    fn pre_statcast_xwoba_renders_nan() {
        let mut row = ohtani();
        row.as_object_mut().unwrap().remove("xwOBA");
        let summary = BattingLine::from_row(&row).unwrap().summary(1927).unwrap();
        assert!(summary.contains("and an xwOBA of NaN"));
    }
}
