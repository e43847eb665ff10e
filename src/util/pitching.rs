use core::fmt::Write;

use anyhow::Result;
use serde_json::Value;

use crate::util::fangraphs::{row_int, row_stat, row_str};
use crate::util::stat::{to_table_string, Stat};

/// One qualified pitcher's season line, projected down to the fixed columns
/// the report prints.
#[derive(Clone)]
pub struct PitchingLine {
    name: String,
    team: String,
    g: i64,
    age: i64,
    w: i64,
    l: i64,
    war: Stat,
    era: Stat,
    ip: Stat,
    so: i64,
    fip: Stat,
    whip: Stat,
    xera: Stat,
    pitching_plus: Stat,
}

impl PitchingLine {
    pub fn from_row(row: &Value) -> Result<Self> {
        Ok(Self {
            name: row_str(row, "PlayerName")?,
            team: row_str(row, "TeamName")?,
            g: row_int(row, "G")?,
            age: row_int(row, "Age")?,
            w: row_int(row, "W")?,
            l: row_int(row, "L")?,
            war: row_stat(row, "WAR"),
            era: row_stat(row, "ERA"),
            ip: row_stat(row, "IP"),
            so: row_int(row, "SO")?,
            fip: row_stat(row, "FIP"),
            whip: row_stat(row, "WHIP"),
            xera: row_stat(row, "xERA"),
            pitching_plus: row_stat(row, "Pitching+"),
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
            w,
            l,
            war,
            era,
            ip,
            so,
            fip,
            whip,
            xera,
            pitching_plus,
        } = self;
        let mut out = String::new();
        writeln!(out, "In {year} , {name} pitched for {team} in his age {age} season.")?;
        writeln!(out, "In the {year} season, he was {w} - {l} in {g} G with a {era} ERA in {ip} IP with {so} SO.")?;
        writeln!(out, "He also had a WHIP of {whip} and FIP of {fip} .")?;
        writeln!(out, "Going more in depth, {name} accumulated  {war} WAR with an xERA of {xera} and a Pitching+ of {pitching_plus}")?;
        writeln!(out, "TLDR; {name} {year} Season Stats: \n")?;
        out.push_str(&to_table_string(&[
            ("WAR", war.to_string()),
            ("G", g.to_string()),
            ("W", w.to_string()),
            ("L", l.to_string()),
            ("ERA", era.to_string()),
            ("IP", ip.to_string()),
            ("SO", so.to_string()),
            ("FIP", fip.to_string()),
            ("WHIP", whip.to_string()),
            ("xERA", xera.to_string()),
            ("Pitching+", pitching_plus.to_string()),
        ])?);
        Ok(out)
    }
}

/// Exhaustive in-order scan: every row whose name matches gets a summary
/// block, and the scan never stops at the first hit.
pub fn find_and_report(
    out: &mut String,
    name: &str,
    year: i32,
    table: &[PitchingLine],
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
            "G": 23.0,
            "Age": 26.0,
            "W": 9.0,
            "L": 2.0,
            "WAR": 4.1,
            "ERA": 3.18,
            "IP": 130.1,
            "SO": 156.0,
            "FIP": 3.52,
            "WHIP": 1.09,
            "xERA": 3.14,
            "Pitching+": 112.0
        })
    }

    #[test]
    fn parses_a_leaderboard_row() {
        let line = PitchingLine::from_row(&ohtani()).unwrap();
        assert_eq!(line.name(), "Shohei Ohtani");
        assert_eq!(line.team, "LAA");
        assert_eq!(line.w, 9);
        assert_eq!(line.so, 156);
        assert_eq!(line.era, Stat(Some(3.18)));
    }

    #[test]
    fn missing_counting_stat_fails_the_row() {
        let mut row = ohtani();
        row.as_object_mut().unwrap().remove("W");
        assert!(PitchingLine::from_row(&row).is_err());
    }

    #[test]
    fn summary_wording_is_verbatim() {
        let summary = PitchingLine::from_row(&ohtani()).unwrap().summary(2021).unwrap();
        let mut lines = summary.lines();
        assert_eq!(
            lines.next().unwrap(),
            "In 2021 , Shohei Ohtani pitched for LAA in his age 26 season."
        );
        assert_eq!(
            lines.next().unwrap(),
            "In the 2021 season, he was 9 - 2 in 23 G with a 3.18 ERA in 130.1 IP with 156 SO."
        );
        assert_eq!(lines.next().unwrap(), "He also had a WHIP of 1.09 and FIP of 3.52 .");
        assert_eq!(
            lines.next().unwrap(),
            "Going more in depth, Shohei Ohtani accumulated  4.1 WAR with an xERA of 3.14 and a Pitching+ of 112.0"
        );
        assert_eq!(lines.next().unwrap(), "TLDR; Shohei Ohtani 2021 Season Stats: ");
        assert_eq!(lines.next().unwrap(), "");
        assert!(summary.contains("Pitching+"));
    }

    #[test]
    fn pre_statcast_seasons_render_nan() {
        let mut row = ohtani();
        let fields = row.as_object_mut().unwrap();
        fields.remove("xERA");
        fields.insert("Pitching+".to_owned(), Value::Null);
        let summary = PitchingLine::from_row(&row).unwrap().summary(1927).unwrap();
        assert!(summary.contains("with an xERA of NaN and a Pitching+ of NaN"));
    }

    #[test]
    fn scan_reports_every_match() {
        let table = [
            PitchingLine::from_row(&ohtani()).unwrap(),
            PitchingLine::from_row(&ohtani()).unwrap(),
        ];
        let mut out = String::new();
        assert!(find_and_report(&mut out, "Shohei Ohtani", 2021, &table).unwrap());
        assert_eq!(out.matches("TLDR; Shohei Ohtani 2021 Season Stats:").count(), 2);
    }

    #[test]
    fn absent_name_reports_nothing() {
        let table = [PitchingLine::from_row(&ohtani()).unwrap()];
        let mut out = String::new();
        assert!(!find_and_report(&mut out, "Babe Ruth", 2021, &table).unwrap());
        assert!(out.is_empty());
    }
}
