use core::fmt::Write;
use std::fmt::{Display, Formatter};

use anyhow::Result;

/// A possibly-missing numeric stat. Statcast-era columns (xERA, Pitching+,
/// xwOBA) are simply absent from leaderboards before 2015, and those holes
/// render as `NaN` rather than failing the whole row.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Stat(pub Option<f64>);

impl Display for Stat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            None => write!(f, "NaN"),
            // Whole numbers keep one decimal so 3 ERA reads as 3.0.
            Some(x) if x == x.trunc() && x.is_finite() => write!(f, "{x:.1}"),
            Some(x) => write!(f, "{x}"),
        }
    }
}

/// Two-column rendering for the `TLDR;` block: labels left-justified, values
/// right-justified, widths taken from the widest entry of each column.
pub fn to_table_string(rows: &[(&str, String)]) -> Result<String> {
    let label_width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    let value_width = rows.iter().map(|(_, value)| value.len()).max().unwrap_or(0);
    let mut out = String::new();
    for (label, value) in rows {
        writeln!(out, "{label: <label_width$}  {value: >value_width$}")?;
    }
    Ok(out)
}
