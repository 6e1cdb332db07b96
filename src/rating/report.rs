use std::fmt::Write;

use crate::io::team_record::TeamRecord;
use crate::rating::bayesian_elo::TeamRating;

const TABLE_WIDTH: usize = 100;
const NAME_WIDTH: usize = 30;

fn truncate(name: &str, max_len: usize) -> String {
    match name.chars().count() {
        len if len <= max_len => name.to_string(),
        _ => format!("{}...", name.chars().take(max_len-3).collect::<String>())
    }
}

/// Fixed width ranking table.
pub fn format_table(title: &str, records: &[TeamRecord]) -> String {
    let mut table = String::new();
    let rule = "=".repeat(TABLE_WIDTH);

    // Writing into a String cannot fail.
    let _ = writeln!(table, "\n{}", title);
    let _ = writeln!(table, "{}", rule);
    let _ = writeln!(table, "{:<4} {:<30} {:>8} {:>8} {:>8} {:>8} {:>8} {:>8} {:>8}",
        "Rank", "Team", "Mean", "StdDev", "5th%", "25th%", "Median", "75th%", "95th%");
    let _ = writeln!(table, "{}", "-".repeat(TABLE_WIDTH));

    for record in records {
        let _ = write!(table, "{:<4} {:<30} {:>8.1} {:>8.1}", record.rank, truncate(&record.team_name, NAME_WIDTH), record.mean_elo, record.std_dev);
        match record.percentiles {
            Some(p) => {
                let _ = writeln!(table, " {:>8.1} {:>8.1} {:>8.1} {:>8.1} {:>8.1}", p.percentile_5, p.percentile_25, p.median, p.percentile_75, p.percentile_95);
            },
            None => {
                let _ = writeln!(table);
            }
        }
    }

    let _ = writeln!(table, "{}", rule);
    let _ = writeln!(table, "\nNote: ELO distributions show uncertainty in team strength.");
    let _ = writeln!(table, "      Higher StdDev = more uncertainty about true strength.");
    table
}

/// Quotes a CSV field, doubling any embedded quote.
fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// One CSV row per record. Records without percentiles leave those columns empty.
pub fn format_csv(records: &[TeamRecord]) -> String {
    let mut csv = String::from("rank,team_id,team_name,mean_elo,std_dev,pct_5,pct_25,median,pct_75,pct_95\n");
    for record in records {
        let _ = write!(csv, "{},{},{},{:.1},{:.1}", record.rank, record.team_id.as_deref().unwrap_or(""), quote(&record.team_name), record.mean_elo, record.std_dev);
        match record.percentiles {
            Some(p) => {
                let _ = writeln!(csv, ",{:.1},{:.1},{:.1},{:.1},{:.1}", p.percentile_5, p.percentile_25, p.median, p.percentile_75, p.percentile_95);
            },
            None => {
                let _ = writeln!(csv, ",,,,,");
            }
        }
    }
    csv
}

/// Mean, spread and percentiles of one team's rating distribution.
pub fn format_team_distribution(team: &TeamRating) -> String {
    let dist = &team.dist;
    let mut summary = String::new();
    let _ = writeln!(summary, "\n{} (ID: {})", team.team_name, team.team_id);
    let _ = writeln!(summary, "  Mean ELO: {:.1}", dist.mean());
    let _ = writeln!(summary, "  Std Dev:  {:.1}", dist.std());
    for (label, p) in &[("5th %:   ", 5.0), ("25th %:  ", 25.0), ("Median:  ", 50.0), ("75th %:  ", 75.0), ("95th %:  ", 95.0)] {
        let _ = writeln!(summary, "  {} {:.1}", label, dist.percentile(*p));
    }
    summary
}
