//! Output formatting for solver results

use crate::executor::DayReport;
use chrono::TimeDelta;
use itertools::Itertools;
use std::time::Duration;

const COLUMNS: usize = 5;
const HEADER: [&str; COLUMNS] = ["Day", "Name", "Part One", "Part Two", "Duration"];

/// Output formatter for solver results
pub struct OutputFormatter {
    quiet: bool,
}

impl OutputFormatter {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Render every report, either as answers only or as one table per year
    pub fn render(&self, reports: &[DayReport]) -> String {
        if self.quiet {
            render_quiet(reports)
        } else {
            render_tables(reports)
        }
    }
}

/// One answer per line, in year, day and part order
fn render_quiet(reports: &[DayReport]) -> String {
    reports
        .iter()
        .flat_map(|report| report.answers.iter())
        .map(|(_, answer)| format!("{}\n", answer))
        .collect()
}

fn render_tables(reports: &[DayReport]) -> String {
    let mut out = String::new();
    for (year, group) in &reports.iter().chunk_by(|report| report.year) {
        let group = group.collect::<Vec<_>>();
        if !out.is_empty() {
            out.push('\n');
        }
        let total: Duration = group.iter().map(|report| report.elapsed).sum();
        let rows = group
            .iter()
            .map(|report| {
                [
                    format!("Day {}", report.day),
                    report.title.to_string(),
                    report.answer(1).unwrap_or("-").to_string(),
                    report.answer(2).unwrap_or("-").to_string(),
                    format_std_duration(report.elapsed),
                ]
            })
            .collect::<Vec<_>>();
        let footer = [
            "All Days".to_string(),
            String::new(),
            String::new(),
            String::new(),
            format_std_duration(total),
        ];

        out.push_str(&format!("Advent of Code {}!\n", year));
        out.push_str(&render_table(&rows, &footer));
    }
    out
}

/// Right-aligned table with a header and a footer row
fn render_table(rows: &[[String; COLUMNS]], footer: &[String; COLUMNS]) -> String {
    let header = HEADER.map(String::from);
    let mut widths = [0; COLUMNS];
    for row in std::iter::once(&header).chain(rows).chain(std::iter::once(footer)) {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let border = format!("+{}+\n", widths.iter().map(|w| "-".repeat(w + 2)).join("+"));
    let line = |row: &[String; COLUMNS]| {
        format!(
            "| {} |\n",
            row.iter()
                .zip(widths)
                .map(|(cell, width)| format!("{:>width$}", cell))
                .join(" | ")
        )
    };

    let mut table = border.clone();
    table.push_str(&line(&header));
    table.push_str(&border);
    for row in rows {
        table.push_str(&line(row));
    }
    table.push_str(&border);
    table.push_str(&line(footer));
    table.push_str(&border);
    table
}

/// Format a TimeDelta for display
pub fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

/// Format a std::time::Duration for display (used for wall-clock time)
pub fn format_std_duration(d: Duration) -> String {
    let micros = d.as_micros();
    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", d.as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(year: u16, day: u8, title: &'static str, answers: &[(u8, &str)], micros: u64) -> DayReport {
        DayReport {
            year,
            day,
            title,
            answers: answers.iter().map(|&(p, a)| (p, a.to_string())).collect(),
            parse_duration: TimeDelta::zero(),
            solve_duration: TimeDelta::zero(),
            elapsed: Duration::from_micros(micros),
        }
    }

    #[test]
    fn test_table_layout() {
        let reports = [
            report(2021, 1, "Sonar Sweep", &[(1, "7"), (2, "5")], 500),
            report(2021, 2, "Dive!", &[(1, "150")], 2000),
        ];
        let expected = [
            "Advent of Code 2021!",
            "+----------+-------------+----------+----------+----------+",
            "|      Day |        Name | Part One | Part Two | Duration |",
            "+----------+-------------+----------+----------+----------+",
            "|    Day 1 | Sonar Sweep |        7 |        5 |    500µs |",
            "|    Day 2 |       Dive! |      150 |        - |   2.00ms |",
            "+----------+-------------+----------+----------+----------+",
            "| All Days |             |          |          |   2.50ms |",
            "+----------+-------------+----------+----------+----------+",
            "",
        ]
        .join("\n");

        assert_eq!(OutputFormatter::new(false).render(&reports), expected);
    }

    #[test]
    fn test_one_table_per_year() {
        let reports = [
            report(2020, 25, "Combo Breaker", &[(1, "1")], 10),
            report(2021, 1, "Sonar Sweep", &[(1, "7")], 10),
        ];
        let rendered = OutputFormatter::new(false).render(&reports);
        assert_eq!(rendered.matches("All Days").count(), 2);
        let first = rendered.find("Advent of Code 2020!").unwrap();
        let second = rendered.find("Advent of Code 2021!").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_quiet_prints_answers_only() {
        let reports = [
            report(2021, 1, "Sonar Sweep", &[(1, "7"), (2, "5")], 500),
            report(2021, 2, "Dive!", &[(2, "900")], 2000),
        ];
        assert_eq!(OutputFormatter::new(true).render(&reports), "7\n5\n900\n");
    }

    #[test]
    fn test_format_duration_units() {
        assert_eq!(format_duration(TimeDelta::microseconds(999)), "999µs");
        assert_eq!(format_duration(TimeDelta::microseconds(2500)), "2.50ms");
        assert_eq!(format_duration(TimeDelta::milliseconds(1250)), "1.25s");
        assert_eq!(format_duration(TimeDelta::microseconds(-40)), "-40µs");
        assert_eq!(format_std_duration(Duration::from_micros(12)), "12µs");
        assert_eq!(format_std_duration(Duration::from_millis(3)), "3.00ms");
        assert_eq!(format_std_duration(Duration::from_millis(4500)), "4.50s");
    }
}
