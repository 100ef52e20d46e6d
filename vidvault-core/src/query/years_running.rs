//! Expansion of a show's `year` field into the calendar years it aired.
//!
//! Three shapes are recognised: `"2017"`, `"2012-2015"` and the open-ended
//! `"2019-"`, which runs through the current year. Anything else is rejected
//! by [`RunSpan::parse`] and expands to no years at all.

/// The parsed form of a show's `year` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunSpan {
    Single(i32),
    Closed { start: i32, end: i32 },
    Ongoing { start: i32 },
}

fn four_digit_year(raw: &str) -> Option<i32> {
    if raw.len() == 4 && raw.bytes().all(|b| b.is_ascii_digit()) {
        raw.parse().ok()
    } else {
        None
    }
}

impl RunSpan {
    pub fn parse(raw: &str) -> Option<Self> {
        if let Some(year) = four_digit_year(raw) {
            return Some(RunSpan::Single(year));
        }
        // Checked before the closed form: "2019-" also has a hyphen at
        // offset 4.
        if let Some(start) = raw.strip_suffix('-') {
            return four_digit_year(start)
                .map(|start| RunSpan::Ongoing { start });
        }
        let (start, end) = raw.split_at_checked(4)?;
        let end = end.strip_prefix('-')?;
        Some(RunSpan::Closed {
            start: four_digit_year(start)?,
            end: four_digit_year(end)?,
        })
    }

    /// Inclusive bounds; an ongoing run ends at `current_year`.
    pub fn bounds(self, current_year: i32) -> (i32, i32) {
        match self {
            RunSpan::Single(year) => (year, year),
            RunSpan::Closed { start, end } => (start, end),
            RunSpan::Ongoing { start } => (start, current_year),
        }
    }

    /// Each covered year in its canonical four-digit form, ascending.
    pub fn years(self, current_year: i32) -> Vec<String> {
        let (start, end) = self.bounds(current_year);
        (start..=end).map(|year| year.to_string()).collect()
    }
}

/// Every year a show with this `year` field was running, ascending.
///
/// Reversed ranges and malformed input produce an empty list.
pub fn years_running(year_field: &str, current_year: i32) -> Vec<String> {
    RunSpan::parse(year_field)
        .map(|span| span.years(current_year))
        .unwrap_or_default()
}
