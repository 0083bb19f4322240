use chrono::{DateTime, Datelike, FixedOffset, Timelike, Utc};

use crate::domain::OrderStatus;

/// Calendar breakdown of a timestamp in the display offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateParts {
    pub day: u32,
    pub month: u32,
    pub year: i32,
    pub hour: u32,
    pub minutes: u32,
}

pub fn date(timestamp: DateTime<Utc>, offset: FixedOffset) -> DateParts {
    let local = timestamp.with_timezone(&offset);
    DateParts {
        day: local.day(),
        month: local.month(),
        year: local.year(),
        hour: local.hour(),
        minutes: local.minute(),
    }
}

impl DateParts {
    /// `10/5/2023`
    pub fn short_date(&self) -> String {
        format!("{}/{}/{}", self.day, self.month, self.year)
    }

    /// `14h30`
    pub fn clock(&self) -> String {
        format!("{}h{:02}", self.hour, self.minutes)
    }
}

/// `Vendido em 10/5/2023 às 14h30`
pub fn status_sentence(status: OrderStatus, parts: &DateParts) -> String {
    format!("{} em {} às {}", status.label(), parts.short_date(), parts.clock())
}
