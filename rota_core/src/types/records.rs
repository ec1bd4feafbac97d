use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::RotaError;
use crate::types::config::RotaConfig;

/// Half of a calendar day. Even shift slots are day shifts, odd slots night.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Day,
    Night,
}

/// A date given either as an absolute ISO date or as a relative keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateExpression {
    Absolute(NaiveDate),
    /// Day offset from the anchor date.
    Relative(i64),
}

impl DateExpression {
    /// Parses an ISO `YYYY-MM-DD` date or one of the fixed relative
    /// keywords. The French spellings come from the first deployment of the
    /// rota planner and are still accepted.
    pub fn parse(input: &str) -> Result<Self, RotaError> {
        let trimmed = input.trim();
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
            return Ok(DateExpression::Absolute(date));
        }
        let offset = match trimmed.to_lowercase().as_str() {
            "tomorrow" | "demain" => 1,
            "day after tomorrow" | "après-demain" => 2,
            "next week" | "la semaine prochaine" => 7,
            "next month" | "le mois prochain" => 30,
            _ => return Err(RotaError::InvalidDate(input.to_string())),
        };
        Ok(DateExpression::Relative(offset))
    }

    /// Day offset from `start_date`; negative offsets (dates in the past)
    /// are rejected.
    pub fn offset_days(&self, start_date: NaiveDate) -> Result<u64, RotaError> {
        let offset = match self {
            DateExpression::Absolute(date) => (*date - start_date).num_days(),
            DateExpression::Relative(offset) => *offset,
        };
        u64::try_from(offset).map_err(|_| RotaError::OutOfHorizon(format!("{} days", offset)))
    }
}

/// One negotiable unavailability record: a staff member who cannot work a
/// particular half-day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbsenceRequest {
    pub staff_name: String,
    pub date: String,
    pub time: TimeOfDay,
}

impl AbsenceRequest {
    pub fn new(staff_name: &str, date: &str, time: TimeOfDay) -> Self {
        AbsenceRequest {
            staff_name: staff_name.to_string(),
            date: date.to_string(),
            time,
        }
    }

    /// Resolves this record to a (shift, staff) pair against a
    /// configuration. Unknown staff names, unparseable dates, and dates
    /// outside the horizon are validation errors.
    pub fn resolve(&self, config: &RotaConfig) -> Result<(usize, usize), RotaError> {
        let staff_index = config.staff.index_of(&self.staff_name)?;
        let days = DateExpression::parse(&self.date)?.offset_days(config.start_date)?;
        let mut shift_index = days as usize * 2;
        if self.time == TimeOfDay::Night {
            shift_index += 1;
        }
        if shift_index >= config.n_shifts {
            return Err(RotaError::OutOfHorizon(self.date.clone()));
        }
        Ok((shift_index, staff_index))
    }
}

/// Maps a shift slot to its calendar date and time of day.
pub fn slot_date_time(shift_index: usize, start_date: NaiveDate) -> (NaiveDate, TimeOfDay) {
    let date = start_date + chrono::Days::new(shift_index as u64 / 2);
    let time = if shift_index % 2 == 0 {
        TimeOfDay::Day
    } else {
        TimeOfDay::Night
    };
    (date, time)
}

/// Inverse of [`slot_date_time`]: maps a (date, time) pair back to its
/// shift index, validating against the horizon.
pub fn slot_index(
    date: NaiveDate,
    time: TimeOfDay,
    config: &RotaConfig,
) -> Result<usize, RotaError> {
    let days = (date - config.start_date).num_days();
    let days =
        u64::try_from(days).map_err(|_| RotaError::OutOfHorizon(date.to_string()))? as usize;
    let mut shift_index = days * 2;
    if time == TimeOfDay::Night {
        shift_index += 1;
    }
    if shift_index >= config.n_shifts {
        return Err(RotaError::OutOfHorizon(date.to_string()));
    }
    Ok(shift_index)
}
