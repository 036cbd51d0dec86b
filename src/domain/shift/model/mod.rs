//! Display-side shift types consumed and produced by the grouping logic

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Employee reference carried along for display only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRef {
    pub name: String,
}

/// One shift as handed to the aggregator.
///
/// `start` and `end` only need a total order and equality; the service layer
/// feeds minutes since midnight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftRecord {
    pub start: u32,
    pub end: u32,
    pub employee: EmployeeRef,
}

impl ShiftRecord {
    pub fn new(start: u32, end: u32, employee_name: impl Into<String>) -> Self {
        Self {
            start,
            end,
            employee: EmployeeRef {
                name: employee_name.into(),
            },
        }
    }

    pub fn interval(&self) -> (u32, u32) {
        (self.start, self.end)
    }
}

/// A run of adjacent shifts sharing the same interval.
///
/// Fields other than `count` come from the first shift of the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupedShift {
    pub start: u32,
    pub end: u32,
    pub employee: EmployeeRef,
    pub count: usize,
}

impl GroupedShift {
    pub fn interval(&self) -> (u32, u32) {
        (self.start, self.end)
    }
}

impl From<&ShiftRecord> for GroupedShift {
    fn from(shift: &ShiftRecord) -> Self {
        Self {
            start: shift.start,
            end: shift.end,
            employee: shift.employee.clone(),
            count: 1,
        }
    }
}

/// Groups of a single work day, as returned by the grouped view.
#[derive(Debug, Clone, Serialize)]
pub struct DayShiftGroups {
    pub date: NaiveDate,
    pub groups: Vec<GroupedShift>,
}
