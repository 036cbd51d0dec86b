use crate::domain::shift::model::{GroupedShift, ShiftRecord};

/// Collapse runs of adjacent shifts with the same `(start, end)` into one
/// group carrying a count, then order the groups by `start`.
///
/// Only neighbours in input order are merged: two equal intervals separated
/// by a different one stay separate groups. The sort is stable, so groups
/// tied on `start` keep their accumulation order.
pub fn group_shifts(shifts: &[ShiftRecord]) -> Vec<GroupedShift> {
    let mut groups: Vec<GroupedShift> = Vec::new();

    for shift in shifts {
        match groups.last_mut() {
            Some(last) if last.interval() == shift.interval() => last.count += 1,
            _ => groups.push(GroupedShift::from(shift)),
        }
    }

    groups.sort_by_key(|g| g.start);
    groups
}
