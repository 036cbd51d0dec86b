use std::collections::{BTreeMap, HashMap};

use anyhow::Result;
use chrono::NaiveDate;
use serde_json::{json, Value};
use tracing::{debug, info, warn};
use validator::Validate;

use crate::api::dto::shift_dto::{ShiftListQuery, ShiftRangeQuery};
use crate::core::persistence::collection_fs_adapter_trait::CollectionApiRepository;
use crate::core::persistence::employee::employee_entity::EmployeeEntity;
use crate::core::persistence::shift::shift_api_repository_trait::ShiftApiRepository;
use crate::core::persistence::shift::shift_entity::ShiftEntity;
use crate::core::persistence::shift_model::shift_model_entity::ShiftModelEntity;
use crate::domain::shift::dto::shift_upsert_request::ShiftUpsertRequest;
use crate::domain::shift::model::{DayShiftGroups, ShiftRecord};
use crate::domain::shift::service::shift_grouping::group_shifts;
use crate::errors::AppError;

/// Widest span the grouped view accepts, in days.
pub const MAX_GROUPED_RANGE_DAYS: i64 = 62;

pub async fn list_shifts<S: ShiftApiRepository>(
    shifts: &S,
    query: ShiftListQuery,
) -> Result<Vec<ShiftEntity>> {
    if let (Some(from), Some(to)) = (query.from, query.to) {
        ensure_ordered(from, to)?;
    }

    let mut rows: Vec<ShiftEntity> = match query.employee_id.as_deref() {
        Some(employee_id) => shifts.list_by_employee(employee_id)?,
        None => shifts.list()?,
    };
    rows.retain(|s| s.is_within(query.from, query.to));
    rows.sort_by_key(|s| (s.date, s.start, s.end));

    Ok(rows)
}

pub async fn get_shift<S: ShiftApiRepository>(shifts: &S, id: String) -> Result<ShiftEntity> {
    shifts
        .find(&id)?
        .ok_or_else(|| AppError::NotFound(format!("shift {id}")).into())
}

pub async fn create_shift<S, E, M>(
    shifts: &S,
    employees: &E,
    models: &M,
    req: ShiftUpsertRequest,
) -> Result<ShiftEntity>
where
    S: ShiftApiRepository,
    E: CollectionApiRepository<EmployeeEntity>,
    M: CollectionApiRepository<ShiftModelEntity>,
{
    req.validate()?;
    ensure_employee(employees, &req.employee_id)?;
    let (start, end) = resolve_times(models, &req)?;
    let model_id = req.model_id().map(str::to_string);

    let shift = ShiftEntity::new(req.employee_id, req.date, start, end, model_id);
    shifts.insert(&shift)?;

    info!(shift_id = %shift.id, employee_id = %shift.employee_id, date = %shift.date, "Shift created");
    Ok(shift)
}

pub async fn update_shift<S, E, M>(
    shifts: &S,
    employees: &E,
    models: &M,
    id: String,
    req: ShiftUpsertRequest,
) -> Result<ShiftEntity>
where
    S: ShiftApiRepository,
    E: CollectionApiRepository<EmployeeEntity>,
    M: CollectionApiRepository<ShiftModelEntity>,
{
    req.validate()?;

    let mut shift = shifts
        .find(&id)?
        .ok_or_else(|| AppError::NotFound(format!("shift {id}")))?;
    ensure_employee(employees, &req.employee_id)?;
    let (start, end) = resolve_times(models, &req)?;

    shift.shift_model_id = req.model_id().map(str::to_string);
    shift.employee_id = req.employee_id;
    shift.date = req.date;
    shift.start = start;
    shift.end = end;

    if !shifts.update(&shift)? {
        return Err(AppError::NotFound(format!("shift {id}")).into());
    }
    Ok(shift)
}

pub async fn delete_shift<S: ShiftApiRepository>(shifts: &S, id: String) -> Result<Value> {
    if !shifts.delete(&id)? {
        return Err(AppError::NotFound(format!("shift {id}")).into());
    }

    info!(shift_id = %id, "Shift deleted");
    Ok(json!({ "message": "Shift deleted successfully" }))
}

/// Grouped display rows for every day of `[from, to]` that has shifts.
///
/// Each day's shifts are handed to the aggregator ordered by `(start, end)`,
/// storage order breaking ties, so identical intervals sit next to each other.
pub async fn get_grouped_shifts<S, E>(
    shifts: &S,
    employees: &E,
    range: ShiftRangeQuery,
) -> Result<Vec<DayShiftGroups>>
where
    S: ShiftApiRepository,
    E: CollectionApiRepository<EmployeeEntity>,
{
    ensure_ordered(range.from, range.to)?;
    if (range.to - range.from).num_days() >= MAX_GROUPED_RANGE_DAYS {
        return Err(AppError::ValidationError(format!(
            "range must not exceed {MAX_GROUPED_RANGE_DAYS} days"
        ))
        .into());
    }

    let names: HashMap<String, String> = employees
        .list()?
        .into_iter()
        .map(|e| (e.id, e.name))
        .collect();

    let mut rows: Vec<ShiftEntity> = shifts
        .list()?
        .into_iter()
        .filter(|s| s.is_within(Some(range.from), Some(range.to)))
        .collect();
    rows.sort_by_key(|s| (s.date, s.start, s.end));

    let mut by_day: BTreeMap<NaiveDate, Vec<ShiftRecord>> = BTreeMap::new();
    for shift in rows {
        let name = match names.get(&shift.employee_id) {
            Some(name) => name.clone(),
            None => {
                warn!(shift_id = %shift.id, employee_id = %shift.employee_id, "Shift references unknown employee");
                String::new()
            }
        };
        by_day
            .entry(shift.date)
            .or_default()
            .push(ShiftRecord::new(shift.start, shift.end, name));
    }

    let days: Vec<DayShiftGroups> = by_day
        .into_iter()
        .map(|(date, records)| DayShiftGroups {
            date,
            groups: group_shifts(&records),
        })
        .collect();

    debug!(from = %range.from, to = %range.to, days = days.len(), "Grouped shifts");
    Ok(days)
}

fn ensure_ordered(from: NaiveDate, to: NaiveDate) -> Result<()> {
    if from > to {
        return Err(AppError::ValidationError(format!("from ({from}) is after to ({to})")).into());
    }
    Ok(())
}

fn ensure_employee<E: CollectionApiRepository<EmployeeEntity>>(
    employees: &E,
    employee_id: &str,
) -> Result<()> {
    match employees.find(employee_id)? {
        Some(_) => Ok(()),
        None => Err(AppError::NotFound(format!("employee {employee_id}")).into()),
    }
}

/// Explicit times win; otherwise the template's times are copied.
fn resolve_times<M: CollectionApiRepository<ShiftModelEntity>>(
    models: &M,
    req: &ShiftUpsertRequest,
) -> Result<(u32, u32)> {
    let model = match req.model_id() {
        Some(model_id) => Some(
            models
                .find(model_id)?
                .ok_or_else(|| AppError::NotFound(format!("shift model {model_id}")))?,
        ),
        None => None,
    };

    match (req.start, req.end, model) {
        (Some(start), Some(end), _) => Ok((start, end)),
        (_, _, Some(model)) => Ok((model.start, model.end)),
        _ => Err(AppError::ValidationError(
            "either shift_model_id or start and end are required".into(),
        )
        .into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::persistence::memory::MemoryRepository;

    struct Fixture {
        shifts: MemoryRepository<ShiftEntity>,
        employees: MemoryRepository<EmployeeEntity>,
        models: MemoryRepository<ShiftModelEntity>,
        ana: EmployeeEntity,
        bo: EmployeeEntity,
        early: ShiftModelEntity,
    }

    fn fixture() -> Fixture {
        let ana = EmployeeEntity::new("Ana".into());
        let bo = EmployeeEntity::new("Bo".into());
        let early = ShiftModelEntity::new("Early".into(), 360, 840);
        Fixture {
            shifts: MemoryRepository::default(),
            employees: MemoryRepository::with_rows(vec![ana.clone(), bo.clone()]),
            models: MemoryRepository::with_rows(vec![early.clone()]),
            ana,
            bo,
            early,
        }
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
    }

    fn request(employee_id: &str, date: NaiveDate, times: Option<(u32, u32)>, model: Option<&str>) -> ShiftUpsertRequest {
        ShiftUpsertRequest {
            employee_id: employee_id.to_string(),
            date,
            shift_model_id: model.map(str::to_string),
            start: times.map(|t| t.0),
            end: times.map(|t| t.1),
        }
    }

    fn not_found(err: &anyhow::Error) -> bool {
        matches!(err.downcast_ref::<AppError>(), Some(AppError::NotFound(_)))
    }

    #[tokio::test]
    async fn create_copies_times_from_model() {
        let f = fixture();

        let shift = create_shift(
            &f.shifts,
            &f.employees,
            &f.models,
            request(&f.ana.id, day(19), None, Some(&f.early.id)),
        )
        .await
        .unwrap();

        assert_eq!((shift.start, shift.end), (360, 840));
        assert_eq!(shift.shift_model_id.as_deref(), Some(f.early.id.as_str()));
        assert_eq!(f.shifts.rows(), vec![shift]);
    }

    #[tokio::test]
    async fn explicit_times_override_model() {
        let f = fixture();

        let shift = create_shift(
            &f.shifts,
            &f.employees,
            &f.models,
            request(&f.ana.id, day(19), Some((420, 900)), Some(&f.early.id)),
        )
        .await
        .unwrap();

        assert_eq!((shift.start, shift.end), (420, 900));
        assert!(shift.shift_model_id.is_some());
    }

    #[tokio::test]
    async fn create_requires_known_employee_and_model() {
        let f = fixture();

        let err = create_shift(&f.shifts, &f.employees, &f.models, request("ghost", day(19), Some((0, 60)), None))
            .await
            .unwrap_err();
        assert!(not_found(&err));

        let err = create_shift(&f.shifts, &f.employees, &f.models, request(&f.ana.id, day(19), None, Some("ghost")))
            .await
            .unwrap_err();
        assert!(not_found(&err));

        assert!(f.shifts.rows().is_empty());
    }

    #[tokio::test]
    async fn update_moves_shift_and_keeps_identity() {
        let f = fixture();
        let created = create_shift(&f.shifts, &f.employees, &f.models, request(&f.ana.id, day(19), Some((480, 960)), None))
            .await
            .unwrap();

        let updated = update_shift(
            &f.shifts,
            &f.employees,
            &f.models,
            created.id.clone(),
            request(&f.bo.id, day(20), Some((600, 1080)), None),
        )
        .await
        .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.employee_id, f.bo.id);
        assert_eq!((updated.date, updated.start, updated.end), (day(20), 600, 1080));
        assert_eq!(f.shifts.rows(), vec![updated]);
    }

    #[tokio::test]
    async fn delete_unknown_shift_is_not_found() {
        let f = fixture();

        let err = delete_shift(&f.shifts, "nope".into()).await.unwrap_err();
        assert!(not_found(&err));

        let err = get_shift(&f.shifts, "nope".into()).await.unwrap_err();
        assert!(not_found(&err));
    }

    #[tokio::test]
    async fn list_filters_and_orders() {
        let f = fixture();
        let rows = vec![
            ShiftEntity::new(f.ana.id.clone(), day(20), 480, 960, None),
            ShiftEntity::new(f.bo.id.clone(), day(19), 600, 1080, None),
            ShiftEntity::new(f.ana.id.clone(), day(19), 360, 840, None),
            ShiftEntity::new(f.ana.id.clone(), day(25), 360, 840, None),
        ];
        let shifts = MemoryRepository::with_rows(rows);

        let all = list_shifts(&shifts, ShiftListQuery { from: Some(day(19)), to: Some(day(20)), employee_id: None })
            .await
            .unwrap();
        let keys: Vec<_> = all.iter().map(|s| (s.date, s.start)).collect();
        assert_eq!(keys, vec![(day(19), 360), (day(19), 600), (day(20), 480)]);

        let ana_only = list_shifts(&shifts, ShiftListQuery { employee_id: Some(f.ana.id.clone()), ..Default::default() })
            .await
            .unwrap();
        assert_eq!(ana_only.len(), 3);

        let err = list_shifts(&shifts, ShiftListQuery { from: Some(day(20)), to: Some(day(19)), employee_id: None })
            .await
            .unwrap_err();
        assert!(matches!(err.downcast_ref::<AppError>(), Some(AppError::ValidationError(_))));
    }

    #[tokio::test]
    async fn grouped_view_collapses_identical_intervals_per_day() {
        let f = fixture();
        let shifts = MemoryRepository::with_rows(vec![
            ShiftEntity::new(f.bo.id.clone(), day(19), 840, 1320, None),
            ShiftEntity::new(f.ana.id.clone(), day(19), 360, 840, None),
            ShiftEntity::new(f.bo.id.clone(), day(19), 360, 840, None),
            ShiftEntity::new(f.ana.id.clone(), day(21), 360, 840, None),
            ShiftEntity::new(f.ana.id.clone(), day(30), 360, 840, None),
        ]);

        let days = get_grouped_shifts(&shifts, &f.employees, ShiftRangeQuery { from: day(19), to: day(22) })
            .await
            .unwrap();

        assert_eq!(days.len(), 2);
        assert_eq!(days[0].date, day(19));
        let first: Vec<_> = days[0]
            .groups
            .iter()
            .map(|g| (g.start, g.end, g.count, g.employee.name.as_str()))
            .collect();
        assert_eq!(first, vec![(360, 840, 2, "Ana"), (840, 1320, 1, "Bo")]);
        assert_eq!(days[1].date, day(21));
        assert_eq!(days[1].groups[0].count, 1);
    }

    #[tokio::test]
    async fn grouped_view_tolerates_dangling_employee() {
        let f = fixture();
        let shifts = MemoryRepository::with_rows(vec![ShiftEntity::new("gone".into(), day(19), 0, 60, None)]);

        let days = get_grouped_shifts(&shifts, &f.employees, ShiftRangeQuery { from: day(19), to: day(19) })
            .await
            .unwrap();

        assert_eq!(days[0].groups[0].employee.name, "");
    }

    #[tokio::test]
    async fn grouped_view_rejects_bad_ranges() {
        let f = fixture();

        let inverted = get_grouped_shifts(&f.shifts, &f.employees, ShiftRangeQuery { from: day(20), to: day(19) }).await;
        assert!(inverted.is_err());

        let too_wide = ShiftRangeQuery {
            from: day(1),
            to: day(1) + chrono::Duration::days(MAX_GROUPED_RANGE_DAYS),
        };
        let err = get_grouped_shifts(&f.shifts, &f.employees, too_wide).await.unwrap_err();
        assert!(matches!(err.downcast_ref::<AppError>(), Some(AppError::ValidationError(_))));
    }

    #[tokio::test]
    async fn grouped_view_accepts_widest_range() {
        let f = fixture();
        let last = day(1) + chrono::Duration::days(MAX_GROUPED_RANGE_DAYS - 1);
        let shifts = MemoryRepository::with_rows(vec![
            ShiftEntity::new(f.ana.id.clone(), day(1), 360, 840, None),
            ShiftEntity::new(f.bo.id.clone(), last, 360, 840, None),
        ]);

        let days = get_grouped_shifts(&shifts, &f.employees, ShiftRangeQuery { from: day(1), to: last })
            .await
            .unwrap();

        let dates: Vec<_> = days.iter().map(|d| d.date).collect();
        assert_eq!(dates, vec![day(1), last]);
    }
}
