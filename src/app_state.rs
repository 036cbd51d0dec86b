use std::sync::Arc;

use serde_json::Value;

use crate::api::dto::paginated_response::{PaginatedResponse, PaginationQuery};
use crate::api::dto::shift_dto::{ShiftListQuery, ShiftRangeQuery};
use crate::config::AppConfig;
use crate::core::persistence::employee::employee_entity::EmployeeEntity;
use crate::core::persistence::employee::employee_repository::EmployeeRepository;
use crate::core::persistence::logs::log_repository::LogRepositoryImpl;
use crate::core::persistence::setting::setting_entity::SettingEntity;
use crate::core::persistence::setting::setting_repository::SettingRepository;
use crate::core::persistence::shift::shift_entity::ShiftEntity;
use crate::core::persistence::shift::shift_repository::ShiftRepository;
use crate::core::persistence::shift_model::shift_model_entity::ShiftModelEntity;
use crate::core::persistence::shift_model::shift_model_repository::ShiftModelRepository;
use crate::domain::employee::dto::employee_upsert_request::EmployeeUpsertRequest;
use crate::domain::employee::service::employee_service;
use crate::domain::setting::dto::setting_upsert_request::SettingUpsertRequest;
use crate::domain::setting::service::setting_service;
use crate::domain::shift::dto::shift_upsert_request::ShiftUpsertRequest;
use crate::domain::shift::model::DayShiftGroups;
use crate::domain::shift::service::shift_service;
use crate::domain::shift_model::dto::shift_model_upsert_request::ShiftModelUpsertRequest;
use crate::domain::shift_model::service::shift_model_service;
use crate::domain::system::service::log_service::LogService;
use crate::domain::system::service::status_service;

/// Forwards to a domain fn, passing the listed repositories first.
macro_rules! delegate_async_service {
    ($(fn $name:ident($($arg:ident : $typ:ty),*) -> $ret:ty => $path:path [$($repo:ident),*];)+) => {
        $(
            pub async fn $name(&self, $($arg: $typ),*) -> anyhow::Result<$ret> {
                $path($(&*self.$repo,)* $($arg),*).await
            }
        )+
    };
}

#[derive(Clone)]
pub struct AppState {
    pub employee_service: Arc<EmployeeService>,
    pub shift_model_service: Arc<ShiftModelService>,
    pub shift_service: Arc<ShiftService>,
    pub setting_service: Arc<SettingService>,
    pub system_service: Arc<SystemService>,
    pub log_service: Arc<LogService<LogRepositoryImpl>>,
}

pub fn build_app_state(config: &AppConfig) -> AppState {
    let employees = Arc::new(EmployeeRepository::new(&config.data_dir));
    let shift_models = Arc::new(ShiftModelRepository::new(&config.data_dir));
    let shifts = Arc::new(ShiftRepository::new(&config.data_dir));
    let settings = Arc::new(SettingRepository::new(&config.data_dir));

    AppState {
        employee_service: Arc::new(EmployeeService {
            employees: employees.clone(),
            shifts: shifts.clone(),
        }),
        shift_model_service: Arc::new(ShiftModelService {
            shift_models: shift_models.clone(),
        }),
        shift_service: Arc::new(ShiftService {
            shifts: shifts.clone(),
            employees: employees.clone(),
            shift_models: shift_models.clone(),
        }),
        setting_service: Arc::new(SettingService { settings }),
        system_service: Arc::new(SystemService {
            employees,
            shift_models,
            shifts,
        }),
        log_service: Arc::new(LogService::new(LogRepositoryImpl::new(config.log_dir.clone()))),
    }
}

pub struct EmployeeService {
    employees: Arc<EmployeeRepository>,
    shifts: Arc<ShiftRepository>,
}

impl EmployeeService {
    delegate_async_service! {
        fn list_employees(query: PaginationQuery) -> PaginatedResponse<EmployeeEntity> => employee_service::list_employees [employees];
        fn get_employee(id: String) -> EmployeeEntity => employee_service::get_employee [employees];
        fn create_employee(req: EmployeeUpsertRequest) -> EmployeeEntity => employee_service::create_employee [employees];
        fn update_employee(id: String, req: EmployeeUpsertRequest) -> EmployeeEntity => employee_service::update_employee [employees];
        fn delete_employee(id: String) -> Value => employee_service::delete_employee [employees, shifts];
    }
}

pub struct ShiftModelService {
    shift_models: Arc<ShiftModelRepository>,
}

impl ShiftModelService {
    delegate_async_service! {
        fn list_shift_models() -> Vec<ShiftModelEntity> => shift_model_service::list_shift_models [shift_models];
        fn get_shift_model(id: String) -> ShiftModelEntity => shift_model_service::get_shift_model [shift_models];
        fn create_shift_model(req: ShiftModelUpsertRequest) -> ShiftModelEntity => shift_model_service::create_shift_model [shift_models];
        fn update_shift_model(id: String, req: ShiftModelUpsertRequest) -> ShiftModelEntity => shift_model_service::update_shift_model [shift_models];
        fn delete_shift_model(id: String) -> Value => shift_model_service::delete_shift_model [shift_models];
    }
}

pub struct ShiftService {
    shifts: Arc<ShiftRepository>,
    employees: Arc<EmployeeRepository>,
    shift_models: Arc<ShiftModelRepository>,
}

impl ShiftService {
    delegate_async_service! {
        fn list_shifts(query: ShiftListQuery) -> Vec<ShiftEntity> => shift_service::list_shifts [shifts];
        fn get_shift(id: String) -> ShiftEntity => shift_service::get_shift [shifts];
        fn create_shift(req: ShiftUpsertRequest) -> ShiftEntity => shift_service::create_shift [shifts, employees, shift_models];
        fn update_shift(id: String, req: ShiftUpsertRequest) -> ShiftEntity => shift_service::update_shift [shifts, employees, shift_models];
        fn delete_shift(id: String) -> Value => shift_service::delete_shift [shifts];
        fn get_grouped_shifts(range: ShiftRangeQuery) -> Vec<DayShiftGroups> => shift_service::get_grouped_shifts [shifts, employees];
    }
}

pub struct SettingService {
    settings: Arc<SettingRepository>,
}

impl SettingService {
    delegate_async_service! {
        fn get_settings() -> SettingEntity => setting_service::get_settings [settings];
        fn upsert_settings(req: SettingUpsertRequest) -> Value => setting_service::upsert_settings [settings];
        fn reset_settings() -> Value => setting_service::reset_settings [settings];
    }
}

pub struct SystemService {
    employees: Arc<EmployeeRepository>,
    shift_models: Arc<ShiftModelRepository>,
    shifts: Arc<ShiftRepository>,
}

impl SystemService {
    delegate_async_service! {
        fn status() -> Value => status_service::status [employees, shift_models, shifts];
        fn health() -> Value => status_service::health [];
    }
}
