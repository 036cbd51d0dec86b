pub mod employee_upsert_request;
