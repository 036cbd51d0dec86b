pub mod setting_upsert_request;
