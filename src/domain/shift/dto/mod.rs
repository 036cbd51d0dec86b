pub mod shift_upsert_request;
