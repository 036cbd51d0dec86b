pub mod shift_model_upsert_request;
