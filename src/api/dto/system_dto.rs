//! System API DTOs
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Debug, Default)]
pub struct LogQuery {
    pub cursor: Option<usize>,
    pub limit: Option<usize>,
}

#[derive(Serialize, Debug)]
pub struct PaginatedLogResponse {
    pub date: String,
    pub lines: Vec<String>,
    pub next_cursor: Option<usize>,
}
