use crate::api::dto::system_dto::PaginatedLogResponse;
use crate::core::persistence::logs::log_repository::LogRepository;

pub struct LogService<R: LogRepository> {
    repo: R,
}

impl<R: LogRepository> LogService<R> {
    pub const DEFAULT_LIMIT: usize = 200;
    pub const MAX_LIMIT: usize = 1000;

    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub async fn get_system_log_file_list(&self) -> anyhow::Result<Vec<String>> {
        self.repo.get_logs()
    }

    pub async fn get_system_log_lines(
        &self,
        date: &str,
        cursor: Option<usize>,
        limit: Option<usize>,
    ) -> anyhow::Result<PaginatedLogResponse> {
        let cursor = cursor.unwrap_or(0);
        let limit = limit.unwrap_or(Self::DEFAULT_LIMIT).clamp(1, Self::MAX_LIMIT);

        let (lines, has_more) = self.repo.get_log_lines(date, cursor, limit)?;
        let next_cursor = has_more.then_some(cursor + lines.len());

        Ok(PaginatedLogResponse {
            date: date.to_string(),
            lines,
            next_cursor,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedLog(Vec<String>);

    impl LogRepository for FixedLog {
        fn get_logs(&self) -> anyhow::Result<Vec<String>> {
            Ok(vec!["shiftdesk.log.2026-10-19".into()])
        }

        fn get_log_lines(
            &self,
            _date: &str,
            cursor: usize,
            limit: usize,
        ) -> anyhow::Result<(Vec<String>, bool)> {
            let page: Vec<String> = self.0.iter().skip(cursor).take(limit).cloned().collect();
            Ok((page, cursor + limit < self.0.len()))
        }
    }

    #[tokio::test]
    async fn next_cursor_points_past_returned_lines() {
        let service = LogService::new(FixedLog((0..5).map(|i| i.to_string()).collect()));

        let page = service
            .get_system_log_lines("2026-10-19", Some(1), Some(3))
            .await
            .unwrap();
        assert_eq!(page.lines, vec!["1", "2", "3"]);
        assert_eq!(page.next_cursor, Some(4));

        let last = service
            .get_system_log_lines("2026-10-19", Some(4), Some(3))
            .await
            .unwrap();
        assert_eq!(last.next_cursor, None);
    }

    #[tokio::test]
    async fn zero_limit_is_raised_to_one() {
        let service = LogService::new(FixedLog(vec!["a".into(), "b".into()]));

        let page = service.get_system_log_lines("2026-10-19", None, Some(0)).await.unwrap();
        assert_eq!(page.lines, vec!["a"]);
    }
}
