//! 待提交的考试成绩
//!
//! 录入的成绩先进入本地队列，由教务人员审核后统一提交。队列保存在本地状态文件的
//! 一个键下，整体读写。

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

use super::api::{ApiClient, DataSource};
use super::local_store::LocalStore;
use crate::errors::Result;
use crate::models::exam_results::requests::ExamResultRequest;

const QUEUE_KEY: &str = "pending_exam_results";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PendingResult {
    pub exam_id: i64,
    pub result: ExamResultRequest,
    pub queued_at: chrono::DateTime<chrono::Utc>,
}

/// 一次批量提交的结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitSummary {
    pub submitted: usize,
    pub failed: usize,
}

pub struct PendingResultQueue {
    store: Arc<LocalStore>,
}

impl PendingResultQueue {
    pub fn new(store: Arc<LocalStore>) -> Self {
        Self { store }
    }

    pub fn list(&self) -> Result<Vec<PendingResult>> {
        Ok(self.store.get(QUEUE_KEY)?.unwrap_or_default())
    }

    /// 加入队列；同一考试同一学号的草稿被替换。返回队列长度
    pub fn enqueue(&self, exam_id: i64, result: ExamResultRequest) -> Result<usize> {
        let mut queue = self.list()?;
        queue.retain(|p| {
            !(p.exam_id == exam_id && p.result.student_number == result.student_number)
        });
        queue.push(PendingResult {
            exam_id,
            result,
            queued_at: chrono::Utc::now(),
        });
        self.write(&queue)?;
        Ok(queue.len())
    }

    /// 按下标移除一条草稿
    pub fn remove(&self, index: usize) -> Result<Option<PendingResult>> {
        let mut queue = self.list()?;
        if index >= queue.len() {
            return Ok(None);
        }
        let removed = queue.remove(index);
        self.write(&queue)?;
        Ok(Some(removed))
    }

    pub fn clear(&self) -> Result<()> {
        self.store.remove(QUEUE_KEY)
    }

    /// 逐条提交，提交失败的草稿写回队列
    ///
    /// 后端不可达时写操作只是被模拟，这类草稿同样保留在队列中。
    pub async fn submit_all(&self, api: &ApiClient) -> Result<SubmitSummary> {
        let queue = self.list()?;
        let mut remaining = Vec::new();
        let mut summary = SubmitSummary::default();

        for pending in queue {
            let path = format!("/api/v1/exams/{}/results", pending.exam_id);
            match api.post(&path, &pending.result).await {
                Ok(response) if response.source == DataSource::Remote && response.is_success() => {
                    summary.submitted += 1;
                }
                Ok(response) => {
                    warn!(
                        "Result for {} on exam {} not accepted: {}",
                        pending.result.student_number,
                        pending.exam_id,
                        response.message()
                    );
                    summary.failed += 1;
                    remaining.push(pending);
                }
                Err(e) => {
                    warn!(
                        "Result for {} on exam {} failed: {}",
                        pending.result.student_number, pending.exam_id, e
                    );
                    summary.failed += 1;
                    remaining.push(pending);
                }
            }
        }

        self.write(&remaining)?;
        info!(
            "Submitted {} pending result(s), {} kept in queue",
            summary.submitted, summary.failed
        );
        Ok(summary)
    }

    fn write(&self, queue: &[PendingResult]) -> Result<()> {
        if queue.is_empty() {
            self.store.remove(QUEUE_KEY)
        } else {
            self.store.set(QUEUE_KEY, &queue)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{CredentialStore, StaticFixtures};
    use crate::models::exam_results::entities::ResultStatus;
    use std::time::Duration;

    fn temp_store(name: &str) -> Arc<LocalStore> {
        let path = std::env::temp_dir().join(format!(
            "school_admin_pending_{}_{}.json",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);
        Arc::new(LocalStore::new(path))
    }

    fn draft(student: &str, marks: f64) -> ExamResultRequest {
        ExamResultRequest {
            student_number: student.to_string(),
            student_name: format!("Student {student}"),
            marks_obtained: marks,
            remarks: None,
            status: ResultStatus::Pending,
        }
    }

    #[test]
    fn test_enqueue_list_remove() {
        let queue = PendingResultQueue::new(temp_store("basic"));
        assert!(queue.list().unwrap().is_empty());

        assert_eq!(queue.enqueue(1, draft("S-1", 50.0)).unwrap(), 1);
        assert_eq!(queue.enqueue(1, draft("S-2", 60.0)).unwrap(), 2);
        // 同一学号替换旧草稿
        assert_eq!(queue.enqueue(1, draft("S-1", 55.0)).unwrap(), 2);

        let items = queue.list().unwrap();
        assert_eq!(items[1].result.marks_obtained, 55.0);

        let removed = queue.remove(0).unwrap().unwrap();
        assert_eq!(removed.result.student_number, "S-2");
        assert!(queue.remove(5).unwrap().is_none());
        assert_eq!(queue.list().unwrap().len(), 1);

        queue.clear().unwrap();
        assert!(queue.list().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_submit_offline_keeps_queue() {
        let store = temp_store("offline");
        let queue = PendingResultQueue::new(store.clone());
        queue.enqueue(1, draft("S-1", 70.0)).unwrap();
        queue.enqueue(2, draft("S-9", 35.0)).unwrap();

        let api = ApiClient::new(
            "http://127.0.0.1:1",
            Duration::from_secs(2),
            CredentialStore::new(store),
            Arc::new(StaticFixtures::builtin()),
        )
        .unwrap();

        let summary = queue.submit_all(&api).await.unwrap();
        assert_eq!(
            summary,
            SubmitSummary {
                submitted: 0,
                failed: 2
            }
        );
        assert_eq!(queue.list().unwrap().len(), 2);
    }
}
