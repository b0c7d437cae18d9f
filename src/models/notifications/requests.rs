use super::entities::{Audience, Priority};
use crate::models::common::PaginationQuery;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/notification.ts")]
pub struct NotificationRequest {
    pub title: String,
    pub message: String,
    pub audience: Audience,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub published: bool,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/notification.ts")]
pub struct NotificationQueryParams {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub audience: Option<Audience>,
    pub published: Option<bool>,
}

impl NotificationQueryParams {
    pub fn pagination(&self) -> PaginationQuery {
        PaginationQuery::from_parts(self.page, self.size)
    }
}

// 通知列表查询参数（用于存储层）
#[derive(Debug, Clone, Default)]
pub struct NotificationListQuery {
    pub page: u64,
    pub size: u64,
    pub audience: Option<Audience>,
    pub published: Option<bool>,
}
