//! 通知存储操作

use super::{SeaOrmStorage, db_error};
use crate::entity::notifications::{ActiveModel, Column, Entity as Notifications};
use crate::errors::Result;
use crate::models::{
    PaginatedResponse, PaginationInfo,
    notifications::{
        entities::Notification,
        requests::{NotificationListQuery, NotificationRequest},
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    pub async fn list_notifications_with_pagination_impl(
        &self,
        query: NotificationListQuery,
    ) -> Result<PaginatedResponse<Notification>> {
        let page = query.page.max(1);
        let size = query.size.clamp(1, 100);

        let mut select = Notifications::find();

        if let Some(audience) = query.audience {
            select = select.filter(Column::Audience.eq(audience.to_string()));
        }
        if let Some(published) = query.published {
            select = select.filter(Column::Published.eq(published));
        }

        select = select.order_by_desc(Column::CreatedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| db_error("查询通知总数失败", e))?;

        let notifications = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| db_error("查询通知列表失败", e))?;

        Ok(PaginatedResponse {
            items: notifications
                .into_iter()
                .map(|m| m.into_notification())
                .collect(),
            pagination: PaginationInfo::new(page as i64, size as i64, total as i64),
        })
    }

    pub async fn get_notification_impl(&self, id: i64) -> Result<Option<Notification>> {
        let result = Notifications::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| db_error("查询通知失败", e))?;

        Ok(result.map(|m| m.into_notification()))
    }

    pub async fn create_notification_impl(
        &self,
        req: NotificationRequest,
        created_by: Option<i64>,
    ) -> Result<Notification> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            title: Set(req.title.trim().to_string()),
            message: Set(req.message.trim().to_string()),
            audience: Set(req.audience.to_string()),
            priority: Set(req.priority.to_string()),
            published: Set(req.published),
            created_by: Set(created_by),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| db_error("创建通知失败", e))?;

        Ok(result.into_notification())
    }

    pub async fn update_notification_impl(
        &self,
        id: i64,
        req: NotificationRequest,
    ) -> Result<Option<Notification>> {
        if self.get_notification_impl(id).await?.is_none() {
            return Ok(None);
        }

        let model = ActiveModel {
            id: Set(id),
            title: Set(req.title.trim().to_string()),
            message: Set(req.message.trim().to_string()),
            audience: Set(req.audience.to_string()),
            priority: Set(req.priority.to_string()),
            published: Set(req.published),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| db_error("更新通知失败", e))?;

        Ok(Some(result.into_notification()))
    }

    pub async fn delete_notification_impl(&self, id: i64) -> Result<bool> {
        let result = Notifications::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| db_error("删除通知失败", e))?;

        Ok(result.rows_affected > 0)
    }
}
