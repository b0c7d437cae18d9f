//! 教师考勤存储操作

use super::{SeaOrmStorage, db_error};
use crate::entity::teacher_attendance::{ActiveModel, Column, Entity as TeacherAttendanceEntity};
use crate::errors::{Result, SchoolAdminError};
use crate::models::{
    PaginatedResponse, PaginationInfo,
    attendance::{
        entities::TeacherAttendance,
        requests::{AttendanceListQuery, AttendanceRequest, NewAttendance},
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait, sea_query::OnConflict,
};

// 单条 INSERT 的行数上限，避免超出 SQLite 绑定参数限制
const IMPORT_CHUNK_SIZE: usize = 200;

fn to_active_model(record: NewAttendance, recorded_at: i64) -> ActiveModel {
    ActiveModel {
        teacher_id: Set(record.teacher_id),
        date: Set(record.date),
        status: Set(record.status.to_string()),
        remarks: Set(record.remarks),
        recorded_at: Set(recorded_at),
        ..Default::default()
    }
}

fn teacher_date_conflict() -> OnConflict {
    OnConflict::columns([Column::TeacherId, Column::Date])
        .update_columns([Column::Status, Column::Remarks, Column::RecordedAt])
        .to_owned()
}

impl SeaOrmStorage {
    /// 分页列出考勤，按日期倒序
    pub async fn list_attendance_with_pagination_impl(
        &self,
        query: AttendanceListQuery,
    ) -> Result<PaginatedResponse<TeacherAttendance>> {
        let page = query.page.max(1);
        let size = query.size.clamp(1, 100);

        let mut select = TeacherAttendanceEntity::find();

        if let Some(ref date) = query.date {
            select = select.filter(Column::Date.eq(date.as_str()));
        }
        if let Some(teacher_id) = query.teacher_id {
            select = select.filter(Column::TeacherId.eq(teacher_id));
        }
        if let Some(status) = query.status {
            select = select.filter(Column::Status.eq(status.to_string()));
        }

        select = select
            .order_by_desc(Column::Date)
            .order_by_asc(Column::TeacherId);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| db_error("查询考勤总数失败", e))?;

        let records = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| db_error("查询考勤列表失败", e))?;

        Ok(PaginatedResponse {
            items: records.into_iter().map(|m| m.into_attendance()).collect(),
            pagination: PaginationInfo::new(page as i64, size as i64, total as i64),
        })
    }

    async fn find_attendance<C: ConnectionTrait>(
        conn: &C,
        teacher_id: i64,
        date: &str,
    ) -> Result<Option<TeacherAttendance>> {
        let result = TeacherAttendanceEntity::find()
            .filter(Column::TeacherId.eq(teacher_id))
            .filter(Column::Date.eq(date))
            .one(conn)
            .await
            .map_err(|e| db_error("查询考勤失败", e))?;

        Ok(result.map(|m| m.into_attendance()))
    }

    /// 登记单条考勤，同一教师同一天已有记录时覆盖
    pub async fn upsert_attendance_impl(&self, record: NewAttendance) -> Result<TeacherAttendance> {
        let now = chrono::Utc::now().timestamp();
        let teacher_id = record.teacher_id;
        let date = record.date.clone();

        TeacherAttendanceEntity::insert(to_active_model(record, now))
            .on_conflict(teacher_date_conflict())
            .exec_without_returning(&self.db)
            .await
            .map_err(|e| db_error("登记考勤失败", e))?;

        Self::find_attendance(&self.db, teacher_id, &date)
            .await?
            .ok_or_else(|| SchoolAdminError::database_operation("登记考勤后未找到记录"))
    }

    pub async fn update_attendance_impl(
        &self,
        id: i64,
        req: AttendanceRequest,
    ) -> Result<Option<TeacherAttendance>> {
        let existing = TeacherAttendanceEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| db_error("查询考勤失败", e))?;
        if existing.is_none() {
            return Ok(None);
        }

        let model = ActiveModel {
            id: Set(id),
            teacher_id: Set(req.teacher_id),
            date: Set(req.date),
            status: Set(req.status.to_string()),
            remarks: Set(req.remarks),
            recorded_at: Set(chrono::Utc::now().timestamp()),
        };

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| db_error("更新考勤失败", e))?;

        Ok(Some(result.into_attendance()))
    }

    pub async fn delete_attendance_impl(&self, id: i64) -> Result<bool> {
        let result = TeacherAttendanceEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| db_error("删除考勤失败", e))?;

        Ok(result.rows_affected > 0)
    }

    /// 批量导入考勤，全部在一个事务中完成
    pub async fn import_attendance_impl(&self, records: Vec<NewAttendance>) -> Result<usize> {
        let total = records.len();
        if total == 0 {
            return Ok(0);
        }

        let now = chrono::Utc::now().timestamp();
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| db_error("开启事务失败", e))?;

        let mut models = records
            .into_iter()
            .map(|r| to_active_model(r, now))
            .collect::<Vec<_>>();

        while !models.is_empty() {
            let rest = models.split_off(models.len().min(IMPORT_CHUNK_SIZE));
            let chunk = std::mem::replace(&mut models, rest);
            // 出错时 txn 被丢弃，事务自动回滚
            TeacherAttendanceEntity::insert_many(chunk)
                .on_conflict(teacher_date_conflict())
                .exec_without_returning(&txn)
                .await
                .map_err(|e| db_error("导入考勤失败", e))?;
        }

        txn.commit()
            .await
            .map_err(|e| db_error("提交事务失败", e))?;

        Ok(total)
    }
}
