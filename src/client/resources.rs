//! 按实体划分的类型化客户端
//!
//! 写操作被模拟时（后端不可达），客户端根据表单在本地构造记录：
//! id 为负数，派生字段（如收费总额）在本地计算。

use chrono::Utc;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::marker::PhantomData;
use std::sync::atomic::{AtomicI64, Ordering};

use super::api::{ApiClient, DataSource};
use super::fixtures::Resource;
use crate::errors::{Result, SchoolAdminError};
use crate::models::academic_years::{entities::AcademicYear, requests::AcademicYearRequest};
use crate::models::attendance::{entities::TeacherAttendance, requests::AttendanceRequest};
use crate::models::classrooms::{entities::Classroom, requests::ClassroomRequest};
use crate::models::exams::{entities::Exam, requests::ExamRequest};
use crate::models::fee_structures::{
    entities::{FeeComponents, FeeStructure},
    requests::FeeStructureRequest,
};
use crate::models::grade_levels::{entities::GradeLevel, requests::GradeLevelRequest};
use crate::models::notifications::{entities::Notification, requests::NotificationRequest};
use crate::models::periods::{entities::Period, requests::PeriodRequest};
use crate::models::subjects::{entities::Subject, requests::SubjectRequest};
use crate::models::teachers::{entities::Teacher, requests::TeacherRequest};
use crate::models::terms::{entities::Term, requests::TermRequest};

// 本地构造的记录使用递减的负数 id，不会与后端 id 冲突
static NEXT_LOCAL_ID: AtomicI64 = AtomicI64::new(-1);

pub fn next_local_id() -> i64 {
    NEXT_LOCAL_ID.fetch_sub(1, Ordering::Relaxed)
}

/// 客户端可增删改查的实体
pub trait ClientResource {
    type Record: DeserializeOwned + Clone;
    type Form: Serialize;

    const RESOURCE: Resource;

    /// 写操作被模拟时，根据表单构造本地记录
    fn build_local(id: i64, form: &Self::Form) -> Self::Record;
}

/// 带数据来源的结果
#[derive(Debug, Clone)]
pub struct Fetched<T> {
    pub source: DataSource,
    pub data: T,
}

pub struct ResourceClient<'a, R: ClientResource> {
    api: &'a ApiClient,
    _resource: PhantomData<R>,
}

impl<'a, R: ClientResource> ResourceClient<'a, R> {
    pub fn new(api: &'a ApiClient) -> Self {
        Self {
            api,
            _resource: PhantomData,
        }
    }

    fn collection_path() -> String {
        format!("/api/v1/{}", R::RESOURCE.segment())
    }

    fn item_path(id: i64) -> String {
        format!("/api/v1/{}/{}", R::RESOURCE.segment(), id)
    }

    pub async fn list(&self) -> Result<Fetched<Vec<R::Record>>> {
        self.list_path(&Self::collection_path()).await
    }

    /// 带查询串的列表，例如 `academic_year_id=1`
    pub async fn list_with_query(&self, query: &str) -> Result<Fetched<Vec<R::Record>>> {
        self.list_path(&format!("{}?{}", Self::collection_path(), query))
            .await
    }

    async fn list_path(&self, path: &str) -> Result<Fetched<Vec<R::Record>>> {
        let response = self.api.get(path).await?;
        let source = response.source;
        let data: Option<Value> = response.into_data()?;
        Ok(Fetched {
            source,
            data: list_items(data)?,
        })
    }

    pub async fn get(&self, id: i64) -> Result<Fetched<R::Record>> {
        let response = self.api.get(&Self::item_path(id)).await?;
        let source = response.source;
        let record = response.into_data()?.ok_or_else(|| {
            SchoolAdminError::not_found(format!("{} {} not found", R::RESOURCE.segment(), id))
        })?;
        Ok(Fetched {
            source,
            data: record,
        })
    }

    pub async fn create(&self, form: &R::Form) -> Result<Fetched<R::Record>> {
        let response = self.api.post(&Self::collection_path(), form).await?;
        if response.is_simulated() {
            return Ok(Fetched {
                source: DataSource::Fixture,
                data: R::build_local(next_local_id(), form),
            });
        }
        self.remote_record(response.into_data()?)
    }

    pub async fn update(&self, id: i64, form: &R::Form) -> Result<Fetched<R::Record>> {
        let response = self.api.put(&Self::item_path(id), form).await?;
        if response.is_simulated() {
            return Ok(Fetched {
                source: DataSource::Fixture,
                data: R::build_local(id, form),
            });
        }
        self.remote_record(response.into_data()?)
    }

    pub async fn delete(&self, id: i64) -> Result<DataSource> {
        let response = self.api.delete(&Self::item_path(id)).await?;
        let source = response.source;
        response.into_data::<Value>()?;
        Ok(source)
    }

    fn remote_record(&self, record: Option<R::Record>) -> Result<Fetched<R::Record>> {
        let data = record.ok_or_else(|| {
            SchoolAdminError::remote_api(format!(
                "{} response did not include the saved record",
                R::RESOURCE.segment()
            ))
        })?;
        Ok(Fetched {
            source: DataSource::Remote,
            data,
        })
    }
}

// 列表接口的 data 可能是数组，也可能是分页结构
fn list_items<T: DeserializeOwned>(data: Option<Value>) -> Result<Vec<T>> {
    match data {
        None => Ok(Vec::new()),
        Some(Value::Object(mut map)) => match map.remove("items") {
            Some(items) => Ok(serde_json::from_value(items)?),
            None => Err(SchoolAdminError::serialization(
                "List response is neither an array nor a page",
            )),
        },
        Some(other) => Ok(serde_json::from_value(other)?),
    }
}

pub struct AcademicYears;
pub struct Terms;
pub struct Periods;
pub struct GradeLevels;
pub struct Subjects;
pub struct Classrooms;
pub struct Teachers;
pub struct Exams;
pub struct Notifications;
pub struct FeeStructures;
pub struct AttendanceRecords;

impl ClientResource for AcademicYears {
    type Record = AcademicYear;
    type Form = AcademicYearRequest;
    const RESOURCE: Resource = Resource::AcademicYears;

    fn build_local(id: i64, form: &Self::Form) -> Self::Record {
        let now = Utc::now();
        AcademicYear {
            id,
            name: form.name.clone(),
            start_date: form.start_date.clone(),
            end_date: form.end_date.clone(),
            is_current: form.is_current,
            created_at: now,
            updated_at: now,
        }
    }
}

impl ClientResource for Terms {
    type Record = Term;
    type Form = TermRequest;
    const RESOURCE: Resource = Resource::Terms;

    fn build_local(id: i64, form: &Self::Form) -> Self::Record {
        let now = Utc::now();
        Term {
            id,
            academic_year_id: form.academic_year_id,
            name: form.name.clone(),
            start_date: form.start_date.clone(),
            end_date: form.end_date.clone(),
            created_at: now,
            updated_at: now,
        }
    }
}

impl ClientResource for Periods {
    type Record = Period;
    type Form = PeriodRequest;
    const RESOURCE: Resource = Resource::Periods;

    fn build_local(id: i64, form: &Self::Form) -> Self::Record {
        let now = Utc::now();
        Period {
            id,
            name: form.name.clone(),
            start_time: form.start_time.clone(),
            end_time: form.end_time.clone(),
            sort_order: form.sort_order,
            is_break: form.is_break,
            created_at: now,
            updated_at: now,
        }
    }
}

impl ClientResource for GradeLevels {
    type Record = GradeLevel;
    type Form = GradeLevelRequest;
    const RESOURCE: Resource = Resource::GradeLevels;

    fn build_local(id: i64, form: &Self::Form) -> Self::Record {
        let now = Utc::now();
        GradeLevel {
            id,
            name: form.name.clone(),
            level: form.level,
            description: form.description.clone(),
            created_at: now,
            updated_at: now,
        }
    }
}

impl ClientResource for Subjects {
    type Record = Subject;
    type Form = SubjectRequest;
    const RESOURCE: Resource = Resource::Subjects;

    fn build_local(id: i64, form: &Self::Form) -> Self::Record {
        let now = Utc::now();
        Subject {
            id,
            name: form.name.clone(),
            code: form.code.clone(),
            description: form.description.clone(),
            is_core: form.is_core,
            is_elective: form.is_elective,
            created_at: now,
            updated_at: now,
        }
    }
}

impl ClientResource for Classrooms {
    type Record = Classroom;
    type Form = ClassroomRequest;
    const RESOURCE: Resource = Resource::Classrooms;

    fn build_local(id: i64, form: &Self::Form) -> Self::Record {
        let now = Utc::now();
        Classroom {
            id,
            name: form.name.clone(),
            grade_level_id: form.grade_level_id,
            academic_year_id: form.academic_year_id,
            capacity: form.capacity,
            room_number: form.room_number.clone(),
            class_teacher_id: form.class_teacher_id,
            created_at: now,
            updated_at: now,
        }
    }
}

impl ClientResource for Teachers {
    type Record = Teacher;
    type Form = TeacherRequest;
    const RESOURCE: Resource = Resource::Teachers;

    fn build_local(id: i64, form: &Self::Form) -> Self::Record {
        let now = Utc::now();
        Teacher {
            id,
            staff_number: form.staff_number.clone(),
            first_name: form.first_name.clone(),
            last_name: form.last_name.clone(),
            email: form.email.clone(),
            phone: form.phone.clone(),
            created_at: now,
            updated_at: now,
        }
    }
}

impl ClientResource for Exams {
    type Record = Exam;
    type Form = ExamRequest;
    const RESOURCE: Resource = Resource::Exams;

    fn build_local(id: i64, form: &Self::Form) -> Self::Record {
        let now = Utc::now();
        Exam {
            id,
            name: form.name.clone(),
            exam_type: form.exam_type,
            subject_id: form.subject_id,
            classroom_id: form.classroom_id,
            term_id: form.term_id,
            exam_date: form.exam_date.clone(),
            start_time: form.start_time.clone(),
            end_time: form.end_time.clone(),
            total_marks: form.total_marks,
            passing_marks: form.passing_marks,
            created_at: now,
            updated_at: now,
        }
    }
}

impl ClientResource for Notifications {
    type Record = Notification;
    type Form = NotificationRequest;
    const RESOURCE: Resource = Resource::Notifications;

    fn build_local(id: i64, form: &Self::Form) -> Self::Record {
        let now = Utc::now();
        Notification {
            id,
            title: form.title.clone(),
            message: form.message.clone(),
            audience: form.audience,
            priority: form.priority,
            published: form.published,
            created_by: None,
            created_at: now,
            updated_at: now,
        }
    }
}

impl ClientResource for FeeStructures {
    type Record = FeeStructure;
    type Form = FeeStructureRequest;
    const RESOURCE: Resource = Resource::FeeStructures;

    fn build_local(id: i64, form: &Self::Form) -> Self::Record {
        let now = Utc::now();
        FeeStructure {
            id,
            name: form.name.clone(),
            classroom_id: form.classroom_id,
            term_id: form.term_id,
            academic_year_id: form.academic_year_id,
            tuition_fee: form.tuition_fee,
            exam_fee: form.exam_fee,
            lab_fee: form.lab_fee,
            library_fee: form.library_fee,
            sports_fee: form.sports_fee,
            transportation_fee: form.transportation_fee,
            other_fees: form.other_fees,
            total_amount: form.total_amount(),
            due_date: form.due_date.clone(),
            created_at: now,
            updated_at: now,
        }
    }
}

impl ClientResource for AttendanceRecords {
    type Record = TeacherAttendance;
    type Form = AttendanceRequest;
    const RESOURCE: Resource = Resource::Attendance;

    fn build_local(id: i64, form: &Self::Form) -> Self::Record {
        TeacherAttendance {
            id,
            teacher_id: form.teacher_id,
            date: form.date.clone(),
            status: form.status,
            remarks: form.remarks.clone(),
            recorded_at: Utc::now(),
        }
    }
}

impl ApiClient {
    /// 某个实体的类型化客户端
    pub fn resource<R: ClientResource>(&self) -> ResourceClient<'_, R> {
        ResourceClient::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{CredentialStore, LocalStore, StaticFixtures};
    use std::sync::Arc;
    use std::time::Duration;

    fn offline_client(name: &str) -> ApiClient {
        let path = std::env::temp_dir().join(format!(
            "school_admin_resources_{}_{}.json",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);
        ApiClient::new(
            "http://127.0.0.1:1",
            Duration::from_secs(2),
            CredentialStore::new(Arc::new(LocalStore::new(path))),
            Arc::new(StaticFixtures::builtin()),
        )
        .unwrap()
    }

    fn fee_form() -> FeeStructureRequest {
        FeeStructureRequest {
            name: "Grade 8 Term 2".to_string(),
            classroom_id: None,
            term_id: Some(2),
            academic_year_id: 1,
            tuition_fee: 1500.0,
            exam_fee: 200.0,
            lab_fee: 150.0,
            library_fee: 100.0,
            sports_fee: 100.0,
            transportation_fee: 0.0,
            other_fees: 100.0,
            due_date: "2025-05-15".to_string(),
        }
    }

    #[test]
    fn test_local_ids_are_negative_and_unique() {
        let a = next_local_id();
        let b = next_local_id();
        assert!(a < 0 && b < 0);
        assert_ne!(a, b);
    }

    #[test]
    fn test_list_items_accepts_both_shapes() {
        let plain: Vec<i64> = list_items(Some(serde_json::json!([1, 2]))).unwrap();
        assert_eq!(plain, vec![1, 2]);

        let paged: Vec<i64> = list_items(Some(serde_json::json!({
            "items": [3],
            "pagination": {"page": 1, "page_size": 10, "total": 1, "total_pages": 1}
        })))
        .unwrap();
        assert_eq!(paged, vec![3]);

        let empty: Vec<i64> = list_items(None).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_local_fee_structure_derives_total() {
        let record = FeeStructures::build_local(-7, &fee_form());
        assert_eq!(record.id, -7);
        assert_eq!(record.total_amount, 2150.0);
    }

    #[tokio::test]
    async fn test_offline_create_builds_local_record() {
        let client = offline_client("create");
        let created = client
            .resource::<FeeStructures>()
            .create(&fee_form())
            .await
            .unwrap();
        assert_eq!(created.source, DataSource::Fixture);
        assert!(created.data.id < 0);
        assert_eq!(created.data.total_amount, 2150.0);
    }

    #[tokio::test]
    async fn test_offline_list_and_update() {
        let client = offline_client("list");
        let teachers = client.resource::<Teachers>().list().await.unwrap();
        assert_eq!(teachers.source, DataSource::Fixture);
        assert_eq!(teachers.data.len(), 2);

        let form = TeacherRequest {
            staff_number: "T-002".to_string(),
            first_name: "Peter".to_string(),
            last_name: "Kamau".to_string(),
            email: None,
            phone: None,
        };
        let updated = client
            .resource::<Teachers>()
            .update(2, &form)
            .await
            .unwrap();
        assert_eq!(updated.data.id, 2);
        assert_eq!(updated.data.last_name, "Kamau");

        let source = client.resource::<Teachers>().delete(2).await.unwrap();
        assert_eq!(source, DataSource::Fixture);
    }
}
