//! 离线示例数据
//!
//! 后端不可达或返回 404 时，`GET` 请求按路径对应的资源返回这里登记的数据。
//! 数据按资源显式登记，不做 URL 子串匹配。

use serde_json::{Value, json};
use std::collections::HashMap;

/// 客户端可访问的资源
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    AcademicYears,
    Terms,
    Periods,
    GradeLevels,
    Subjects,
    Classrooms,
    Teachers,
    Exams,
    ExamResults,
    Notifications,
    FeeStructures,
    Attendance,
}

/// 从请求路径解析出的资源与记录 id
///
/// 考试成绩这类挂在上级记录下的资源，`parent` 为上级记录的 id。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourcePath {
    pub resource: Resource,
    pub id: Option<i64>,
    pub parent: Option<i64>,
}

impl Resource {
    pub const ALL: [Resource; 12] = [
        Resource::AcademicYears,
        Resource::Terms,
        Resource::Periods,
        Resource::GradeLevels,
        Resource::Subjects,
        Resource::Classrooms,
        Resource::Teachers,
        Resource::Exams,
        Resource::ExamResults,
        Resource::Notifications,
        Resource::FeeStructures,
        Resource::Attendance,
    ];

    /// `/api/v1/` 之后的路径段；考试成绩挂在考试下面，没有独立路径段
    pub fn segment(&self) -> &'static str {
        match self {
            Resource::AcademicYears => "academic-years",
            Resource::Terms => "terms",
            Resource::Periods => "periods",
            Resource::GradeLevels => "grade-levels",
            Resource::Subjects => "subjects",
            Resource::Classrooms => "classrooms",
            Resource::Teachers => "teachers",
            Resource::Exams | Resource::ExamResults => "exams",
            Resource::Notifications => "notifications",
            Resource::FeeStructures => "fee-structures",
            Resource::Attendance => "attendance",
        }
    }

    /// 列表接口是否返回分页结构 `{ items, pagination }`
    pub fn is_paginated(&self) -> bool {
        matches!(
            self,
            Resource::Teachers
                | Resource::Exams
                | Resource::Notifications
                | Resource::FeeStructures
                | Resource::Attendance
        )
    }

    /// 子资源记录中指向上级记录的字段
    pub fn parent_key(&self) -> Option<&'static str> {
        match self {
            Resource::ExamResults => Some("exam_id"),
            _ => None,
        }
    }

    fn from_segment(segment: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .filter(|r| *r != Resource::ExamResults)
            .find(|r| r.segment() == segment)
    }

    /// 解析 `/api/v1/<resource>[/<id>[/results]]`，忽略查询串
    pub fn parse_path(path: &str) -> Option<ResourcePath> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let rest = path.trim_start_matches('/').strip_prefix("api/v1/")?;
        let mut segments = rest.split('/').filter(|s| !s.is_empty());

        let resource = Self::from_segment(segments.next()?)?;
        let id = match segments.next() {
            Some(raw) => Some(raw.parse::<i64>().ok()?),
            None => None,
        };

        match (resource, segments.next(), segments.next()) {
            (_, None, _) => Some(ResourcePath {
                resource,
                id,
                parent: None,
            }),
            (Resource::Exams, Some("results"), None) if id.is_some() => Some(ResourcePath {
                resource: Resource::ExamResults,
                id: None,
                parent: id,
            }),
            _ => None,
        }
    }
}

/// 离线数据来源
pub trait FixtureSource: Send + Sync {
    /// 资源的列表数据，形状与对应列表接口的 `data` 相同
    fn fixture(&self, resource: Resource) -> Option<Value>;

    /// 按 id 在列表数据中查找单条记录
    fn fixture_item(&self, resource: Resource, id: i64) -> Option<Value> {
        let list = self.fixture(resource)?;
        fixture_items(&list)?
            .iter()
            .find(|item| item.get("id").and_then(Value::as_i64) == Some(id))
            .cloned()
    }

    /// 只保留属于 `parent_id` 的子资源记录，没有记录时返回空列表
    fn fixture_children(&self, resource: Resource, parent_id: i64) -> Option<Value> {
        let key = resource.parent_key()?;
        let list = self.fixture(resource)?;
        let children = fixture_items(&list)?
            .iter()
            .filter(|item| item.get(key).and_then(Value::as_i64) == Some(parent_id))
            .cloned()
            .collect();
        Some(Value::Array(children))
    }

    /// 按解析出的路径取数据
    fn fixture_for(&self, target: ResourcePath) -> Option<Value> {
        match (target.id, target.parent) {
            (Some(id), _) => self.fixture_item(target.resource, id),
            (None, Some(parent)) => self.fixture_children(target.resource, parent),
            (None, None) => self.fixture(target.resource),
        }
    }
}

// 列表数据可能是数组或分页结构
fn fixture_items(list: &Value) -> Option<&Vec<Value>> {
    match list {
        Value::Array(items) => Some(items),
        Value::Object(map) => map.get("items")?.as_array(),
        _ => None,
    }
}

/// 内存中的固定示例数据
#[derive(Debug, Clone, Default)]
pub struct StaticFixtures {
    entries: HashMap<Resource, Value>,
}

impl StaticFixtures {
    pub fn empty() -> Self {
        Self::default()
    }

    /// 替换某个资源的数据
    pub fn with(mut self, resource: Resource, data: Value) -> Self {
        self.entries.insert(resource, data);
        self
    }

    /// 内置示例数据，覆盖全部资源
    pub fn builtin() -> Self {
        let stamp = "2025-01-06T08:00:00Z";
        Self::empty()
            .with(
                Resource::AcademicYears,
                json!([
                    {
                        "id": 1, "name": "2025", "start_date": "2025-01-06",
                        "end_date": "2025-11-28", "is_current": true,
                        "created_at": stamp, "updated_at": stamp
                    }
                ]),
            )
            .with(
                Resource::Terms,
                json!([
                    {
                        "id": 1, "academic_year_id": 1, "name": "Term 1",
                        "start_date": "2025-01-06", "end_date": "2025-04-04",
                        "created_at": stamp, "updated_at": stamp
                    },
                    {
                        "id": 2, "academic_year_id": 1, "name": "Term 2",
                        "start_date": "2025-04-28", "end_date": "2025-08-01",
                        "created_at": stamp, "updated_at": stamp
                    }
                ]),
            )
            .with(
                Resource::Periods,
                json!([
                    {
                        "id": 1, "name": "Period 1", "start_time": "08:00", "end_time": "08:40",
                        "sort_order": 1, "is_break": false,
                        "created_at": stamp, "updated_at": stamp
                    },
                    {
                        "id": 2, "name": "Period 2", "start_time": "08:40", "end_time": "09:20",
                        "sort_order": 2, "is_break": false,
                        "created_at": stamp, "updated_at": stamp
                    },
                    {
                        "id": 3, "name": "Break", "start_time": "09:20", "end_time": "09:40",
                        "sort_order": 3, "is_break": true,
                        "created_at": stamp, "updated_at": stamp
                    }
                ]),
            )
            .with(
                Resource::GradeLevels,
                json!([
                    {
                        "id": 1, "name": "Grade 7", "level": 7, "description": null,
                        "created_at": stamp, "updated_at": stamp
                    },
                    {
                        "id": 2, "name": "Grade 8", "level": 8, "description": null,
                        "created_at": stamp, "updated_at": stamp
                    }
                ]),
            )
            .with(
                Resource::Subjects,
                json!([
                    {
                        "id": 1, "name": "Mathematics", "code": "MATH", "description": null,
                        "is_core": true, "is_elective": false,
                        "created_at": stamp, "updated_at": stamp
                    },
                    {
                        "id": 2, "name": "Music", "code": "MUS", "description": null,
                        "is_core": false, "is_elective": true,
                        "created_at": stamp, "updated_at": stamp
                    }
                ]),
            )
            .with(
                Resource::Classrooms,
                json!([
                    {
                        "id": 1, "name": "7 East", "grade_level_id": 1, "academic_year_id": 1,
                        "capacity": 40, "room_number": "B12", "class_teacher_id": 1,
                        "created_at": stamp, "updated_at": stamp
                    }
                ]),
            )
            .with(
                Resource::Teachers,
                paginated(json!([
                    {
                        "id": 1, "staff_number": "TSC/2291", "first_name": "Jane",
                        "last_name": "Otieno", "email": "j.otieno@school.ac.ke", "phone": null,
                        "created_at": stamp, "updated_at": stamp
                    },
                    {
                        "id": 2, "staff_number": "T-002", "first_name": "Peter",
                        "last_name": "Mwangi", "email": null, "phone": "+254700000002",
                        "created_at": stamp, "updated_at": stamp
                    }
                ])),
            )
            .with(
                Resource::Exams,
                paginated(json!([
                    {
                        "id": 1, "name": "Mid-term Mathematics", "exam_type": "midterm",
                        "subject_id": 1, "classroom_id": 1, "term_id": 1,
                        "exam_date": "2025-02-20", "start_time": "09:00", "end_time": "10:30",
                        "total_marks": 100.0, "passing_marks": 40.0,
                        "created_at": stamp, "updated_at": stamp
                    }
                ])),
            )
            .with(
                Resource::ExamResults,
                json!([
                    {
                        "id": 1, "exam_id": 1, "student_number": "S-1001",
                        "student_name": "Amina Hassan", "marks_obtained": 78.0,
                        "remarks": null, "status": "approved", "recorded_at": stamp
                    }
                ]),
            )
            .with(
                Resource::Notifications,
                paginated(json!([
                    {
                        "id": 1, "title": "Staff meeting",
                        "message": "Staff meeting on Friday at 15:00 in the library.",
                        "audience": "teachers", "priority": "normal", "published": true,
                        "created_by": null, "created_at": stamp, "updated_at": stamp
                    }
                ])),
            )
            .with(
                Resource::FeeStructures,
                paginated(json!([
                    {
                        "id": 1, "name": "Grade 7 Term 1", "classroom_id": null, "term_id": 1,
                        "academic_year_id": 1, "tuition_fee": 1500.0, "exam_fee": 200.0,
                        "lab_fee": 150.0, "library_fee": 100.0, "sports_fee": 100.0,
                        "transportation_fee": 0.0, "other_fees": 100.0, "total_amount": 2150.0,
                        "due_date": "2025-01-31", "created_at": stamp, "updated_at": stamp
                    }
                ])),
            )
            .with(
                Resource::Attendance,
                paginated(json!([
                    {
                        "id": 1, "teacher_id": 1, "date": "2025-01-06", "status": "PRESENT",
                        "remarks": null, "recorded_at": stamp
                    },
                    {
                        "id": 2, "teacher_id": 2, "date": "2025-01-06", "status": "LATE",
                        "remarks": "Matatu delay", "recorded_at": stamp
                    }
                ])),
            )
    }
}

impl FixtureSource for StaticFixtures {
    fn fixture(&self, resource: Resource) -> Option<Value> {
        self.entries.get(&resource).cloned()
    }
}

// 包装为单页的分页结构
fn paginated(items: Value) -> Value {
    let total = items.as_array().map_or(0, Vec::len);
    json!({
        "items": items,
        "pagination": {
            "page": 1,
            "page_size": total.max(1),
            "total": total,
            "total_pages": 1
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PaginatedResponse;
    use crate::models::exam_results::entities::ExamResult;
    use crate::models::fee_structures::entities::{FeeComponents, FeeStructure};
    use crate::models::periods::entities::Period;

    #[test]
    fn test_parse_path() {
        assert_eq!(
            Resource::parse_path("/api/v1/periods"),
            Some(ResourcePath {
                resource: Resource::Periods,
                id: None,
                parent: None,
            })
        );
        assert_eq!(
            Resource::parse_path("/api/v1/fee-structures/3?page=1"),
            Some(ResourcePath {
                resource: Resource::FeeStructures,
                id: Some(3),
                parent: None,
            })
        );
        assert_eq!(
            Resource::parse_path("/api/v1/exams/2/results"),
            Some(ResourcePath {
                resource: Resource::ExamResults,
                id: None,
                parent: Some(2),
            })
        );
        assert_eq!(Resource::parse_path("/api/v1/exams/results"), None);
        assert_eq!(Resource::parse_path("/api/v1/unknown"), None);
        assert_eq!(Resource::parse_path("/api/v1/terms/abc"), None);
        assert_eq!(Resource::parse_path("/health"), None);
    }

    #[test]
    fn test_every_resource_has_builtin_data() {
        let fixtures = StaticFixtures::builtin();
        for resource in Resource::ALL {
            let data = fixtures.fixture(resource);
            assert!(data.is_some(), "missing fixture for {resource:?}");
            let data = data.unwrap();
            assert_eq!(data.is_object(), resource.is_paginated(), "{resource:?}");
        }
    }

    #[test]
    fn test_builtin_data_matches_models() {
        let fixtures = StaticFixtures::builtin();

        let periods: Vec<Period> =
            serde_json::from_value(fixtures.fixture(Resource::Periods).unwrap()).unwrap();
        assert_eq!(periods.len(), 3);

        let fees: PaginatedResponse<FeeStructure> =
            serde_json::from_value(fixtures.fixture(Resource::FeeStructures).unwrap()).unwrap();
        assert_eq!(fees.items[0].total_amount(), 2150.0);
        assert_eq!(fees.items[0].total_amount, 2150.0);

        let results: Vec<ExamResult> =
            serde_json::from_value(fixtures.fixture(Resource::ExamResults).unwrap()).unwrap();
        assert_eq!(results[0].student_number, "S-1001");
    }

    #[test]
    fn test_fixture_item_lookup() {
        let fixtures = StaticFixtures::builtin();
        let teacher = fixtures.fixture_item(Resource::Teachers, 2).unwrap();
        assert_eq!(teacher["staff_number"], "T-002");
        assert!(fixtures.fixture_item(Resource::Teachers, 99).is_none());
        assert!(StaticFixtures::empty().fixture_item(Resource::Teachers, 1).is_none());
    }

    #[test]
    fn test_exam_results_are_scoped_to_their_exam() {
        let fixtures = StaticFixtures::builtin();

        let first = Resource::parse_path("/api/v1/exams/1/results").unwrap();
        let results = fixtures.fixture_for(first).unwrap();
        assert_eq!(results.as_array().unwrap().len(), 1);
        assert_eq!(results[0]["student_number"], "S-1001");

        let second = Resource::parse_path("/api/v1/exams/2/results").unwrap();
        assert_eq!(fixtures.fixture_for(second), Some(json!([])));
    }
}
