mod common;

use actix_web::{App, HttpServer};
use std::sync::Arc;
use std::time::Duration;

use school_admin::client::resources::{
    AcademicYears, Classrooms, Exams, GradeLevels, Periods, Subjects, Terms,
};
use school_admin::client::{
    ApiClient, CredentialStore, DataSource, LocalStore, PendingResultQueue, StaticFixtures,
};
use school_admin::models::academic_years::requests::AcademicYearRequest;
use school_admin::models::classrooms::requests::ClassroomRequest;
use school_admin::models::exam_results::entities::ResultStatus;
use school_admin::models::exam_results::requests::ExamResultRequest;
use school_admin::models::exams::entities::ExamType;
use school_admin::models::exams::requests::ExamRequest;
use school_admin::models::grade_levels::requests::GradeLevelRequest;
use school_admin::models::periods::requests::PeriodRequest;
use school_admin::models::subjects::requests::SubjectRequest;
use school_admin::models::terms::requests::TermRequest;

struct LiveServer {
    base_url: String,
    handle: actix_web::dev::ServerHandle,
}

async fn start_server() -> LiveServer {
    let storage = common::test_storage().await;
    common::seed_accounts(&storage).await;

    let server = HttpServer::new(move || {
        App::new().configure(common::configure_app(storage.clone()))
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .expect("bind test server");
    let addr = server.addrs()[0];
    let server = server.run();
    let handle = server.handle();
    actix_web::rt::spawn(server);

    LiveServer {
        base_url: format!("http://{addr}"),
        handle,
    }
}

fn client_for(server: &LiveServer, name: &str) -> (ApiClient, Arc<LocalStore>) {
    let path = std::env::temp_dir().join(format!(
        "school_admin_live_{}_{}.json",
        name,
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);
    let store = Arc::new(LocalStore::new(path));
    let client = ApiClient::new(
        &server.base_url,
        Duration::from_secs(5),
        CredentialStore::new(store.clone()),
        Arc::new(StaticFixtures::builtin()),
    )
    .expect("client");
    (client, store)
}

fn period(name: &str, start: &str, end: &str) -> PeriodRequest {
    PeriodRequest {
        name: name.to_string(),
        start_time: start.to_string(),
        end_time: end.to_string(),
        sort_order: 0,
        is_break: false,
    }
}

#[actix_web::test]
async fn test_client_reads_and_writes_remote() {
    let server = start_server().await;
    let (client, _store) = client_for(&server, "remote");

    client
        .login(common::ADMIN_USERNAME, common::PASSWORD)
        .await
        .expect("login");
    assert!(client.credentials().is_signed_in());

    let periods = client.resource::<Periods>();
    let created = periods
        .create(&period("Period 1", "08:00", "08:40"))
        .await
        .expect("create period");
    assert_eq!(created.source, DataSource::Remote);
    assert!(created.data.id > 0);

    // 后端的字段校验错误直接返回给调用方，不回退
    let err = periods
        .create(&period("Period 2", "08:20", "09:00"))
        .await
        .unwrap_err();
    assert!(err.message().contains("overlaps"));

    let listed = periods.list().await.expect("list periods");
    assert_eq!(listed.source, DataSource::Remote);
    assert_eq!(listed.data.len(), 1);

    // 后端 404 时单条查询回退到离线数据
    let exam = client.resource::<Exams>().get(1).await.expect("fixture exam");
    assert_eq!(exam.source, DataSource::Fixture);
    assert_eq!(exam.data.name, "Mid-term Mathematics");

    server.handle.stop(true).await;
}

#[actix_web::test]
async fn test_unauthorized_clears_credentials() {
    let server = start_server().await;
    let (client, _store) = client_for(&server, "unauthorized");

    client.credentials().save("not-a-real-token").unwrap();
    let err = client.get("/api/v1/periods").await.unwrap_err();
    assert_eq!(err.code(), "E009");
    assert!(!client.credentials().is_signed_in());

    let err = client.login(common::ADMIN_USERNAME, "wrong").await.unwrap_err();
    assert_eq!(err.code(), "E009");

    server.handle.stop(true).await;
}

#[actix_web::test]
async fn test_pending_results_keep_rejected_drafts() {
    let server = start_server().await;
    let (client, store) = client_for(&server, "pending");
    client
        .login(common::ADMIN_USERNAME, common::PASSWORD)
        .await
        .expect("login");

    let year = client
        .resource::<AcademicYears>()
        .create(&AcademicYearRequest {
            name: "2025".to_string(),
            start_date: "2025-01-06".to_string(),
            end_date: "2025-11-28".to_string(),
            is_current: true,
        })
        .await
        .unwrap()
        .data;
    let term = client
        .resource::<Terms>()
        .create(&TermRequest {
            academic_year_id: year.id,
            name: "Term 1".to_string(),
            start_date: "2025-01-06".to_string(),
            end_date: "2025-04-04".to_string(),
        })
        .await
        .unwrap()
        .data;
    let grade = client
        .resource::<GradeLevels>()
        .create(&GradeLevelRequest {
            name: "Grade 7".to_string(),
            level: 7,
            description: None,
        })
        .await
        .unwrap()
        .data;
    let subject = client
        .resource::<Subjects>()
        .create(&SubjectRequest {
            name: "Mathematics".to_string(),
            code: "MATH".to_string(),
            description: None,
            is_core: true,
            is_elective: false,
        })
        .await
        .unwrap()
        .data;
    let classroom = client
        .resource::<Classrooms>()
        .create(&ClassroomRequest {
            name: "7 East".to_string(),
            grade_level_id: grade.id,
            academic_year_id: year.id,
            capacity: 40,
            room_number: None,
            class_teacher_id: None,
        })
        .await
        .unwrap()
        .data;
    let exam = client
        .resource::<Exams>()
        .create(&ExamRequest {
            name: "Mid-term Mathematics".to_string(),
            exam_type: ExamType::Midterm,
            subject_id: subject.id,
            classroom_id: classroom.id,
            term_id: term.id,
            exam_date: "2025-02-20".to_string(),
            start_time: "09:00".to_string(),
            end_time: "10:30".to_string(),
            total_marks: 100.0,
            passing_marks: 40.0,
        })
        .await
        .unwrap();
    assert_eq!(exam.source, DataSource::Remote);

    let queue = PendingResultQueue::new(store);
    for (student, marks) in [("S-1001", 78.0), ("S-1002", 120.0)] {
        queue
            .enqueue(
                exam.data.id,
                ExamResultRequest {
                    student_number: student.to_string(),
                    student_name: format!("Student {student}"),
                    marks_obtained: marks,
                    remarks: None,
                    status: ResultStatus::Pending,
                },
            )
            .unwrap();
    }

    let summary = queue.submit_all(&client).await.unwrap();
    assert_eq!(summary.submitted, 1);
    assert_eq!(summary.failed, 1);

    let left = queue.list().unwrap();
    assert_eq!(left.len(), 1);
    assert_eq!(left[0].result.student_number, "S-1002");

    let results = client
        .get(&format!("/api/v1/exams/{}/results", exam.data.id))
        .await
        .unwrap();
    assert_eq!(results.source, DataSource::Remote);
    assert_eq!(results.envelope.data.unwrap().as_array().unwrap().len(), 1);

    server.handle.stop(true).await;
}
