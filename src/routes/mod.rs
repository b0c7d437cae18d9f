pub mod auth;

pub mod system;

pub mod academic_years;

pub mod terms;

pub mod periods;

pub mod grade_levels;

pub mod subjects;

pub mod classrooms;

pub mod teachers;

pub mod exams;

pub mod attendance;

pub mod notifications;

pub mod fee_structures;

pub use academic_years::configure_academic_years_routes;
pub use attendance::configure_attendance_routes;
pub use auth::configure_auth_routes;
pub use classrooms::configure_classrooms_routes;
pub use exams::configure_exams_routes;
pub use fee_structures::configure_fee_structures_routes;
pub use grade_levels::configure_grade_levels_routes;
pub use notifications::configure_notifications_routes;
pub use periods::configure_periods_routes;
pub use subjects::configure_subjects_routes;
pub use system::configure_system_routes;
pub use teachers::configure_teachers_routes;
pub use terms::configure_terms_routes;

use actix_web::web;

/// 注册全部业务路由
pub fn configure_api_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(configure_auth_routes)
        .configure(configure_system_routes)
        .configure(configure_academic_years_routes)
        .configure(configure_terms_routes)
        .configure(configure_periods_routes)
        .configure(configure_grade_levels_routes)
        .configure(configure_subjects_routes)
        .configure(configure_classrooms_routes)
        .configure(configure_teachers_routes)
        .configure(configure_exams_routes)
        .configure(configure_attendance_routes)
        .configure(configure_notifications_routes)
        .configure(configure_fee_structures_routes);
}
