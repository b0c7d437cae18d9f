use super::entities::UserRole;

/// 新建后台账号，只在启动播种与测试中使用，没有对外接口
#[derive(Debug)]
pub struct CreateUserRequest {
    pub username: String,
    pub password_hash: String,
    pub role: UserRole,
    pub display_name: Option<String>,
}
