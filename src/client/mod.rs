//! 管理面板 API 客户端
//!
//! - [`ApiClient`]: 访问后端 REST 接口，后端不可达时回退到离线数据
//! - [`CredentialStore`]: 本地保存的登录令牌
//! - [`PendingResultQueue`]: 待审核提交的考试成绩
//! - [`ResourceClient`]: 按实体划分的类型化增删改查

pub mod api;
pub mod credentials;
pub mod fixtures;
pub mod local_store;
pub mod pending_results;
pub mod resources;

pub use api::{ApiClient, ClientResponse, DataSource};
pub use credentials::CredentialStore;
pub use fixtures::{FixtureSource, Resource, StaticFixtures};
pub use local_store::LocalStore;
pub use pending_results::{PendingResult, PendingResultQueue, SubmitSummary};
pub use resources::{ClientResource, Fetched, ResourceClient};
