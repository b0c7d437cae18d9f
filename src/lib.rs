//! School Admin - 学校教务管理后台服务
//!
//! 基于 Actix Web 与 SeaORM 构建的教务管理后端，并附带管理面板使用的 API 客户端。
//!
//! # 架构
//! - `client`: 管理面板 API 客户端（离线时回退到内置示例数据）
//! - `config`: 配置管理
//! - `entity`: SeaORM 数据库实体
//! - `errors`: 统一错误处理
//! - `middlewares`: 认证授权中间件
//! - `models`: 数据模型定义
//! - `routes`: API 路由层
//! - `runtime`: 运行时生命周期管理
//! - `services`: 业务逻辑层
//! - `storage`: 数据存储层（SeaORM）
//! - `utils`: 工具函数
//! - `validation`: 写入前的字段校验

pub mod client;
pub mod config;
pub mod entity;
pub mod errors;
pub mod middlewares;
pub mod models;
pub mod routes;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;
pub mod validation;
