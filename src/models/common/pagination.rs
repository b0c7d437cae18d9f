use serde::{Deserialize, Serialize};
use ts_rs::TS;

const DEFAULT_PAGE_SIZE: i64 = 10;
const MAX_PAGE_SIZE: i64 = 100;

/// 列表接口的页码与每页数量，缺省为第 1 页、每页 10 条
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaginationQuery {
    pub page: i64,
    pub size: i64,
}

// 分页响应信息
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/pagination.ts")]
pub struct PaginationInfo {
    pub page: i64,
    pub page_size: i64,
    pub total: i64,
    pub total_pages: i64,
}

// 分页列表响应
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/pagination.ts")]
pub struct PaginatedResponse<T> {
    pub items: Vec<T>,
    pub pagination: PaginationInfo,
}

impl PaginationInfo {
    pub fn new(page: i64, page_size: i64, total: i64) -> Self {
        let total_pages = if page_size > 0 {
            (total + page_size - 1) / page_size
        } else {
            0
        };
        Self {
            page,
            page_size,
            total,
            total_pages,
        }
    }
}

impl PaginationQuery {
    pub fn from_parts(page: Option<i64>, size: Option<i64>) -> Self {
        Self {
            page: page.unwrap_or(1),
            size: size.unwrap_or(DEFAULT_PAGE_SIZE),
        }
    }

    /// 页码至少为 1，每页数量限制在 1..=100
    pub fn normalized(&self) -> (u64, u64) {
        let page = self.page.max(1) as u64;
        let size = self.size.clamp(1, MAX_PAGE_SIZE) as u64;
        (page, size)
    }
}

impl Default for PaginationQuery {
    fn default() -> Self {
        Self::from_parts(None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_and_clamping() {
        assert_eq!(PaginationQuery::default().normalized(), (1, 10));
        assert_eq!(PaginationQuery::from_parts(Some(0), Some(500)).normalized(), (1, 100));
        assert_eq!(PaginationQuery::from_parts(Some(3), Some(-2)).normalized(), (3, 1));
    }

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(PaginationInfo::new(1, 10, 21).total_pages, 3);
        assert_eq!(PaginationInfo::new(1, 10, 0).total_pages, 0);
    }
}
