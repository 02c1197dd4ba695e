/// Shared types used across the codebase

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Subscription tier governing a user's daily request quota.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "plan", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum Plan {
    Free,
    Pro,
    Premium,
}

impl Plan {
    pub const ALLOWED: [&'static str; 3] = ["FREE", "PRO", "PREMIUM"];

    /// Daily metered-request limit for the plan. `None` means unlimited.
    pub fn daily_limit(self) -> Option<i64> {
        match self {
            Plan::Free => Some(100),
            Plan::Pro => Some(5000),
            Plan::Premium => None,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "FREE" => Some(Plan::Free),
            "PRO" => Some(Plan::Pro),
            "PREMIUM" => Some(Plan::Premium),
            _ => None,
        }
    }
}

impl std::fmt::Display for Plan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Plan::Free => "FREE",
            Plan::Pro => "PRO",
            Plan::Premium => "PREMIUM",
        };
        write!(f, "{}", s)
    }
}

/// Optional `page`/`limit` query parameters accepted by every list endpoint.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// Resolved pagination window. Lists are unpaginated (all rows, no `meta`)
/// unless at least one of `page`/`limit` was supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: i64,
    pub take: i64,
    /// Row offset. Only applied when both `page` and `limit` were supplied;
    /// a lone `page` selects the first `take` rows.
    pub offset: Option<i64>,
}

impl Pagination {
    pub fn from_query(query: &PageQuery) -> Option<Self> {
        let page = query.page.map(|p| p.max(1));
        let limit = query.limit.map(|l| l.clamp(1, 50));

        if page.is_none() && limit.is_none() {
            return None;
        }

        let take = limit.unwrap_or(10);
        let offset = match (page, limit) {
            (Some(p), Some(l)) => Some((p - 1) * l),
            _ => None,
        };

        Some(Self {
            page: page.unwrap_or(1),
            take,
            offset,
        })
    }

    /// `meta` object returned alongside paginated rows.
    pub fn meta(&self, total: i64) -> Value {
        let total_pages = (total + self.take - 1) / self.take;
        json!({
            "page": self.page,
            "limit": self.take,
            "total": total,
            "totalPages": total_pages,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_limits_match_tiers() {
        assert_eq!(Plan::Free.daily_limit(), Some(100));
        assert_eq!(Plan::Pro.daily_limit(), Some(5000));
        assert_eq!(Plan::Premium.daily_limit(), None);
    }

    #[test]
    fn plan_parse_accepts_only_known_tiers() {
        assert_eq!(Plan::parse("FREE"), Some(Plan::Free));
        assert_eq!(Plan::parse("PRO"), Some(Plan::Pro));
        assert_eq!(Plan::parse("PREMIUM"), Some(Plan::Premium));
        assert_eq!(Plan::parse("free"), None);
        assert_eq!(Plan::parse("GOLD"), None);
    }

    #[test]
    fn plan_serializes_uppercase() {
        assert_eq!(serde_json::to_value(Plan::Free).unwrap(), json!("FREE"));
        assert_eq!(
            serde_json::from_value::<Plan>(json!("PREMIUM")).unwrap(),
            Plan::Premium
        );
    }

    #[test]
    fn no_params_means_unpaginated() {
        assert!(Pagination::from_query(&PageQuery::default()).is_none());
    }

    #[test]
    fn limit_is_clamped_to_fifty() {
        let p = Pagination::from_query(&PageQuery {
            page: None,
            limit: Some(200),
        })
        .unwrap();
        assert_eq!(p.take, 50);
        assert_eq!(p.offset, None);

        let p = Pagination::from_query(&PageQuery {
            page: None,
            limit: Some(0),
        })
        .unwrap();
        assert_eq!(p.take, 1);
    }

    #[test]
    fn page_alone_defaults_take_without_offset() {
        let p = Pagination::from_query(&PageQuery {
            page: Some(3),
            limit: None,
        })
        .unwrap();
        assert_eq!(p.page, 3);
        assert_eq!(p.take, 10);
        assert_eq!(p.offset, None);
    }

    #[test]
    fn page_and_limit_compute_offset() {
        let p = Pagination::from_query(&PageQuery {
            page: Some(3),
            limit: Some(20),
        })
        .unwrap();
        assert_eq!(p.offset, Some(40));
        assert_eq!(p.take, 20);
    }

    #[test]
    fn page_below_one_is_clamped() {
        let p = Pagination::from_query(&PageQuery {
            page: Some(0),
            limit: Some(5),
        })
        .unwrap();
        assert_eq!(p.page, 1);
        assert_eq!(p.offset, Some(0));
    }

    #[test]
    fn meta_rounds_total_pages_up() {
        let p = Pagination::from_query(&PageQuery {
            page: Some(1),
            limit: Some(10),
        })
        .unwrap();
        assert_eq!(p.meta(25)["totalPages"], 3);
        assert_eq!(p.meta(30)["totalPages"], 3);
        assert_eq!(p.meta(0)["totalPages"], 0);
        assert_eq!(p.meta(25)["limit"], 10);
        assert_eq!(p.meta(25)["total"], 25);
    }
}
