#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use listing::{QueryKey, SortState};
use listing_demo::users::mock_users;
use listing_demo::{AdapterConfig, MockUserSource, User};

pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

pub fn users() -> Vec<User> {
    mock_users(now())
}

pub fn source() -> MockUserSource {
    MockUserSource::with_users(users(), &AdapterConfig::instant())
}

pub fn key(page: usize, page_size: usize, sort: SortState) -> QueryKey {
    QueryKey {
        page,
        page_size,
        sort,
    }
}
