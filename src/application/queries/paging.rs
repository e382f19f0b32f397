use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::cursor::PageCursor,
};

pub(crate) const MAX_PAGE_SIZE: u32 = 100;

pub(crate) fn normalize_limit(requested: Option<u32>, default: u32) -> u32 {
    match requested {
        Some(0) | None => default.clamp(1, MAX_PAGE_SIZE),
        Some(limit) => limit.min(MAX_PAGE_SIZE),
    }
}

pub(crate) fn decode_cursor(token: Option<&str>) -> ApplicationResult<Option<PageCursor>> {
    match token.map(str::trim).filter(|t| !t.is_empty()) {
        Some(value) => PageCursor::decode(value)
            .map(Some)
            .map_err(ApplicationError::from),
        None => Ok(None),
    }
}

pub(crate) fn normalize_search(q: Option<String>) -> Option<String> {
    q.map(|q| q.trim().to_string()).filter(|q| !q.is_empty())
}
