//! Response header builders for the CRUD wire contract.
//!
//! Mutating endpoints attach an alert header pair consumed by client-side
//! toast notifications; list endpoints attach `X-Total-Count` and a `Link`
//! header describing the pagination window.

use axum::http::{header, HeaderMap, HeaderName, HeaderValue};

use crate::shared::constants::ALERT_KEY_PREFIX;
use crate::shared::pagination::{Page, PageRequest};

pub const ALERT_HEADER: HeaderName = HeaderName::from_static("x-cadastroapp-alert");
pub const PARAMS_HEADER: HeaderName = HeaderName::from_static("x-cadastroapp-params");
pub const ERROR_HEADER: HeaderName = HeaderName::from_static("x-cadastroapp-error");
pub const TOTAL_COUNT_HEADER: HeaderName = HeaderName::from_static("x-total-count");

fn alert(message_key: &str, param: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    // Keys and ids are plain ASCII, so these conversions cannot fail
    headers.insert(ALERT_HEADER, HeaderValue::from_str(message_key).unwrap());
    headers.insert(PARAMS_HEADER, HeaderValue::from_str(param).unwrap());
    headers
}

/// Alert for a successful create, e.g. `cadastroApp.cidade.created` with the
/// new id as the parameter.
pub fn create_entity_creation_alert(entity_name: &str, id: i64) -> HeaderMap {
    alert(
        &format!("{}.{}.created", ALERT_KEY_PREFIX, entity_name),
        &id.to_string(),
    )
}

/// Alert for a successful update.
pub fn create_entity_update_alert(entity_name: &str, id: i64) -> HeaderMap {
    alert(
        &format!("{}.{}.updated", ALERT_KEY_PREFIX, entity_name),
        &id.to_string(),
    )
}

/// Alert for a successful delete.
pub fn create_entity_deletion_alert(entity_name: &str, id: i64) -> HeaderMap {
    alert(
        &format!("{}.{}.deleted", ALERT_KEY_PREFIX, entity_name),
        &id.to_string(),
    )
}

/// Failure alert attached to a 400 response, e.g. `error.idexists`.
pub fn create_failure_alert(entity_name: &str, error_key: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        ERROR_HEADER,
        HeaderValue::from_str(&format!("error.{}", error_key)).unwrap(),
    );
    headers.insert(PARAMS_HEADER, HeaderValue::from_str(entity_name).unwrap());
    headers
}

/// `X-Total-Count` and `Link` headers for one page of a list response.
///
/// Link relations are emitted in the order `next`, `prev`, `last`, `first`;
/// `next` and `prev` are omitted at the edges of the window.
pub fn pagination_headers<T>(page: &Page<T>, request: &PageRequest, base_path: &str) -> HeaderMap {
    let size = request.limit();
    let number = request.page.max(0);
    let total_pages = page.total_pages(size);

    let mut link = String::new();
    if number + 1 < total_pages {
        link.push_str(&page_link(base_path, number + 1, size, "next"));
        link.push(',');
    }
    if number > 0 {
        link.push_str(&page_link(base_path, number - 1, size, "prev"));
        link.push(',');
    }
    let last_page = if total_pages > 0 { total_pages - 1 } else { 0 };
    link.push_str(&page_link(base_path, last_page, size, "last"));
    link.push(',');
    link.push_str(&page_link(base_path, 0, size, "first"));

    let mut headers = HeaderMap::new();
    headers.insert(
        TOTAL_COUNT_HEADER,
        HeaderValue::from_str(&page.total_count.to_string()).unwrap(),
    );
    headers.insert(header::LINK, HeaderValue::from_str(&link).unwrap());
    headers
}

fn page_link(base_path: &str, page: i64, size: i64, rel: &str) -> String {
    format!("<{}?page={}&size={}>; rel=\"{}\"", base_path, page, size, rel)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creation_alert_carries_key_and_id() {
        let headers = create_entity_creation_alert("cidade", 42);
        assert_eq!(headers[&ALERT_HEADER], "cadastroApp.cidade.created");
        assert_eq!(headers[&PARAMS_HEADER], "42");
    }

    #[test]
    fn update_and_deletion_alerts_use_their_own_keys() {
        let updated = create_entity_update_alert("estado", 7);
        assert_eq!(updated[&ALERT_HEADER], "cadastroApp.estado.updated");

        let deleted = create_entity_deletion_alert("pessoa", 7);
        assert_eq!(deleted[&ALERT_HEADER], "cadastroApp.pessoa.deleted");
    }

    #[test]
    fn failure_alert_carries_error_key_and_entity_name() {
        let headers = create_failure_alert("cidade", "idexists");
        assert_eq!(headers[&ERROR_HEADER], "error.idexists");
        assert_eq!(headers[&PARAMS_HEADER], "cidade");
        assert!(headers.get(&ALERT_HEADER).is_none());
    }

    fn page_of(total_count: i64) -> Page<i64> {
        Page {
            items: vec![],
            total_count,
        }
    }

    fn request(page: i64, size: i64) -> PageRequest {
        PageRequest {
            page,
            size,
            sort: None,
        }
    }

    #[test]
    fn middle_page_links_to_all_four_relations() {
        let headers = pagination_headers(&page_of(100), &request(2, 20), "/api/cidades");
        assert_eq!(headers[&TOTAL_COUNT_HEADER], "100");
        assert_eq!(
            headers[&header::LINK],
            "</api/cidades?page=3&size=20>; rel=\"next\",\
             </api/cidades?page=1&size=20>; rel=\"prev\",\
             </api/cidades?page=4&size=20>; rel=\"last\",\
             </api/cidades?page=0&size=20>; rel=\"first\""
        );
    }

    #[test]
    fn first_page_has_no_prev() {
        let headers = pagination_headers(&page_of(100), &request(0, 20), "/api/estados");
        let link = headers[&header::LINK].to_str().unwrap().to_string();
        assert!(link.contains("rel=\"next\""));
        assert!(!link.contains("rel=\"prev\""));
    }

    #[test]
    fn last_page_has_no_next() {
        let headers = pagination_headers(&page_of(100), &request(4, 20), "/api/estados");
        let link = headers[&header::LINK].to_str().unwrap().to_string();
        assert!(!link.contains("rel=\"next\""));
        assert!(link.contains("rel=\"prev\""));
    }

    #[test]
    fn empty_result_still_links_last_and_first() {
        let headers = pagination_headers(&page_of(0), &request(0, 20), "/api/pessoas");
        assert_eq!(headers[&TOTAL_COUNT_HEADER], "0");
        assert_eq!(
            headers[&header::LINK],
            "</api/pessoas?page=0&size=20>; rel=\"last\",\
             </api/pessoas?page=0&size=20>; rel=\"first\""
        );
    }
}
