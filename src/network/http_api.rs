use std::sync::Arc;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tracing::{error, info, warn};

use crate::assessment::catalog;
use crate::contact::{self, ContactService, ContactSubmission};
use crate::content;

const STATUS_OK: &str = "200 OK";
const STATUS_BAD_REQUEST: &str = "400 Bad Request";
const STATUS_NOT_FOUND: &str = "404 Not Found";
const STATUS_BAD_GATEWAY: &str = "502 Bad Gateway";

/// Lightweight HTTP API serving the site's static content tables and
/// the contact form endpoint.
///
/// Runs separately from the WebSocket assessment server. Responses are
/// JSON with permissive CORS so the client bundle can be served from
/// anywhere during development.
pub async fn start(addr: String) {
    let contact = Arc::new(ContactService::new());

    let listener = match TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            error!("Failed to bind content API on {}: {}", addr, e);
            return;
        }
    };

    info!("Content API listening on http://{}", addr);

    loop {
        let (stream, _) = match listener.accept().await {
            Ok(conn) => conn,
            Err(e) => {
                error!("Content API accept error: {}", e);
                continue;
            }
        };

        let contact = contact.clone();
        tokio::spawn(async move {
            handle_connection(stream, contact).await;
        });
    }
}

async fn handle_connection(mut stream: TcpStream, contact: Arc<ContactService>) {
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf).await {
        Ok(n) => n,
        Err(_) => return,
    };
    let request = String::from_utf8_lossy(&buf[..n]).into_owned();

    // CORS preflight
    if request.starts_with("OPTIONS") {
        let response = "HTTP/1.1 204 No Content\r\n\
            Access-Control-Allow-Origin: *\r\n\
            Access-Control-Allow-Methods: POST, GET, OPTIONS\r\n\
            Access-Control-Allow-Headers: Content-Type\r\n\
            \r\n";
        let _ = stream.write_all(response.as_bytes()).await;
        return;
    }

    let mut request_line = request.lines().next().unwrap_or("").split_whitespace();
    let method = request_line.next().unwrap_or("");
    let path = request_line.next().unwrap_or("");
    let body = request
        .split_once("\r\n\r\n")
        .map(|(_, body)| body)
        .unwrap_or("");

    let (status, payload) = route(method, path, body, &contact).await;

    let response = format!(
        "HTTP/1.1 {}\r\n\
        Content-Type: application/json\r\n\
        Access-Control-Allow-Origin: *\r\n\
        Content-Length: {}\r\n\
        \r\n\
        {}",
        status,
        payload.len(),
        payload,
    );
    let _ = stream.write_all(response.as_bytes()).await;
}

async fn route(
    method: &str,
    path: &str,
    body: &str,
    contact: &ContactService,
) -> (&'static str, String) {
    match (method, path) {
        ("GET", "/api/case-studies") => json_ok(&content::case_studies()),
        ("GET", "/api/team") => json_ok(&content::team()),
        ("GET", "/api/pricing") => json_ok(&content::pricing_tiers()),
        ("GET", "/api/awards") => json_ok(&content::awards()),
        ("GET", "/api/assessment/questions") => json_ok(&catalog::all_questions()),
        ("GET", path) if path.starts_with("/api/case-studies/") => {
            let slug = &path["/api/case-studies/".len()..];
            match content::get_case_study(slug) {
                Some(study) => json_ok(&study),
                None => not_found(),
            }
        }
        ("GET", path) if path.starts_with("/api/legal/") => {
            let slug = &path["/api/legal/".len()..];
            match content::get_legal_page(slug) {
                Some(page) => json_ok(&page),
                None => not_found(),
            }
        }
        ("POST", "/api/contact") => submit_contact(body, contact).await,
        _ => not_found(),
    }
}

async fn submit_contact(body: &str, contact: &ContactService) -> (&'static str, String) {
    let submission: ContactSubmission = match serde_json::from_str(body) {
        Ok(submission) => submission,
        Err(e) => {
            warn!("Malformed contact submission: {}", e);
            return error_response(STATUS_BAD_REQUEST, &format!("invalid JSON body: {}", e));
        }
    };

    if let Err(reason) = contact::validate(&submission) {
        warn!("Rejected contact submission: {}", reason);
        return error_response(STATUS_BAD_REQUEST, &reason);
    }

    match contact.deliver(&submission).await {
        Ok(()) => (STATUS_OK, "{\"ok\":true}".to_string()),
        Err(reason) => {
            error!("Contact delivery failed: {}", reason);
            error_response(STATUS_BAD_GATEWAY, &reason)
        }
    }
}

fn json_ok<T: serde::Serialize>(value: &T) -> (&'static str, String) {
    match serde_json::to_string(value) {
        Ok(json) => (STATUS_OK, json),
        Err(e) => {
            error!("Failed to serialize response: {}", e);
            error_response(STATUS_BAD_GATEWAY, "serialization failure")
        }
    }
}

fn not_found() -> (&'static str, String) {
    error_response(STATUS_NOT_FOUND, "not found")
}

fn error_response(status: &'static str, reason: &str) -> (&'static str, String) {
    let body = serde_json::json!({ "ok": false, "error": reason });
    (status, body.to_string())
}

// ── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> ContactService {
        // No endpoint configured in tests: delivery is simulated.
        ContactService::new()
    }

    #[tokio::test]
    async fn content_routes_return_json() {
        let contact = service();
        for path in [
            "/api/case-studies",
            "/api/team",
            "/api/pricing",
            "/api/awards",
            "/api/assessment/questions",
        ] {
            let (status, body) = route("GET", path, "", &contact).await;
            assert_eq!(status, STATUS_OK, "{}", path);
            assert!(serde_json::from_str::<serde_json::Value>(&body).is_ok(), "{}", path);
        }
    }

    #[tokio::test]
    async fn slug_routes_resolve_and_miss() {
        let contact = service();
        let (status, _) = route("GET", "/api/legal/privacy", "", &contact).await;
        assert_eq!(status, STATUS_OK);

        let (status, _) = route("GET", "/api/legal/cookies", "", &contact).await;
        assert_eq!(status, STATUS_NOT_FOUND);

        let (status, _) = route("GET", "/api/case-studies/grainline-quality", "", &contact).await;
        assert_eq!(status, STATUS_OK);
    }

    #[tokio::test]
    async fn unknown_route_is_404() {
        let contact = service();
        let (status, _) = route("GET", "/api/blog", "", &contact).await;
        assert_eq!(status, STATUS_NOT_FOUND);
        let (status, _) = route("DELETE", "/api/team", "", &contact).await;
        assert_eq!(status, STATUS_NOT_FOUND);
    }

    #[tokio::test]
    async fn contact_rejects_bad_bodies() {
        let contact = service();
        let (status, body) = route("POST", "/api/contact", "not json", &contact).await;
        assert_eq!(status, STATUS_BAD_REQUEST);
        assert!(body.contains("\"ok\":false"));

        let invalid = r#"{"name":"","email":"a@b.co","message":"hi"}"#;
        let (status, _) = route("POST", "/api/contact", invalid, &contact).await;
        assert_eq!(status, STATUS_BAD_REQUEST);
    }

    #[tokio::test]
    async fn contact_accepts_a_valid_submission() {
        let contact = service();
        let valid = r#"{"name":"Ada","email":"ada@example.com","message":"Hello"}"#;
        let (status, body) = route("POST", "/api/contact", valid, &contact).await;
        assert_eq!(status, STATUS_OK);
        assert_eq!(body, "{\"ok\":true}");
    }
}
