//! The GitHub client and the remote identity provider against a local
//! actix server standing in for the real services.
use std::net::SocketAddr;
use std::sync::Arc;

use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use serde_json::json;

use uwumi::auth::{remote::RemoteProvider, IdentityProvider};
use uwumi::config;
use uwumi::github::client::Resource;
use uwumi::github::{FetchError, GitHubClient, GitHubService, ReleaseSource};

const OWNER: &str = "uwumilabs";
const REPO: &str = "uwumi";
const TOKEN: &str = "ghp_test";
const SESSION: &str = "good-session";

async fn repository(req: HttpRequest) -> HttpResponse {
    let headers = req.headers();
    let accept = headers.get("accept").and_then(|v| v.to_str().ok());
    let auth = headers.get("authorization").and_then(|v| v.to_str().ok());
    let agent = headers.get("user-agent").and_then(|v| v.to_str().ok());
    if accept != Some("application/vnd.github+json")
        || auth != Some("Bearer ghp_test")
        || agent.is_none()
    {
        return HttpResponse::BadRequest().finish();
    }
    HttpResponse::Ok().json(json!({
        "id": 1,
        "name": REPO,
        "full_name": format!("{OWNER}/{REPO}"),
        "description": "Anime, manga and movies",
        "stargazers_count": 42,
        "forks_count": 3,
        "watchers_count": 42,
        "open_issues_count": 1,
        "created_at": "2023-06-01T00:00:00Z",
        "language": "TypeScript",
        "size": 1024,
        "html_url": "https://github.com/uwumilabs/uwumi"
    }))
}

async fn releases() -> HttpResponse {
    HttpResponse::Ok().json(json!([
        {
            "id": 2,
            "tag_name": "v1.1.0",
            "published_at": "2024-02-01T00:00:00Z",
            "draft": false,
            "assets": [{ "id": 20, "name": "uwumi-v1.1.0.apk", "download_count": 5, "size": 100 }]
        },
        {
            "id": 1,
            "tag_name": "v1.0.0",
            "published_at": "2024-01-01T00:00:00Z",
            "assets": [
                { "id": 10, "name": "uwumi-v1.0.0.apk", "download_count": 10, "size": 100 },
                { "id": 11, "name": "uwumi-v1.0.0.ipa", "download_count": 20, "size": 100 },
                { "id": 12, "name": "uwumi-android-arm64.apk", "download_count": 30, "size": 100 }
            ]
        }
    ]))
}

async fn rate_limited() -> HttpResponse {
    HttpResponse::Forbidden().json(json!({ "message": "API rate limit exceeded" }))
}

async fn me(req: HttpRequest) -> HttpResponse {
    let auth = req
        .headers()
        .get("authorization")
        .and_then(|v| v.to_str().ok());
    match auth {
        Some(value) if value == format!("Bearer {SESSION}") => HttpResponse::Ok().json(json!({
            "id": "user_1",
            "email_addresses": [{ "id": "email_1", "email_address": "admin@uwumi.app" }],
            "primary_email_address_id": "email_1",
            "public_metadata": {},
            "first_name": "Ada",
            "last_name": null,
            "image_url": null
        })),
        Some(value) if value == "Bearer broken" => HttpResponse::InternalServerError().finish(),
        _ => HttpResponse::Unauthorized().finish(),
    }
}

async fn signed_out() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Start the stand-in server and return its address
fn start_upstream() -> SocketAddr {
    let server = HttpServer::new(|| {
        App::new()
            .route("/repos/uwumilabs/uwumi", web::get().to(repository))
            .route("/repos/uwumilabs/uwumi/releases", web::get().to(releases))
            .route("/repos/uwumilabs/limited", web::get().to(repository))
            .route("/repos/uwumilabs/limited/releases", web::get().to(rate_limited))
            .route("/v1/me", web::get().to(me))
            .route("/v1/sign-out", web::post().to(signed_out))
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .unwrap();
    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());
    addr
}

fn github_config(addr: SocketAddr, repo: &str) -> config::GitHub {
    config::GitHub {
        api_url: format!("http://{addr}/"),
        owner: OWNER.to_owned(),
        repo: repo.to_owned(),
        token: Some(TOKEN.to_owned()),
        ..config::GitHub::default()
    }
}

#[actix_web::test]
async fn test_github_client_expect_repository_and_releases_decoded() {
    let addr = start_upstream();
    let cut = GitHubClient::new(&github_config(addr, REPO)).unwrap();

    let repository = cut.fetch_repository().await.unwrap();
    assert_eq!(repository.full_name, "uwumilabs/uwumi");
    assert_eq!(repository.stargazers_count, 42);

    let releases = cut.fetch_releases().await.unwrap();
    assert_eq!(releases.len(), 2);
    assert_eq!(releases[1].assets.len(), 3);
}

#[actix_web::test]
async fn test_github_service_over_http_expect_aggregate() {
    let addr = start_upstream();
    let client = GitHubClient::new(&github_config(addr, REPO)).unwrap();
    let cut = GitHubService::new(Arc::new(client)).analytics().await.unwrap();
    assert_eq!(cut.total_downloads, 65);
    assert_eq!(cut.download_trends[0].version, "v1.0.0");
    assert_eq!(cut.asset_breakdown[0].name, "Android APK");
    assert_eq!(cut.asset_breakdown[0].downloads, 45);
}

#[actix_web::test]
async fn test_github_client_when_non_success_status_expect_status_error() {
    let addr = start_upstream();
    let cut = GitHubClient::new(&github_config(addr, "limited")).unwrap();
    let err = cut.fetch_releases().await.unwrap_err();
    assert!(matches!(
        err,
        FetchError::Status {
            resource: Resource::Releases,
            status
        } if status.as_u16() == 403
    ));
}

#[actix_web::test]
async fn test_github_service_when_one_read_fails_expect_single_error() {
    let addr = start_upstream();
    let client = GitHubClient::new(&github_config(addr, "limited")).unwrap();
    let err = GitHubService::new(Arc::new(client))
        .analytics()
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Error fetching GitHub analytics");
}

#[actix_web::test]
async fn test_github_client_when_unreachable_expect_request_error() {
    let addr = start_upstream();
    let mut conf = github_config(addr, REPO);
    conf.api_url = "http://127.0.0.1:1".to_owned();
    let cut = GitHubClient::new(&conf).unwrap();
    let err = cut.fetch_repository().await.unwrap_err();
    assert!(matches!(
        err,
        FetchError::Request {
            resource: Resource::Repository,
            ..
        }
    ));
}

fn provider(addr: SocketAddr) -> RemoteProvider {
    RemoteProvider::new(
        format!("http://{addr}/v1/me"),
        Some(format!("http://{addr}/v1/sign-out")),
    )
    .unwrap()
}

#[actix_web::test]
async fn test_remote_provider_when_valid_session_expect_user() {
    let addr = start_upstream();
    let user = provider(addr)
        .user_for_session(SESSION)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(user.id, "user_1");
    assert_eq!(user.primary_email(), Some("admin@uwumi.app"));
}

#[actix_web::test]
async fn test_remote_provider_when_rejected_expect_no_user() {
    let addr = start_upstream();
    let user = provider(addr).user_for_session("expired").await.unwrap();
    assert!(user.is_none());
}

#[actix_web::test]
async fn test_remote_provider_when_provider_fails_expect_error() {
    let addr = start_upstream();
    assert!(provider(addr).user_for_session("broken").await.is_err());
}

#[actix_web::test]
async fn test_remote_provider_sign_out_expect_ok() {
    let addr = start_upstream();
    provider(addr).sign_out(SESSION).await.unwrap();
}
