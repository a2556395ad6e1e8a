use chrono::Duration;
use reqwest::StatusCode;
use serde_json::{Value, json};

use soletrack_api::{app, config::Config, context::AppContext};
use soletrack_auth::{Role, TokenCodec};

const JWT_SECRET: &str = "test-secret";

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Same router as prod, bound to an ephemeral port.
        let config = Config {
            port: 0,
            jwt_secret: JWT_SECRET.to_string(),
            token_ttl: Duration::minutes(10),
            cors_origins: vec![],
        };
        let app = app::build_app(AppContext::in_memory(&config), &config.cors_origins);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn test_codec() -> TokenCodec {
    TokenCodec::new(JWT_SECRET.as_bytes(), Duration::minutes(10))
}

/// Register a user and return (token, user json).
async fn register(
    client: &reqwest::Client,
    base_url: &str,
    email: &str,
    brand: Option<&str>,
    role: Option<&str>,
) -> (String, Value) {
    let mut body = json!({
        "name": "Test User",
        "email": email,
        "password": "pw123",
    });
    if let Some(brand) = brand {
        body["brand"] = json!(brand);
    }
    if let Some(role) = role {
        body["role"] = json!(role);
    }

    let res = client
        .post(format!("{base_url}/api/auth/register"))
        .json(&body)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED, "registration failed");

    let body: Value = res.json().await.unwrap();
    let token = body["token"].as_str().unwrap().to_string();
    (token, body["user"].clone())
}

async fn create_shoe(
    client: &reqwest::Client,
    base_url: &str,
    token: &str,
    name: &str,
    brand: &str,
    price: f64,
) -> Value {
    let res = client
        .post(format!("{base_url}/api/shoes/create"))
        .bearer_auth(token)
        .json(&json!({ "name": name, "brand": brand, "price": price }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    res.json().await.unwrap()
}

#[tokio::test]
async fn auth_required_for_protected_endpoints() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/api/shoes", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let res = client
        .get(format!("{}/api/shoes", srv.base_url))
        .bearer_auth("not-a-token")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    // Token signed with a different secret is rejected identically.
    let foreign = jsonwebtoken::encode(
        &jsonwebtoken::Header::default(),
        &json!({
            "sub": uuid::Uuid::now_v7(),
            "role": "super_admin",
            "iat": chrono::Utc::now().timestamp(),
            "exp": chrono::Utc::now().timestamp() + 600,
        }),
        &jsonwebtoken::EncodingKey::from_secret(b"other-secret"),
    )
    .unwrap();

    let res = client
        .get(format!("{}/api/shoes", srv.base_url))
        .bearer_auth(foreign)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn health_probe_is_open() {
    let srv = TestServer::spawn().await;
    let res = reqwest::get(format!("{}/health", srv.base_url)).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn unmatched_route_is_404() {
    let srv = TestServer::spawn().await;
    let res = reqwest::get(format!("{}/api/nope", srv.base_url)).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn register_issues_token_matching_stored_user() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let (token, user) = register(&client, &srv.base_url, "a@x.com", Some("Nike"), None).await;

    assert_eq!(user["role"], "brand_user");
    assert_eq!(user["brand"], "Nike");
    assert!(user.get("password_hash").is_none());

    let claims = test_codec().verify(&token).unwrap();
    assert_eq!(claims.sub.to_string(), user["id"].as_str().unwrap());
    assert_eq!(claims.role, Role::BrandUser);
    assert_eq!(claims.brand.unwrap().as_str(), "Nike");
}

#[tokio::test]
async fn register_requires_brand_for_brand_users() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/api/auth/register", srv.base_url))
        .json(&json!({ "name": "A", "email": "a@x.com", "password": "pw123" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "missing_field");
}

#[tokio::test]
async fn duplicate_email_is_rejected() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    register(&client, &srv.base_url, "a@x.com", Some("Nike"), None).await;

    let res = client
        .post(format!("{}/api/auth/register", srv.base_url))
        .json(&json!({
            "name": "B",
            "email": "a@x.com",
            "password": "other",
            "brand": "Adidas",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "duplicate_email");

    // No second document was created.
    let (admin_token, _) =
        register(&client, &srv.base_url, "admin@x.com", None, Some("super_admin")).await;
    let res = client
        .get(format!("{}/api/users", srv.base_url))
        .bearer_auth(&admin_token)
        .send()
        .await
        .unwrap();
    let users: Vec<Value> = res.json().await.unwrap();
    let matching = users
        .iter()
        .filter(|u| u["email"] == "a@x.com")
        .count();
    assert_eq!(matching, 1);
}

#[tokio::test]
async fn login_flow_with_generic_credential_errors() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    register(&client, &srv.base_url, "a@x.com", Some("Nike"), None).await;

    // Wrong password and unknown email produce the same generic error.
    for body in [
        json!({ "email": "a@x.com", "password": "wrong" }),
        json!({ "email": "ghost@x.com", "password": "pw123" }),
    ] {
        let res = client
            .post(format!("{}/api/auth/login", srv.base_url))
            .json(&body)
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = res.json().await.unwrap();
        assert_eq!(body["error"], "invalid_credentials");
    }

    let res = client
        .post(format!("{}/api/auth/login", srv.base_url))
        .json(&json!({ "email": "a@x.com", "password": "pw123" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert!(test_codec().verify(body["token"].as_str().unwrap()).is_ok());
}

#[tokio::test]
async fn list_is_brand_scoped() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let (nike, _) = register(&client, &srv.base_url, "n@x.com", Some("Nike"), None).await;
    let (adidas, _) = register(&client, &srv.base_url, "d@x.com", Some("Adidas"), None).await;
    let (admin, _) =
        register(&client, &srv.base_url, "admin@x.com", None, Some("super_admin")).await;

    create_shoe(&client, &srv.base_url, &nike, "Air", "Nike", 120.0).await;
    create_shoe(&client, &srv.base_url, &nike, "Pegasus", "Nike", 130.0).await;
    create_shoe(&client, &srv.base_url, &adidas, "Samba", "Adidas", 90.0).await;

    let nike_view: Vec<Value> = client
        .get(format!("{}/api/shoes", srv.base_url))
        .bearer_auth(&nike)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(nike_view.len(), 2);
    assert!(nike_view.iter().all(|s| s["brand"] == "Nike"));

    // Super admin sees everything, unfiltered.
    let admin_view: Vec<Value> = client
        .get(format!("{}/api/shoes", srv.base_url))
        .bearer_auth(&admin)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(admin_view.len(), 3);
}

#[tokio::test]
async fn cross_brand_writes_are_forbidden() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let (nike, _) = register(&client, &srv.base_url, "n@x.com", Some("Nike"), None).await;
    let (adidas, _) = register(&client, &srv.base_url, "d@x.com", Some("Adidas"), None).await;

    // Create outside own brand.
    let res = client
        .post(format!("{}/api/shoes/create", srv.base_url))
        .bearer_auth(&nike)
        .json(&json!({ "name": "Samba", "brand": "Adidas", "price": 90.0 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    let shoe = create_shoe(&client, &srv.base_url, &nike, "Air", "Nike", 120.0).await;
    let id = shoe["id"].as_str().unwrap();

    // Update/delete a foreign-brand record, regardless of body contents.
    let res = client
        .put(format!("{}/api/shoes/{id}", srv.base_url))
        .bearer_auth(&adidas)
        .json(&json!({ "price": 1.0 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    let res = client
        .delete(format!("{}/api/shoes/{id}", srv.base_url))
        .bearer_auth(&adidas)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    // Brand-hopping on update is blocked even within an owned record.
    let res = client
        .put(format!("{}/api/shoes/{id}", srv.base_url))
        .bearer_auth(&nike)
        .json(&json!({ "brand": "Adidas" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn partial_update_distinguishes_absent_from_zero() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let (nike, _) = register(&client, &srv.base_url, "n@x.com", Some("Nike"), None).await;
    let shoe = create_shoe(&client, &srv.base_url, &nike, "Air", "Nike", 120.0).await;
    let id = shoe["id"].as_str().unwrap();

    // Absent fields keep their stored values.
    let res = client
        .put(format!("{}/api/shoes/{id}", srv.base_url))
        .bearer_auth(&nike)
        .json(&json!({ "description": "classic" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let updated: Value = res.json().await.unwrap();
    assert_eq!(updated["name"], "Air");
    assert_eq!(updated["price"], 120.0);
    assert_eq!(updated["description"], "classic");

    // An explicit zero is applied, not treated as absent.
    let res = client
        .put(format!("{}/api/shoes/{id}", srv.base_url))
        .bearer_auth(&nike)
        .json(&json!({ "price": 0.0 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let updated: Value = res.json().await.unwrap();
    assert_eq!(updated["price"], 0.0);

    // Negative prices are still rejected.
    let res = client
        .put(format!("{}/api/shoes/{id}", srv.base_url))
        .bearer_auth(&nike)
        .json(&json!({ "price": -1.0 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn delete_is_not_found_on_second_call() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let (nike, _) = register(&client, &srv.base_url, "n@x.com", Some("Nike"), None).await;
    let shoe = create_shoe(&client, &srv.base_url, &nike, "Air", "Nike", 120.0).await;
    let id = shoe["id"].as_str().unwrap();

    let res = client
        .delete(format!("{}/api/shoes/{id}", srv.base_url))
        .bearer_auth(&nike)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = client
        .delete(format!("{}/api/shoes/{id}", srv.base_url))
        .bearer_auth(&nike)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn user_management_requires_super_admin() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let (nike, user) = register(&client, &srv.base_url, "n@x.com", Some("Nike"), None).await;
    let (admin, _) =
        register(&client, &srv.base_url, "admin@x.com", None, Some("super_admin")).await;
    let user_id = user["id"].as_str().unwrap();

    // Brand users are locked out of the whole group.
    let res = client
        .get(format!("{}/api/users", srv.base_url))
        .bearer_auth(&nike)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    // Admin moves the user to another brand.
    let res = client
        .put(format!("{}/api/users/{user_id}", srv.base_url))
        .bearer_auth(&admin)
        .json(&json!({ "brand": "Puma" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let updated: Value = res.json().await.unwrap();
    assert_eq!(updated["brand"], "Puma");

    // Promoting to super_admin clears the brand scope.
    let res = client
        .put(format!("{}/api/users/{user_id}", srv.base_url))
        .bearer_auth(&admin)
        .json(&json!({ "role": "super_admin" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let updated: Value = res.json().await.unwrap();
    assert_eq!(updated["role"], "super_admin");
    assert!(updated.get("brand").is_none());

    // Delete, then delete again.
    let res = client
        .delete(format!("{}/api/users/{user_id}", srv.base_url))
        .bearer_auth(&admin)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = client
        .delete(format!("{}/api/users/{user_id}", srv.base_url))
        .bearer_auth(&admin)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
