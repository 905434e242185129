#![allow(dead_code)]

use axum::{http::StatusCode, response::IntoResponse, routing::post, Json, Router};
use recipe_service::config::{InferenceConfig, RecipeConfig};
use recipe_service::startup::Application;
use serde_json::{json, Value};
use service_core::config::Config as CoreConfig;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

pub const TEST_MODEL: &str = "llama3-test";

/// How the stub inference endpoint behaves.
#[derive(Clone)]
pub enum Upstream {
    /// 200 with `{"response": <text>}`.
    Generates(String),
    /// 200 with the given body verbatim, no envelope.
    Answers(String),
    /// Bare status code with a text body.
    Fails(u16),
    /// Sleeps before answering.
    Hangs(Duration),
    /// Nothing listening on the configured address.
    Unreachable,
}

#[derive(Clone, Default)]
pub struct UpstreamLog {
    calls: Arc<AtomicUsize>,
    last_body: Arc<Mutex<Option<Value>>>,
}

impl UpstreamLog {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_body(&self) -> Option<Value> {
        self.last_body.lock().unwrap().clone()
    }
}

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub upstream: UpstreamLog,
}

impl TestApp {
    pub async fn spawn(upstream: Upstream) -> Self {
        Self::spawn_with_timeout(upstream, Duration::from_secs(5)).await
    }

    pub async fn spawn_with_timeout(upstream: Upstream, timeout: Duration) -> Self {
        let log = UpstreamLog::default();
        let url = spawn_upstream(upstream, log.clone()).await;

        let config = RecipeConfig {
            common: CoreConfig { port: 0 }, // Random port for testing
            inference: InferenceConfig {
                url,
                model: TEST_MODEL.to_string(),
                timeout,
            },
        };

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for HTTP server to be ready by polling health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            upstream: log,
        }
    }

    pub async fn generate(&self, body: &Value) -> reqwest::Response {
        reqwest::Client::new()
            .post(format!("{}/generate-recipes", self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }
}

async fn spawn_upstream(behaviour: Upstream, log: UpstreamLog) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub upstream");
    let addr = listener.local_addr().unwrap();
    let url = format!("http://{}/api/generate", addr);

    if let Upstream::Unreachable = behaviour {
        drop(listener);
        return url;
    }

    let router = Router::new().route(
        "/api/generate",
        post(move |Json(body): Json<Value>| {
            let behaviour = behaviour.clone();
            let log = log.clone();
            async move {
                log.calls.fetch_add(1, Ordering::SeqCst);
                *log.last_body.lock().unwrap() = Some(body);

                match behaviour {
                    Upstream::Generates(text) => {
                        Json(json!({"model": TEST_MODEL, "response": text, "done": true}))
                            .into_response()
                    }
                    Upstream::Answers(body) => body.into_response(),
                    Upstream::Fails(code) => (
                        StatusCode::from_u16(code).unwrap(),
                        "stub upstream failure",
                    )
                        .into_response(),
                    Upstream::Hangs(delay) => {
                        tokio::time::sleep(delay).await;
                        Json(json!({"response": "{}"})).into_response()
                    }
                    Upstream::Unreachable => unreachable!(),
                }
            }
        }),
    );

    tokio::spawn(async move {
        axum::serve(listener, router).await.ok();
    });

    url
}
