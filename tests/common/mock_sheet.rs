//! Mock sheet-script endpoint for integration tests.
//!
//! Serves the same contract as the real spreadsheet automation: a JSON
//! array of Japanese-keyed rows on `GET ?action=get`, and
//! `{status: success|error}` replies to `action`-tagged POST bodies. Keeps
//! a live row table so round trips can be asserted through a reload.

#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::extract::State;
use axum::http::{header, Method, Request, Response, StatusCode};
use axum::routing::any;
use axum::Router;
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

#[derive(Default)]
struct SheetState {
    rows: Vec<Value>,
    next_id: i64,
    captured: Vec<Value>,
    get_count: usize,
    fail_next_get: bool,
}

pub struct MockSheet {
    addr: SocketAddr,
    state: Arc<Mutex<SheetState>>,
}

impl MockSheet {
    pub async fn start() -> Self {
        let state = Arc::new(Mutex::new(SheetState {
            next_id: 1,
            ..SheetState::default()
        }));

        let router = Router::new()
            .route("/", any(handle))
            .with_state(state.clone());
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        Self { addr, state }
    }

    pub fn url(&self) -> String {
        format!("http://{}/", self.addr)
    }

    /// Seed one Japanese-keyed row, bumping the ID allocator past it.
    pub async fn seed_row(&self, row: Value) {
        let mut state = self.state.lock().await;
        if let Some(id) = row.get("商品ID").and_then(Value::as_i64) {
            state.next_id = state.next_id.max(id + 1);
        }
        state.rows.push(row);
    }

    pub async fn rows(&self) -> Vec<Value> {
        self.state.lock().await.rows.clone()
    }

    pub async fn stock_of(&self, id: i64) -> Option<i64> {
        self.state
            .lock()
            .await
            .rows
            .iter()
            .find(|row| row["商品ID"].as_i64() == Some(id))
            .and_then(|row| coerce(&row["現在在庫数"]))
    }

    /// Bodies of every POST received, in order.
    pub async fn captured(&self) -> Vec<Value> {
        self.state.lock().await.captured.clone()
    }

    pub async fn get_count(&self) -> usize {
        self.state.lock().await.get_count
    }

    /// Make the next GET answer with HTTP 500.
    pub async fn fail_next_get(&self) {
        self.state.lock().await.fail_next_get = true;
    }
}

async fn handle(
    State(state): State<Arc<Mutex<SheetState>>>,
    req: Request<Body>,
) -> Response<Body> {
    let method = req.method().clone();
    let query = req.uri().query().unwrap_or("").to_string();

    if method == Method::GET {
        let mut state = state.lock().await;
        if state.fail_next_get {
            state.fail_next_get = false;
            return plain_response(StatusCode::INTERNAL_SERVER_ERROR, "boom");
        }
        if !query.contains("action=get") {
            return plain_response(StatusCode::BAD_REQUEST, "unknown action");
        }
        state.get_count += 1;
        return json_response(&Value::Array(state.rows.clone()));
    }

    let bytes = to_bytes(req.into_body(), usize::MAX).await.unwrap();
    let payload: Value = serde_json::from_slice(&bytes).unwrap();

    let mut state = state.lock().await;
    state.captured.push(payload.clone());
    let reply = apply_mutation(&mut state, &payload);
    json_response(&reply)
}

fn apply_mutation(state: &mut SheetState, payload: &Value) -> Value {
    match payload["action"].as_str() {
        Some("update") => {
            let id = payload["id"].as_i64().unwrap_or(-1);
            let qty = payload["qty"].as_i64().unwrap_or(0);
            let Some(row) = state
                .rows
                .iter_mut()
                .find(|row| row["商品ID"].as_i64() == Some(id))
            else {
                return json!({"status": "error", "message": "商品が見つかりません"});
            };

            let stock = coerce(&row["現在在庫数"]).unwrap_or(0);
            let next = match payload["type"].as_str() {
                Some("in") => stock + qty,
                Some("out") => {
                    if qty > stock {
                        return json!({"status": "error", "message": "在庫が不足しています"});
                    }
                    stock - qty
                }
                _ => return json!({"status": "error", "message": "不明な操作です"}),
            };
            row["現在在庫数"] = json!(next);
            json!({"status": "success"})
        }
        Some("delete") => {
            let id = payload["id"].as_i64().unwrap_or(-1);
            let before = state.rows.len();
            state.rows.retain(|row| row["商品ID"].as_i64() != Some(id));
            if state.rows.len() == before {
                json!({"status": "error", "message": "商品が見つかりません"})
            } else {
                json!({"status": "success"})
            }
        }
        Some("add") => {
            let id = state.next_id;
            state.next_id += 1;

            let mut row = serde_json::Map::new();
            row.insert("商品ID".to_string(), json!(id));
            let columns = [
                ("name", "教科書名"),
                ("publisher", "出版社"),
                ("isbn", "ISBNコード"),
                ("location", "保管場所"),
                ("subject", "教科"),
                ("grade", "学年"),
                ("cost", "単価"),
                ("stock", "現在在庫数"),
                ("alert", "発注点"),
            ];
            for (field, column) in columns {
                if let Some(value) = payload.get(field) {
                    row.insert(column.to_string(), value.clone());
                }
            }
            state.rows.push(Value::Object(row));
            json!({"status": "success"})
        }
        _ => json!({"status": "error", "message": "不明な操作です"}),
    }
}

fn coerce(value: &Value) -> Option<i64> {
    value
        .as_i64()
        .or_else(|| value.as_str().and_then(|s| s.trim().parse().ok()))
}

fn json_response(value: &Value) -> Response<Body> {
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(value.to_string()))
        .unwrap()
}

fn plain_response(status: StatusCode, message: &str) -> Response<Body> {
    Response::builder()
        .status(status)
        .body(Body::from(message.to_string()))
        .unwrap()
}
