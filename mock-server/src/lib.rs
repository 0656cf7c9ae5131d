use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvVar {
    pub id: String,
    pub name: String,
    pub value: String,
    pub public: bool,
    pub repository_id: u64,
}

/// Wire form of an env var: private values are never returned.
#[derive(Debug, Serialize, Deserialize)]
pub struct EnvVarView {
    pub id: String,
    pub name: String,
    pub value: Option<String>,
    pub public: bool,
    pub repository_id: u64,
}

impl From<&EnvVar> for EnvVarView {
    fn from(var: &EnvVar) -> Self {
        Self {
            id: var.id.clone(),
            name: var.name.clone(),
            value: var.public.then(|| var.value.clone()),
            public: var.public,
            repository_id: var.repository_id,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hook {
    pub id: u64,
    pub name: String,
    pub owner_name: String,
    pub description: String,
    pub active: bool,
    pub private: bool,
    pub admin: bool,
}

#[derive(Deserialize)]
pub struct EnvVarInput {
    pub name: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub public: bool,
}

#[derive(Deserialize)]
pub struct EnvVarBody {
    pub env_var: EnvVarInput,
}

#[derive(Deserialize)]
pub struct HookInput {
    pub active: bool,
}

#[derive(Deserialize)]
pub struct HookBody {
    pub hook: HookInput,
}

#[derive(Deserialize)]
pub struct RepositoryQuery {
    pub repository_id: Option<u64>,
}

#[derive(Deserialize)]
pub struct HookQuery {
    #[serde(default)]
    pub all: bool,
    pub order: Option<String>,
    pub owner_name: Option<String>,
}

#[derive(Debug, Default)]
pub struct Store {
    pub env_vars: Vec<EnvVar>,
    pub hooks: Vec<Hook>,
}

pub type Db = Arc<RwLock<Store>>;

/// Hooks every fresh server starts with. The caller administers the first two.
pub fn fixture_hooks() -> Vec<Hook> {
    let hook = |id, name: &str, owner: &str, active, private, admin| Hook {
        id,
        name: name.to_string(),
        owner_name: owner.to_string(),
        description: format!("{owner}/{name}"),
        active,
        private,
        admin,
    };
    vec![
        hook(1, "go-travis", "Ableton", true, false, true),
        hook(2, "push", "Ableton", false, true, true),
        hook(3, "rails", "rails", true, false, false),
    ]
}

pub fn seeded() -> Db {
    Arc::new(RwLock::new(Store {
        env_vars: Vec::new(),
        hooks: fixture_hooks(),
    }))
}

pub fn app() -> Router {
    app_with_state(seeded())
}

pub fn app_with_state(db: Db) -> Router {
    Router::new()
        .route("/settings/env_vars", get(list_env_vars).post(create_env_var))
        .route(
            "/settings/env_vars/{id}",
            get(get_env_var).patch(update_env_var).delete(delete_env_var),
        )
        .route("/hooks", get(list_hooks))
        .route("/hooks/{id}", put(update_hook))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn required_repository(query: &RepositoryQuery) -> Result<u64, StatusCode> {
    query.repository_id.ok_or(StatusCode::UNPROCESSABLE_ENTITY)
}

fn find_index(store: &Store, id: &str, repository_id: u64) -> Result<usize, StatusCode> {
    store
        .env_vars
        .iter()
        .position(|v| v.id == id && v.repository_id == repository_id)
        .ok_or(StatusCode::NOT_FOUND)
}

fn env_var_json(var: &EnvVar) -> Json<serde_json::Value> {
    Json(serde_json::json!({ "env_var": EnvVarView::from(var) }))
}

async fn list_env_vars(
    State(db): State<Db>,
    Query(query): Query<RepositoryQuery>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let repository_id = required_repository(&query)?;
    let store = db.read().await;
    let vars: Vec<EnvVarView> = store
        .env_vars
        .iter()
        .filter(|v| v.repository_id == repository_id)
        .map(EnvVarView::from)
        .collect();
    Ok(Json(serde_json::json!({ "env_vars": vars })))
}

async fn create_env_var(
    State(db): State<Db>,
    Query(query): Query<RepositoryQuery>,
    Json(body): Json<EnvVarBody>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let repository_id = required_repository(&query)?;
    let var = EnvVar {
        id: Uuid::new_v4().to_string(),
        name: body.env_var.name,
        value: body.env_var.value,
        public: body.env_var.public,
        repository_id,
    };
    log::debug!("created env var {} in repository {}", var.id, repository_id);
    let response = env_var_json(&var);
    db.write().await.env_vars.push(var);
    Ok(response)
}

async fn get_env_var(
    State(db): State<Db>,
    Path(id): Path<String>,
    Query(query): Query<RepositoryQuery>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let repository_id = required_repository(&query)?;
    let store = db.read().await;
    let index = find_index(&store, &id, repository_id)?;
    Ok(env_var_json(&store.env_vars[index]))
}

async fn update_env_var(
    State(db): State<Db>,
    Path(id): Path<String>,
    Query(query): Query<RepositoryQuery>,
    Json(body): Json<EnvVarBody>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let repository_id = required_repository(&query)?;
    let mut store = db.write().await;
    let index = find_index(&store, &id, repository_id)?;
    let var = &mut store.env_vars[index];
    var.name = body.env_var.name;
    var.value = body.env_var.value;
    var.public = body.env_var.public;
    log::debug!("updated env var {id}");
    Ok(env_var_json(var))
}

async fn delete_env_var(
    State(db): State<Db>,
    Path(id): Path<String>,
    Query(query): Query<RepositoryQuery>,
    Json(_body): Json<EnvVarBody>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let repository_id = required_repository(&query)?;
    let mut store = db.write().await;
    let index = find_index(&store, &id, repository_id)?;
    let var = store.env_vars.remove(index);
    log::debug!("deleted env var {id}");
    Ok(env_var_json(&var))
}

async fn list_hooks(State(db): State<Db>, Query(query): Query<HookQuery>) -> Json<serde_json::Value> {
    let store = db.read().await;
    let mut hooks: Vec<Hook> = store
        .hooks
        .iter()
        .filter(|h| query.all || h.admin)
        .filter(|h| query.owner_name.as_deref().map_or(true, |owner| h.owner_name == owner))
        .cloned()
        .collect();
    match query.order.as_deref() {
        Some("name") => hooks.sort_by(|a, b| a.name.cmp(&b.name)),
        _ => hooks.sort_by_key(|h| h.id),
    }
    Json(serde_json::json!({ "hooks": hooks }))
}

async fn update_hook(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(body): Json<HookBody>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let mut store = db.write().await;
    let hook = store.hooks.iter_mut().find(|h| h.id == id).ok_or(StatusCode::NOT_FOUND)?;
    hook.active = body.hook.active;
    log::debug!("hook {id} active={}", hook.active);
    Ok(Json(serde_json::json!({ "result": true })))
}
