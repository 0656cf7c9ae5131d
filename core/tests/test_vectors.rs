//! Verify service operations against JSON test vectors stored in `test-vectors/`.
//!
//! Each vector file describes inputs, expected requests, simulated responses,
//! and expected results or error statuses. Comparing parsed JSON (not raw
//! strings) avoids false negatives from field-ordering differences.

use std::cell::RefCell;
use std::fmt::Debug;

use serde::de::DeserializeOwned;
use serde_json::Value;
use travis_core::{
    ApiError, Client, ClientConfig, EnvironmentVariable, EnvironmentVariablesListOptions, Hook, HookListOptions,
    HttpMethod, HttpRequest, HttpResponse, Response, Transport,
};

const BASE_URL: &str = "http://localhost:3000";

/// Answers every request with one simulated response and keeps the requests.
struct CannedTransport {
    response: HttpResponse,
    requests: RefCell<Vec<HttpRequest>>,
}

impl Transport for CannedTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        self.requests.borrow_mut().push(request.clone());
        Ok(self.response.clone())
    }
}

fn client_for(case: &Value) -> Client<CannedTransport> {
    let sim = &case["simulated_response"];
    let transport = CannedTransport {
        response: HttpResponse {
            status: sim["status"].as_u64().unwrap() as u16,
            headers: Vec::new(),
            body: sim["body"].as_str().unwrap().to_string(),
        },
        requests: RefCell::new(Vec::new()),
    };
    Client::with_transport(ClientConfig::new(BASE_URL), transport)
}

/// Parse the method string from test vectors into `HttpMethod`.
fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        "PUT" => HttpMethod::Put,
        "PATCH" => HttpMethod::Patch,
        "DELETE" => HttpMethod::Delete,
        other => panic!("unknown method: {other}"),
    }
}

fn check<R>(case: &Value, client: &Client<CannedTransport>, result: Result<Response<R>, ApiError>)
where
    R: DeserializeOwned + PartialEq + Debug,
{
    let name = case["name"].as_str().unwrap();
    let expected_req = &case["expected_request"];

    // Verify build
    let requests = client.transport().requests.borrow();
    assert_eq!(requests.len(), 1, "{name}: exactly one request");
    let req = &requests[0];
    assert_eq!(req.method, parse_method(expected_req["method"].as_str().unwrap()), "{name}: method");
    assert_eq!(req.url, format!("{BASE_URL}{}", expected_req["path"].as_str().unwrap()), "{name}: url");
    match req.body.as_deref() {
        Some(body) => {
            let sent: Value = serde_json::from_str(body).unwrap();
            assert_eq!(sent, expected_req["body"], "{name}: body");
        }
        None => assert!(expected_req["body"].is_null(), "{name}: body should be None"),
    }

    // Verify parse
    if let Some(status) = case.get("expected_error_status") {
        let err = result.unwrap_err();
        assert!(matches!(err, ApiError::HttpError { .. }), "{name}: expected HttpError, got {err}");
        assert_eq!(err.status(), status.as_u64().map(|s| s as u16), "{name}: status");
    } else {
        let resp = result.unwrap();
        let expected: R = serde_json::from_value(case["expected_result"].clone()).unwrap();
        assert_eq!(resp.value, expected, "{name}: parsed result");
        assert_eq!(resp.raw.status, case["simulated_response"]["status"].as_u64().unwrap() as u16);
    }
}

fn env_var_input(case: &Value) -> (u64, EnvironmentVariable) {
    let input = &case["input"];
    let repository_id = input["repository_id"].as_u64().unwrap();
    let env_var = serde_json::from_value(input["env_var"].clone()).unwrap();
    (repository_id, env_var)
}

// ---------------------------------------------------------------------------
// Environment variables
// ---------------------------------------------------------------------------

#[test]
fn env_var_test_vectors() {
    let raw = include_str!("../../test-vectors/env_vars.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let client = client_for(case);
        let service = client.env_vars();
        match case["operation"].as_str().unwrap() {
            "list" => {
                let opts = EnvironmentVariablesListOptions {
                    repository_id: case["input"]["options"]["repository_id"].as_u64().unwrap(),
                };
                check(case, &client, service.list(&opts));
            }
            "get" => {
                let input = &case["input"];
                let result = service.get(
                    input["id"].as_str().unwrap(),
                    input["repository_id"].as_u64().unwrap(),
                );
                check(case, &client, result);
            }
            "create" => {
                let (repository_id, env_var) = env_var_input(case);
                check(case, &client, service.create(repository_id, &env_var));
            }
            "update" => {
                let (repository_id, env_var) = env_var_input(case);
                check(case, &client, service.update(repository_id, &env_var));
            }
            "delete" => {
                let (repository_id, env_var) = env_var_input(case);
                check(case, &client, service.delete(repository_id, &env_var));
            }
            other => panic!("unknown operation: {other}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Hooks
// ---------------------------------------------------------------------------

#[test]
fn hook_test_vectors() {
    let raw = include_str!("../../test-vectors/hooks.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let client = client_for(case);
        let service = client.hooks();
        match case["operation"].as_str().unwrap() {
            "list" => {
                let options = &case["input"]["options"];
                let opts = HookListOptions {
                    all: options["all"].as_bool().unwrap(),
                    order: options["order"].as_str().unwrap().to_string(),
                    owner_name: options["owner_name"].as_str().unwrap().to_string(),
                };
                check(case, &client, service.list(&opts));
            }
            "update" => {
                let hook: Hook = serde_json::from_value(case["input"]["hook"].clone()).unwrap();
                check(case, &client, service.update(&hook));
            }
            other => panic!("unknown operation: {other}"),
        }
    }
}
