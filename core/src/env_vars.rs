//! Settings environment variables of a repository.
//!
//! Every operation but `list` is scoped by `repository_id`, sent as a query
//! parameter even though it identifies the owner of the path's resource.

use serde::{Deserialize, Serialize};

use crate::client::{url_with_options, Client};
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, Response, Transport};
use crate::types::{EnvironmentVariable, EnvironmentVariablesListOptions};

const PATH: &str = "/settings/env_vars";

#[derive(Serialize)]
struct RepositoryScope {
    repository_id: u64,
}

#[derive(Deserialize)]
struct ListEnvVarsEnvelope {
    env_vars: Vec<EnvironmentVariable>,
}

#[derive(Serialize, Deserialize)]
struct EnvVarEnvelope<T> {
    env_var: T,
}

/// Operations on `/settings/env_vars`.
#[derive(Debug)]
pub struct EnvironmentVariablesService<'a, T> {
    client: &'a Client<T>,
}

impl<'a, T: Transport> EnvironmentVariablesService<'a, T> {
    pub(crate) fn new(client: &'a Client<T>) -> Self {
        Self { client }
    }

    /// List environment variables, in server order.
    pub fn list(
        &self,
        options: &EnvironmentVariablesListOptions,
    ) -> Result<Response<Vec<EnvironmentVariable>>, ApiError> {
        let url = url_with_options(PATH, Some(options))?;
        let req = self.client.new_request(HttpMethod::Get, &url, &[])?;
        let resp = self.client.execute::<ListEnvVarsEnvelope>(req)?;
        Ok(resp.map(|envelope| envelope.env_vars))
    }

    pub fn get(&self, id: &str, repository_id: u64) -> Result<Response<EnvironmentVariable>, ApiError> {
        let url = scoped_url(id, repository_id)?;
        let req = self.client.new_request(HttpMethod::Get, &url, &[])?;
        self.send(req)
    }

    /// Create `env_var` under the repository. The server assigns the id.
    pub fn create(
        &self,
        repository_id: u64,
        env_var: &EnvironmentVariable,
    ) -> Result<Response<EnvironmentVariable>, ApiError> {
        let url = url_with_options(PATH, Some(&RepositoryScope { repository_id }))?;
        let req = self
            .client
            .new_json_request(HttpMethod::Post, &url, &EnvVarEnvelope { env_var }, &[])?;
        self.send(req)
    }

    /// Overwrite the variable identified by `env_var.id` with the supplied fields.
    pub fn update(
        &self,
        repository_id: u64,
        env_var: &EnvironmentVariable,
    ) -> Result<Response<EnvironmentVariable>, ApiError> {
        let url = scoped_url(&env_var.id, repository_id)?;
        let req = self
            .client
            .new_json_request(HttpMethod::Patch, &url, &EnvVarEnvelope { env_var }, &[])?;
        self.send(req)
    }

    /// Delete the variable identified by `env_var.id`. The entity travels in
    /// the request body as well, which the API accepts on DELETE.
    pub fn delete(
        &self,
        repository_id: u64,
        env_var: &EnvironmentVariable,
    ) -> Result<Response<EnvironmentVariable>, ApiError> {
        let url = scoped_url(&env_var.id, repository_id)?;
        let req = self
            .client
            .new_json_request(HttpMethod::Delete, &url, &EnvVarEnvelope { env_var }, &[])?;
        self.send(req)
    }

    fn send(&self, req: HttpRequest) -> Result<Response<EnvironmentVariable>, ApiError> {
        let resp = self
            .client
            .execute::<EnvVarEnvelope<EnvironmentVariable>>(req)?;
        Ok(resp.map(|envelope| envelope.env_var))
    }
}

/// `PATH/<id>?repository_id=..`, with `id` encoded as a single segment.
fn scoped_url(id: &str, repository_id: u64) -> Result<String, ApiError> {
    if id.is_empty() || id == "." || id == ".." {
        return Err(ApiError::InvalidId(id.to_string()));
    }
    let segment = urlencoding::encode(id);
    url_with_options(&format!("{PATH}/{segment}"), Some(&RepositoryScope { repository_id }))
}
