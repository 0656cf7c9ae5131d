//! Repository hooks: enabling and disabling CI per repository.

use serde::{Deserialize, Serialize};

use crate::client::{url_with_options, Client};
use crate::error::ApiError;
use crate::http::{HttpMethod, Response, Transport};
use crate::types::{Hook, HookListOptions, HookPutResult};

#[derive(Deserialize)]
struct ListHooksEnvelope {
    hooks: Vec<Hook>,
}

#[derive(Serialize)]
struct HookPutBody<'h> {
    hook: &'h Hook,
}

/// Operations on `/hooks`.
#[derive(Debug)]
pub struct HooksService<'a, T> {
    client: &'a Client<T>,
}

impl<'a, T: Transport> HooksService<'a, T> {
    pub(crate) fn new(client: &'a Client<T>) -> Self {
        Self { client }
    }

    /// List hooks visible to the authenticated caller, in server order.
    pub fn list(&self, options: &HookListOptions) -> Result<Response<Vec<Hook>>, ApiError> {
        let url = url_with_options("/hooks", Some(options))?;
        let req = self.client.new_request(HttpMethod::Get, &url, &[])?;
        let resp = self.client.execute::<ListHooksEnvelope>(req)?;
        Ok(resp.map(|envelope| envelope.hooks))
    }

    /// Replace the hook identified by `hook.id`, typically to flip `active`.
    ///
    /// Only `{"result": bool}` comes back; list again to observe the new state.
    pub fn update(&self, hook: &Hook) -> Result<Response<HookPutResult>, ApiError> {
        let url = url_with_options::<HookListOptions>(&format!("/hooks/{}", hook.id), None)?;
        let req = self
            .client
            .new_json_request(HttpMethod::Put, &url, &HookPutBody { hook }, &[])?;
        self.client.execute(req)
    }
}
