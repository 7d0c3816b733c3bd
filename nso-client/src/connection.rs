//! Connection layer: one HTTP request per call against the NSO REST API.

use http::{Method, Request, Response};
use serde_json::Value;
use tracing::{debug, error, trace};
use url::Url;

use crate::config::ServerConfig;
use crate::datastore::DatastoreType;
use crate::error::{ConnectionError, ConnectionResult};
use crate::http::HttpClient;
use crate::media_type::{MediaHeader, MediaType};
use crate::path::Params;

/// Builds requests below `scheme://host:port/api` and sends them through an [`HttpClient`].
pub struct Connection<C>
where
    C: HttpClient,
{
    api_url: Url,
    client: C,
}

impl<C> Connection<C>
where
    C: HttpClient,
{
    /// Initializes a connection to the server described by `config`.
    pub fn new(config: &ServerConfig, client: C) -> ConnectionResult<Self> {
        Ok(Self {
            api_url: config.api_url()?,
            client,
        })
    }

    /// Root of the REST API this connection talks to.
    pub fn api_url(&self) -> &Url {
        &self.api_url
    }

    /// Builds `<api>[/<datastore>][/<path>][?<params>]`.
    pub fn url(
        &self,
        datastore: Option<DatastoreType>,
        path: Option<&str>,
        params: &Params,
    ) -> ConnectionResult<Url> {
        let mut raw = self.api_url.as_str().trim_end_matches('/').to_string();
        if let Some(datastore) = datastore {
            raw.push('/');
            raw.push_str(datastore.as_str());
        }
        if let Some(path) = path.filter(|p| !p.is_empty()) {
            raw.push('/');
            raw.push_str(path);
        }

        let mut url = Url::parse(&raw)?;
        params.apply(&mut url);
        Ok(url)
    }

    /// GETs a resource and decodes its JSON body. An empty body decodes to [`Value::Null`].
    pub fn get(
        &self,
        datastore: Option<DatastoreType>,
        media_type: MediaType,
        header: MediaHeader,
        path: Option<&str>,
        params: &Params,
    ) -> ConnectionResult<Value> {
        let response = self.request(
            Method::GET,
            datastore,
            media_type,
            header,
            path,
            None,
            params,
        )?;

        let body = response.body();
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }
        serde_json::from_slice(body).map_err(ConnectionError::InvalidJson)
    }

    /// GETs a resource and returns its body as text.
    pub fn get_plain(
        &self,
        datastore: Option<DatastoreType>,
        media_type: MediaType,
        header: MediaHeader,
        path: Option<&str>,
        params: &Params,
    ) -> ConnectionResult<String> {
        let response = self.request(
            Method::GET,
            datastore,
            media_type,
            header,
            path,
            None,
            params,
        )?;
        Ok(String::from_utf8(response.into_body())?)
    }

    /// POSTs `data` as JSON. Returns `true` on a 2xx answer.
    pub fn post(
        &self,
        datastore: Option<DatastoreType>,
        media_type: MediaType,
        header: MediaHeader,
        path: Option<&str>,
        data: Option<&Value>,
        params: &Params,
    ) -> ConnectionResult<bool> {
        self.request(
            Method::POST,
            datastore,
            media_type,
            header,
            path,
            data,
            params,
        )
        .map(|_| true)
    }

    /// PUTs `data` as JSON. Returns `true` on a 2xx answer.
    pub fn put(
        &self,
        datastore: Option<DatastoreType>,
        media_type: MediaType,
        header: MediaHeader,
        path: Option<&str>,
        data: Option<&Value>,
        params: &Params,
    ) -> ConnectionResult<bool> {
        self.request(
            Method::PUT,
            datastore,
            media_type,
            header,
            path,
            data,
            params,
        )
        .map(|_| true)
    }

    /// DELETEs a resource. Returns `true` on a 2xx answer.
    pub fn delete(
        &self,
        datastore: Option<DatastoreType>,
        media_type: MediaType,
        header: MediaHeader,
        path: Option<&str>,
        params: &Params,
    ) -> ConnectionResult<bool> {
        self.request(
            Method::DELETE,
            datastore,
            media_type,
            header,
            path,
            None,
            params,
        )
        .map(|_| true)
    }

    #[allow(clippy::too_many_arguments)]
    fn request(
        &self,
        method: Method,
        datastore: Option<DatastoreType>,
        media_type: MediaType,
        header: MediaHeader,
        path: Option<&str>,
        data: Option<&Value>,
        params: &Params,
    ) -> ConnectionResult<Response<Vec<u8>>> {
        let url = self.url(datastore, path, params)?;
        let body = match data {
            Some(data) => serde_json::to_vec(data).map_err(ConnectionError::Serialize)?,
            None => Vec::new(),
        };

        debug!(%method, %url, "sending request");
        let request = Request::builder()
            .method(method.clone())
            .uri(url.as_str())
            .header(header.header_name(), media_type.mime())
            .body(body)?;

        let response = self.client.send(request)?;

        // return error if status code is not within 200-299.
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = String::from_utf8_lossy(response.body()).into_owned();
            error!(%method, %url, status, "unsuccessful response");
            return Err(ConnectionError::UnsuccessfulResponse { status, body });
        }

        trace!(
            %method,
            %url,
            body = %String::from_utf8_lossy(response.body()),
            "received response"
        );
        Ok(response)
    }
}
