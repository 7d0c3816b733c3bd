//! NSO client: one method per REST operation.

use serde_json::{Value, json};
use tracing::debug;

use crate::config::ServerConfig;
use crate::connection::Connection;
use crate::datastore::DatastoreType;
use crate::error::{ClientError, ClientResult};
use crate::http::{HttpClient, HttpClientUreq, HttpConfig};
use crate::media_type::{MediaHeader, MediaType};
use crate::path::{DataPath, Params};

/// Client for the NSO REST API.
///
/// No combination of datastore, media type and path is validated locally:
/// the server rejects invalid ones and the rejection is returned as
/// [`crate::ConnectionError::UnsuccessfulResponse`].
pub struct NsoClient<C = HttpClientUreq>
where
    C: HttpClient,
{
    connection: Connection<C>,
}

impl NsoClient<HttpClientUreq> {
    /// Connects to `config` through a `ureq` agent sending Basic credentials.
    pub fn new(config: ServerConfig) -> ClientResult<Self> {
        let http_config = HttpConfig::try_from(&config)?;
        Self::with_http_client(&config, HttpClientUreq::new(http_config))
    }
}

impl<C> NsoClient<C>
where
    C: HttpClient,
{
    /// Uses the given transport. Credentials are the transport's concern.
    pub fn with_http_client(config: &ServerConfig, http_client: C) -> ClientResult<Self> {
        Ok(Self {
            connection: Connection::new(config, http_client)?,
        })
    }

    /// Returns the `api` member of the API root, holding the server version.
    pub fn info(&self) -> ClientResult<Value> {
        let mut root = self.connection.get(
            None,
            MediaType::Api,
            MediaHeader::Accept,
            None,
            &Params::new(),
        )?;
        root.get_mut("api")
            .map(Value::take)
            .ok_or(ClientError::MissingField("api"))
    }

    /// Gets the details of a datastore.
    pub fn get_datastore(
        &self,
        datastore: DatastoreType,
        header: MediaHeader,
        params: &Params,
    ) -> ClientResult<Value> {
        Ok(self.connection.get(
            Some(datastore),
            MediaType::Datastore,
            header,
            None,
            params,
        )?)
    }

    /// Gets a data entry in a datastore.
    pub fn get_data(
        &self,
        datastore: DatastoreType,
        data_path: &DataPath,
        header: MediaHeader,
        media_type: MediaType,
        params: &Params,
    ) -> ClientResult<Value> {
        let path = data_path.join();
        debug!(%datastore, %path, "getting data");
        Ok(self
            .connection
            .get(Some(datastore), media_type, header, Some(&path), params)?)
    }

    /// Updates (POST) a data entry in a datastore.
    ///
    /// Returns `true` if successful, an error otherwise.
    pub fn set_data_value(
        &self,
        datastore: DatastoreType,
        data_path: &DataPath,
        data: &Value,
        header: MediaHeader,
        params: &Params,
    ) -> ClientResult<bool> {
        let path = data_path.join();
        debug!(%datastore, %path, "setting data value");
        Ok(self.connection.post(
            Some(datastore),
            MediaType::Data,
            header,
            Some(&path),
            Some(data),
            params,
        )?)
    }

    /// Creates (PUT) a data entry in a datastore.
    ///
    /// Returns `true` if successful, an error otherwise.
    pub fn create_data_value(
        &self,
        datastore: DatastoreType,
        data_path: &DataPath,
        data: &Value,
        header: MediaHeader,
        params: &Params,
    ) -> ClientResult<bool> {
        let path = data_path.join();
        debug!(%datastore, %path, "creating data value");
        Ok(self.connection.put(
            Some(datastore),
            MediaType::Data,
            header,
            Some(&path),
            Some(data),
            params,
        )?)
    }

    /// Deletes a data entry in a datastore.
    ///
    /// Returns `true` if successful, an error otherwise. A missing entry is
    /// reported by the server as 404 and comes back as an error.
    pub fn delete_path(
        &self,
        datastore: DatastoreType,
        data_path: &DataPath,
        header: MediaHeader,
        params: &Params,
    ) -> ClientResult<bool> {
        let path = data_path.join();
        debug!(%datastore, %path, "deleting path");
        Ok(self.connection.delete(
            Some(datastore),
            MediaType::Data,
            header,
            Some(&path),
            params,
        )?)
    }

    /// Lists stored rollbacks.
    pub fn get_rollbacks(&self) -> ClientResult<Value> {
        Ok(self.connection.get(
            Some(DatastoreType::Rollbacks),
            MediaType::Api,
            MediaHeader::Accept,
            None,
            &Params::new(),
        )?)
    }

    /// Gets the content of a stored rollback file.
    pub fn get_rollback(&self, name: &str) -> ClientResult<String> {
        Ok(self.connection.get_plain(
            Some(DatastoreType::Rollbacks),
            MediaType::Api,
            MediaHeader::Accept,
            Some(name),
            &Params::new(),
        )?)
    }

    /// Applies a stored rollback file to `datastore`.
    pub fn apply_rollback(&self, datastore: DatastoreType, name: &str) -> ClientResult<bool> {
        debug!(%datastore, name, "applying rollback");
        Ok(self.connection.post(
            Some(datastore),
            MediaType::Data,
            MediaHeader::ContentType,
            Some("rollback"),
            Some(&json!({ "file": name })),
            &Params::new(),
        )?)
    }
}
