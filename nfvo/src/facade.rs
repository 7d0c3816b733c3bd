//! NFVO facade: VNF deployment records and VNF descriptors.

use std::io;
use std::path::{Component, Path, PathBuf};

use nso_client::http::{HttpClient, HttpClientUreq};
use nso_client::{DataPath, DatastoreType, MediaHeader, MediaType, NsoClient, Params};
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::NfvoConfig;
use crate::error::{NfvoError, NfvoResult};
use crate::key::DeploymentKey;

const ESC_DEPLOYMENTS: &str = "/tailf-nfvo-esc:esc/vnf-deployment";
const DEPLOYMENT: &str = "/tailf-nfvo-esc:vnf-deployment";
const COLLECTION: &str = "/collection";
const VERSION: &str = "/version";

fn vnfr_root() -> DataPath {
    DataPath::from(["nfvo", "vnfr", "nfvo-esc:esc"])
}

fn vnfr_path(key: &DeploymentKey) -> DataPath {
    vnfr_root().with("vnf-deployment").with(key.to_string())
}

fn vnfd_root() -> DataPath {
    DataPath::from(["nfvo", "vnfd"])
}

fn deep() -> Params {
    Params::new().flag("deep")
}

/// NFVO operations against one NSO server.
pub struct Nfvo<C = HttpClientUreq>
where
    C: HttpClient,
{
    client: NsoClient<C>,
    vnfr_dir: PathBuf,
    vnfd_dir: PathBuf,
}

impl Nfvo<HttpClientUreq> {
    /// Connects to the server in `config` over HTTP(S) with Basic credentials.
    pub fn new(config: NfvoConfig) -> NfvoResult<Self> {
        Ok(Self {
            client: NsoClient::new(config.server)?,
            vnfr_dir: config.vnfr_dir,
            vnfd_dir: config.vnfd_dir,
        })
    }
}

impl<C> Nfvo<C>
where
    C: HttpClient,
{
    /// Uses the given transport.
    pub fn with_http_client(config: NfvoConfig, http_client: C) -> NfvoResult<Self> {
        Ok(Self {
            client: NsoClient::with_http_client(&config.server, http_client)?,
            vnfr_dir: config.vnfr_dir,
            vnfd_dir: config.vnfd_dir,
        })
    }

    /// The underlying NSO client.
    pub fn client(&self) -> &NsoClient<C> {
        &self.client
    }

    /// Version of the NSO REST API.
    pub fn get_api_version(&self) -> NfvoResult<String> {
        let mut api = self.client.info()?;
        match api.pointer_mut(VERSION).map(Value::take) {
            Some(Value::String(version)) => Ok(version),
            _ => Err(NfvoError::MissingField(VERSION)),
        }
    }

    /// All VNF deployments known to the ESC.
    pub fn get_nfvo_vnfrs(&self) -> NfvoResult<Value> {
        let esc = self.client.get_data(
            DatastoreType::Running,
            &vnfr_root(),
            MediaHeader::Accept,
            MediaType::Data,
            &deep(),
        )?;
        member(esc, ESC_DEPLOYMENTS)
    }

    /// Configuration of one VNF deployment.
    pub fn get_nfvo_vnfr(&self, key: &DeploymentKey) -> NfvoResult<Value> {
        self.vnfr(DatastoreType::Running, key)
    }

    /// Operational status of one VNF deployment.
    pub fn get_nfvo_vnfr_status(&self, key: &DeploymentKey) -> NfvoResult<Value> {
        self.vnfr(DatastoreType::Operational, key)
    }

    /// Creates a VNF deployment from the JSON payload `vnfr_file` in the VNFR directory.
    ///
    /// A missing or malformed payload is reported as
    /// [`NfvoError::PayloadRead`] or [`NfvoError::PayloadParse`] and nothing is sent.
    pub fn create_nfvo_vnfr(&self, vnfr_file: &str) -> NfvoResult<bool> {
        let vnfr = load_payload(&self.vnfr_dir, vnfr_file)?;
        debug!(vnfr_file, "creating vnf deployment");
        Ok(self.client.set_data_value(
            DatastoreType::Running,
            &vnfr_root(),
            &vnfr,
            MediaHeader::ContentType,
            &Params::new(),
        )?)
    }

    /// Removes a VNF deployment.
    pub fn delete_nfvo_vnfr(&self, key: &DeploymentKey) -> NfvoResult<bool> {
        debug!(%key, "deleting vnf deployment");
        Ok(self.client.delete_path(
            DatastoreType::Running,
            &vnfr_path(key),
            MediaHeader::Accept,
            &Params::new(),
        )?)
    }

    /// All VNF descriptors.
    pub fn get_nfvo_vnfds(&self) -> NfvoResult<Value> {
        let vnfds = self.client.get_data(
            DatastoreType::Running,
            &vnfd_root(),
            MediaHeader::Accept,
            MediaType::Collection,
            &deep(),
        )?;
        member(vnfds, COLLECTION)
    }

    /// One VNF descriptor, as returned by the server.
    pub fn get_nfvo_vnfd(&self, vnfd_name: &str) -> NfvoResult<Value> {
        Ok(self.client.get_data(
            DatastoreType::Running,
            &vnfd_root().with(vnfd_name),
            MediaHeader::Accept,
            MediaType::Data,
            &deep(),
        )?)
    }

    /// Creates a VNF descriptor from the JSON payload `vnfd_file` in the VNFD directory.
    ///
    /// The payload is posted under `nfvo`, so it carries the `vnfd` list itself.
    pub fn create_nfvo_vnfd(&self, vnfd_file: &str) -> NfvoResult<bool> {
        let vnfd = load_payload(&self.vnfd_dir, vnfd_file)?;
        debug!(vnfd_file, "creating vnf descriptor");
        Ok(self.client.set_data_value(
            DatastoreType::Running,
            &DataPath::from(["nfvo"]),
            &vnfd,
            MediaHeader::ContentType,
            &Params::new(),
        )?)
    }

    /// Removes a VNF descriptor.
    pub fn delete_nfvo_vnfd(&self, vnfd_name: &str) -> NfvoResult<bool> {
        debug!(vnfd_name, "deleting vnf descriptor");
        Ok(self.client.delete_path(
            DatastoreType::Running,
            &vnfd_root().with(vnfd_name),
            MediaHeader::Accept,
            &Params::new(),
        )?)
    }

    fn vnfr(&self, datastore: DatastoreType, key: &DeploymentKey) -> NfvoResult<Value> {
        let deployment = self.client.get_data(
            datastore,
            &vnfr_path(key),
            MediaHeader::Accept,
            MediaType::Data,
            &deep(),
        )?;
        member(deployment, DEPLOYMENT)
    }
}

// Extracts the value at a JSON pointer.
fn member(mut value: Value, pointer: &'static str) -> NfvoResult<Value> {
    value
        .pointer_mut(pointer)
        .map(Value::take)
        .ok_or(NfvoError::MissingField(pointer))
}

// Payload names stay below `dir`: absolute names and `..` are refused.
fn load_payload(dir: &Path, file: &str) -> NfvoResult<Value> {
    let path = dir.join(file);
    let inside_dir = Path::new(file)
        .components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
    if !inside_dir {
        let err = NfvoError::PayloadRead {
            path,
            source: io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("payload name `{file}` leaves `{}`", dir.display()),
            ),
        };
        warn!(%err, "payload not loaded");
        return Err(err);
    }

    let content = std::fs::read_to_string(&path)
        .map_err(|source| NfvoError::PayloadRead {
            path: path.clone(),
            source,
        })
        .inspect_err(|err| warn!(%err, "payload not loaded"))?;

    serde_json::from_str(&content)
        .map_err(|source| NfvoError::PayloadParse { path, source })
        .inspect_err(|err| warn!(%err, "payload not loaded"))
}

#[cfg(test)]
mod test {
    use std::fs;

    use assert_matches::assert_matches;
    use http::{Method, Request, StatusCode};
    use nso_client::http::test_utils::MockHttpClientMockall;
    use nso_client::{ClientError, ConnectionError, ServerConfig};
    use serde_json::json;
    use tempfile::TempDir;
    use tracing_test::traced_test;

    use super::*;

    struct Payloads {
        vnfr: TempDir,
        vnfd: TempDir,
    }

    impl Payloads {
        fn new() -> Self {
            Self {
                vnfr: TempDir::new().unwrap(),
                vnfd: TempDir::new().unwrap(),
            }
        }

        fn config(&self) -> NfvoConfig {
            NfvoConfig::new(ServerConfig::new("nso.local", "admin", "admin"))
                .with_vnfr_dir(self.vnfr.path())
                .with_vnfd_dir(self.vnfd.path())
        }
    }

    fn nfvo(payloads: &Payloads, http_client: MockHttpClientMockall) -> Nfvo<MockHttpClientMockall> {
        Nfvo::with_http_client(payloads.config(), http_client).unwrap()
    }

    fn body(request: &Request<Vec<u8>>) -> Value {
        serde_json::from_slice(request.body()).unwrap()
    }

    #[test]
    fn api_version() {
        let mut http_client = MockHttpClientMockall::new();
        http_client.should_send_when(
            |request| request.uri().path() == "/api",
            StatusCode::OK,
            r#"{"api": {"version": "0.5"}}"#,
        );

        let payloads = Payloads::new();
        assert_eq!(nfvo(&payloads, http_client).get_api_version().unwrap(), "0.5");
    }

    #[test]
    fn api_version_missing() {
        let mut http_client = MockHttpClientMockall::new();
        http_client.should_send_when(|_| true, StatusCode::OK, r#"{"api": {}}"#);

        let payloads = Payloads::new();
        assert_matches!(
            nfvo(&payloads, http_client).get_api_version(),
            Err(NfvoError::MissingField("/version"))
        );
    }

    #[test]
    fn list_vnfrs() {
        let mut http_client = MockHttpClientMockall::new();
        http_client.should_send_when(
            |request| {
                request.method() == Method::GET
                    && request.uri().path() == "/api/running/nfvo/vnfr/nfvo-esc:esc"
                    && request.uri().query() == Some("deep")
                    && request.headers().get("accept").unwrap() == "application/vnd.yang.data+json"
            },
            StatusCode::OK,
            r#"{"tailf-nfvo-esc:esc": {"vnf-deployment": [{"tenant": "t1", "deployment-name": "dep1", "esc": "esc1"}]}}"#,
        );

        let payloads = Payloads::new();
        let vnfrs = nfvo(&payloads, http_client).get_nfvo_vnfrs().unwrap();
        assert_eq!(
            vnfrs,
            json!([{"tenant": "t1", "deployment-name": "dep1", "esc": "esc1"}])
        );
    }

    #[test]
    fn get_vnfr_and_status() {
        let deployment = r#"{"tailf-nfvo-esc:vnf-deployment": {"tenant": "t1", "deployment-name": "dep1", "esc": "esc1"}}"#;
        let mut http_client = MockHttpClientMockall::new();
        http_client.should_send_when(
            |request| {
                request.uri().path()
                    == "/api/running/nfvo/vnfr/nfvo-esc:esc/vnf-deployment/t1,dep1,esc1"
            },
            StatusCode::OK,
            deployment,
        );
        http_client.should_send_when(
            |request| {
                request.uri().path()
                    == "/api/operational/nfvo/vnfr/nfvo-esc:esc/vnf-deployment/t1,dep1,esc1"
            },
            StatusCode::OK,
            deployment,
        );

        let payloads = Payloads::new();
        let nfvo = nfvo(&payloads, http_client);
        let key = DeploymentKey::new("t1", "dep1", "esc1");

        let expected = json!({"tenant": "t1", "deployment-name": "dep1", "esc": "esc1"});
        assert_eq!(nfvo.get_nfvo_vnfr(&key).unwrap(), expected);
        assert_eq!(nfvo.get_nfvo_vnfr_status(&key).unwrap(), expected);
    }

    #[test]
    fn create_vnfr_uploads_payload() {
        let payloads = Payloads::new();
        let vnfr = json!({"vnf-deployment": [{"tenant": "t1", "deployment-name": "dep1", "esc": "esc1"}]});
        fs::write(payloads.vnfr.path().join("dep1.json"), vnfr.to_string()).unwrap();

        let mut http_client = MockHttpClientMockall::new();
        http_client.should_send_when(
            move |request| {
                request.method() == Method::POST
                    && request.uri().path() == "/api/running/nfvo/vnfr/nfvo-esc:esc"
                    && request.headers().get("content-type").unwrap()
                        == "application/vnd.yang.data+json"
                    && body(request) == vnfr
            },
            StatusCode::CREATED,
            "",
        );

        assert!(
            nfvo(&payloads, http_client)
                .create_nfvo_vnfr("dep1.json")
                .unwrap()
        );
    }

    #[test]
    #[traced_test]
    fn create_vnfr_with_missing_file_sends_nothing() {
        let payloads = Payloads::new();
        // no expectation: any request would fail the test
        let nfvo = nfvo(&payloads, MockHttpClientMockall::new());

        for _ in 0..2 {
            match nfvo.create_nfvo_vnfr("missing.json") {
                Err(NfvoError::PayloadRead { path, .. }) => {
                    assert_eq!(path, payloads.vnfr.path().join("missing.json"))
                }
                res => panic!("Expected `NfvoError::PayloadRead`, found {:?}", res),
            }
        }
        assert!(logs_contain("payload not loaded"));
    }

    #[test]
    fn create_with_name_outside_payload_dir_sends_nothing() {
        let payloads = Payloads::new();
        let outside = TempDir::new().unwrap();
        let escaped = outside.path().join("escaped.json");
        fs::write(&escaped, r#"{"escaped": true}"#).unwrap();
        // no expectation: any request would fail the test
        let nfvo = nfvo(&payloads, MockHttpClientMockall::new());

        let absolute = escaped.to_str().unwrap();
        match nfvo.create_nfvo_vnfr(absolute) {
            Err(NfvoError::PayloadRead { source, .. }) => {
                assert_eq!(source.kind(), io::ErrorKind::InvalidInput)
            }
            res => panic!("Expected `NfvoError::PayloadRead`, found {:?}", res),
        }

        let outside_name = outside.path().file_name().unwrap().to_str().unwrap();
        let relative = format!("../{outside_name}/escaped.json");
        assert_matches!(
            nfvo.create_nfvo_vnfd(&relative),
            Err(NfvoError::PayloadRead { .. })
        );
    }

    #[test]
    fn create_vnfd_with_malformed_file_sends_nothing() {
        let payloads = Payloads::new();
        fs::write(payloads.vnfd.path().join("broken.json"), "{\"vnfd\": ").unwrap();
        let nfvo = nfvo(&payloads, MockHttpClientMockall::new());

        assert_matches!(
            nfvo.create_nfvo_vnfd("broken.json"),
            Err(NfvoError::PayloadParse { .. })
        );
    }

    #[test]
    fn create_vnfd_posts_under_nfvo() {
        let payloads = Payloads::new();
        let vnfd = json!({"vnfd": [{"id": "asav", "vdu": [{"id": "asav-vdu"}]}]});
        fs::write(payloads.vnfd.path().join("asav.json"), vnfd.to_string()).unwrap();

        let mut http_client = MockHttpClientMockall::new();
        http_client.should_send_when(
            move |request| {
                request.method() == Method::POST
                    && request.uri().path() == "/api/running/nfvo"
                    && body(request) == vnfd
            },
            StatusCode::NO_CONTENT,
            "",
        );

        assert!(
            nfvo(&payloads, http_client)
                .create_nfvo_vnfd("asav.json")
                .unwrap()
        );
    }

    #[test]
    fn delete_vnfr_and_vnfd() {
        let mut http_client = MockHttpClientMockall::new();
        http_client.should_send_when(
            |request| {
                request.method() == Method::DELETE
                    && request.uri().path()
                        == "/api/running/nfvo/vnfr/nfvo-esc:esc/vnf-deployment/t1,dep1,esc1"
                    && request.headers().get("accept").unwrap() == "application/vnd.yang.data+json"
            },
            StatusCode::NO_CONTENT,
            "",
        );
        http_client.should_send_when(
            |request| {
                request.method() == Method::DELETE
                    && request.uri().path() == "/api/running/nfvo/vnfd/asav"
            },
            StatusCode::NO_CONTENT,
            "",
        );

        let payloads = Payloads::new();
        let nfvo = nfvo(&payloads, http_client);
        assert!(
            nfvo.delete_nfvo_vnfr(&DeploymentKey::new("t1", "dep1", "esc1"))
                .unwrap()
        );
        assert!(nfvo.delete_nfvo_vnfd("asav").unwrap());
    }

    #[test]
    fn delete_missing_vnfd_is_an_error() {
        let mut http_client = MockHttpClientMockall::new();
        http_client.should_send_when(|_| true, StatusCode::NOT_FOUND, "");

        let payloads = Payloads::new();
        assert_matches!(
            nfvo(&payloads, http_client).delete_nfvo_vnfd("missing"),
            Err(NfvoError::Client(ClientError::Connection(
                ConnectionError::UnsuccessfulResponse { status: 404, .. }
            )))
        );
    }

    #[test]
    fn vnfds() {
        let mut http_client = MockHttpClientMockall::new();
        http_client.should_send_when(
            |request| {
                request.uri().path() == "/api/running/nfvo/vnfd"
                    && request.headers().get("accept").unwrap()
                        == "application/vnd.yang.collection+json"
            },
            StatusCode::OK,
            r#"{"collection": {"tailf-nfvo:vnfd": [{"id": "asav"}]}}"#,
        );
        http_client.should_send_when(
            |request| request.uri().path() == "/api/running/nfvo/vnfd/asav",
            StatusCode::OK,
            r#"{"tailf-nfvo:vnfd": {"id": "asav"}}"#,
        );

        let payloads = Payloads::new();
        let nfvo = nfvo(&payloads, http_client);
        assert_eq!(
            nfvo.get_nfvo_vnfds().unwrap(),
            json!({"tailf-nfvo:vnfd": [{"id": "asav"}]})
        );
        assert_eq!(
            nfvo.get_nfvo_vnfd("asav").unwrap(),
            json!({"tailf-nfvo:vnfd": {"id": "asav"}})
        );
    }

    #[test]
    fn vnfrs_missing_member() {
        let mut http_client = MockHttpClientMockall::new();
        http_client.should_send_when(|_| true, StatusCode::OK, r#"{"tailf-nfvo-esc:esc": {}}"#);

        let payloads = Payloads::new();
        assert_matches!(
            nfvo(&payloads, http_client).get_nfvo_vnfrs(),
            Err(NfvoError::MissingField(ESC_DEPLOYMENTS))
        );
    }
}
