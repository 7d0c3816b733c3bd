use std::env;

use nfvo::{DeploymentKey, Nfvo, NfvoConfig};
use tracing::{error, info};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(tracing::metadata::LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .init();

    // NFVO_CONFIG points to a YAML file, otherwise NSO_* variables are used
    let config = match env::var("NFVO_CONFIG") {
        Ok(path) => NfvoConfig::from_file(path),
        Err(_) => NfvoConfig::from_env(),
    }
    .unwrap();

    let nfvo = Nfvo::new(config).unwrap();

    info!("NSO API version {}", nfvo.get_api_version().unwrap());
    info!("VNF descriptors: {}", nfvo.get_nfvo_vnfds().unwrap());
    info!("VNF deployments: {}", nfvo.get_nfvo_vnfrs().unwrap());

    let mut args = env::args().skip(1);
    if let (Some(tenant), Some(deployment), Some(esc)) = (args.next(), args.next(), args.next()) {
        let key = DeploymentKey::new(tenant, deployment, esc);
        match nfvo.get_nfvo_vnfr_status(&key) {
            Ok(status) => info!("{key}: {status}"),
            Err(err) => error!(%err, "fetching status of {key}"),
        }
    }
}
