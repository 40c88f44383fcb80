//! Starts the mock CertCentral server for integration tests.

use certcentral_core::{CertCentralClient, ClientConfig};

pub const API_KEY: &str = "integration-key";

/// Serve the mock on a random local port from a background thread and
/// return its `/services/v2/` base URL.
pub fn spawn_mock_server() -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener, API_KEY).await
        })
        .unwrap();
    });

    format!("http://{addr}/services/v2/")
}

pub fn client_for(base_url: &str, api_key: &str) -> CertCentralClient {
    let config = ClientConfig::new(api_key)
        .unwrap()
        .with_base_url(base_url);
    CertCentralClient::new(config)
}
