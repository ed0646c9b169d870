use log::{debug, warn};
use reqwest::blocking::Client;
use std::error::Error;
use structs::error::IpmiError;
use structs::settings::Settings;

/// A cloud management API reachable by relative `Vms/...` paths.
pub trait CloudApi {
    fn url_for(&self, api_path: &str) -> String;

    /// # Errors
    ///
    /// Will return `Err` if the request could not be sent or the server answered with an error status
    fn call(&self, api_path: &str) -> Result<(), IpmiError>;
}

pub struct CloudClient {
    client: Client,
    settings: Settings,
}

impl CloudClient {
    /// # Errors
    ///
    /// Will return `Err` if the HTTP client could not be initialized
    pub fn new(settings: Settings) -> Result<Self, IpmiError> {
        let client = Client::builder()
            .build()
            .map_err(|e| IpmiError::TransportError {
                url: settings.api_server.clone(),
                reason: reason_of(&e),
            })?;
        Ok(CloudClient { client, settings })
    }
}

impl CloudApi for CloudClient {
    fn url_for(&self, api_path: &str) -> String {
        self.settings.url_for(api_path)
    }

    fn call(&self, api_path: &str) -> Result<(), IpmiError> {
        let url = self.url_for(api_path);
        debug!("GET {}", url);
        let response = self
            .client
            .get(url.as_str())
            .send()
            .map_err(|e| IpmiError::TransportError {
                url: url.clone(),
                reason: reason_of(&e),
            })?;
        let status = response.status();
        debug!("{} answered {}", url, status);
        if !status.is_success() {
            let body = response.text().unwrap_or_else(|e| {
                warn!("could not read response body from {}: {}", url, e);
                String::new()
            });
            return Err(IpmiError::HttpError {
                code: status.as_u16(),
                body,
            });
        }
        Ok(())
    }
}

/// The innermost cause, e.g. the refused socket rather than the request wrapper.
fn reason_of(err: &reqwest::Error) -> String {
    let mut reason = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        reason = cause.to_string();
        source = cause.source();
    }
    reason
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    fn client_for(api_server: String) -> CloudClient {
        CloudClient::new(Settings { api_server }).unwrap()
    }

    /// Answers exactly one request with `response` and hands back the request line.
    fn serve_once(response: &'static str) -> (String, thread::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let address = format!("http://{}", listener.local_addr().unwrap());
        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = Vec::new();
            let mut buffer = [0; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let read = stream.read(&mut buffer).unwrap();
                if read == 0 {
                    break;
                }
                request.extend_from_slice(&buffer[..read]);
            }
            stream.write_all(response.as_bytes()).unwrap();
            let request = String::from_utf8_lossy(&request).to_string();
            request.lines().next().unwrap_or_default().to_string()
        });
        (address, handle)
    }

    #[test]
    fn builds_urls_from_settings() {
        let client = CloudClient::new(Settings::default()).unwrap();
        assert_eq!(
            client.url_for("Vms/poweron_api/vm_name:ms-1.xml"),
            "https://10.42.34.79/Vms/poweron_api/vm_name:ms-1.xml"
        );
    }

    #[test]
    fn success_status_is_ok() {
        let (address, server) = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Length: 5\r\nConnection: close\r\n\r\n<ok/>",
        );
        let client = client_for(address);
        assert!(client.call("Vms/poweroff_api/vm_name:ms-1.xml").is_ok());
        assert_eq!(
            server.join().unwrap(),
            "GET /Vms/poweroff_api/vm_name:ms-1.xml HTTP/1.1"
        );
    }

    #[test]
    fn error_status_carries_code_and_body() {
        let (address, server) = serve_once(
            "HTTP/1.1 404 Not Found\r\nContent-Length: 3\r\nConnection: close\r\n\r\nfoo",
        );
        let client = client_for(address);
        match client.call("Vms/set_boot_device_api/boot_devices:hd/vm_name:ms-1.xml") {
            Err(IpmiError::HttpError { code, body }) => {
                assert_eq!(code, 404);
                assert_eq!(body, "foo");
            }
            other => panic!("unexpected {:?}", other),
        }
        server.join().unwrap();
    }

    #[test]
    fn unfollowed_redirect_is_an_error() {
        let (address, server) = serve_once(
            "HTTP/1.1 300 Multiple Choices\r\nContent-Length: 4\r\nConnection: close\r\n\r\nnope",
        );
        let client = client_for(address);
        match client.call("Vms/poweroff_api/vm_name:ms-1.xml") {
            Err(IpmiError::HttpError { code, body }) => {
                assert_eq!(code, 300);
                assert_eq!(body, "nope");
            }
            other => panic!("unexpected {:?}", other),
        }
        server.join().unwrap();
    }

    #[test]
    fn refused_connection_is_a_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let address = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);
        let client = client_for(address.clone());
        match client.call("Vms/poweron_api/vm_name:ms-1.xml") {
            Err(IpmiError::TransportError { url, reason }) => {
                assert_eq!(url, format!("{}/Vms/poweron_api/vm_name:ms-1.xml", address));
                assert!(!reason.is_empty());
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}
