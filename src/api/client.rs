use super::error::{extract_detail, ApiError};
use crate::model::{Patient, PredictionResult};
use crate::utils::endpoint;
use reqwest::{Response, Url};
use serde::de::DeserializeOwned;

/// Thin HTTP client for the segmentation service.
///
/// Every call is a single unauthenticated GET. Nothing is retried and no
/// timeout is set beyond the transport default.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: String,
}

impl ApiClient {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base: base.into(),
        }
    }

    /// `GET {base}/patients`, decoded as-is.
    pub async fn list_patients(&self) -> Result<Vec<Patient>, ApiError> {
        let url = self.route("patients")?;
        log::info!("Listing patients: GET {url}");
        let response = self.send(url).await?;
        decode_json(response).await
    }

    /// `GET {base}/predict?patient_id=<id>`, decoded as-is.
    pub async fn run_inference(&self, patient_id: &str) -> Result<PredictionResult, ApiError> {
        let mut url = self.route("predict")?;
        url.query_pairs_mut().append_pair("patient_id", patient_id);
        log::info!("Running inference: GET {url}");
        let response = self.send(url).await?;
        decode_json(response).await
    }

    /// Downloads the raw bytes of an already-resolved overlay URL.
    pub async fn fetch_overlay(&self, url: &str) -> Result<Vec<u8>, ApiError> {
        let url = Url::parse(url).map_err(|_| ApiError::InvalidUrl(url.to_string()))?;
        log::debug!("Fetching overlay: GET {url}");
        let response = check_status(self.send(url).await?).await?;
        let bytes = response.bytes().await.map_err(ApiError::from_transport)?;
        Ok(bytes.to_vec())
    }

    fn route(&self, route: &str) -> Result<Url, ApiError> {
        Url::parse(&endpoint(&self.base, route))
            .map_err(|_| ApiError::InvalidUrl(self.base.clone()))
    }

    async fn send(&self, url: Url) -> Result<Response, ApiError> {
        self.http
            .get(url)
            .send()
            .await
            .map_err(ApiError::from_transport)
    }
}

async fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let detail = extract_detail(&body);
    log::warn!(
        "Inference service answered {status}: {}",
        detail.as_deref().unwrap_or("no detail")
    );
    Err(ApiError::Server {
        status: status.as_u16(),
        detail,
    })
}

async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let response = check_status(response).await?;
    let body = response.text().await.map_err(ApiError::from_transport)?;
    serde_json::from_str(&body).map_err(|err| ApiError::Decode(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Serves exactly one canned HTTP response and hands back the request head.
    async fn serve_once(
        status: &str,
        content_type: &str,
        body: &[u8],
    ) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        let head = format!(
            "HTTP/1.1 {status}\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            body.len()
        );
        let body = body.to_vec();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|window| window == b"\r\n\r\n") {
                let read = socket.read(&mut buf).await.unwrap();
                if read == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..read]);
            }
            socket.write_all(head.as_bytes()).await.unwrap();
            socket.write_all(&body).await.unwrap();
            socket.shutdown().await.unwrap();
            String::from_utf8_lossy(&request).into_owned()
        });

        (base, handle)
    }

    fn request_line(request: &str) -> &str {
        request.lines().next().unwrap_or_default()
    }

    #[tokio::test]
    async fn lists_patients_in_backend_order() {
        let body = br#"[{"patient_id":"Patient 2","real_patient_id":"patient150"},{"patient_id":"Patient 1","real_patient_id":"patient101"}]"#;
        let (base, server) = serve_once("200 OK", "application/json", body).await;

        let patients = ApiClient::new(format!("{base}/")).list_patients().await.unwrap();

        assert_eq!(
            patients,
            vec![
                Patient::new("Patient 2", "patient150"),
                Patient::new("Patient 1", "patient101"),
            ]
        );
        assert_eq!(request_line(&server.await.unwrap()), "GET /patients HTTP/1.1");
    }

    #[tokio::test]
    async fn inference_sends_patient_id_as_query_parameter() {
        let body = br#"{"edv_ml":120.5,"esv_ml":50.25,"ef_percent":58.3,"ed_overlay_url":"/outputs/p/ed.png","es_overlay_url":"/outputs/p/es.png"}"#;
        let (base, server) = serve_once("200 OK", "application/json", body).await;

        let result = ApiClient::new(base).run_inference("Patient 1").await.unwrap();

        assert_eq!(result.edv_ml, Some(120.5));
        assert_eq!(result.es_overlay_url.as_deref(), Some("/outputs/p/es.png"));
        assert_eq!(
            request_line(&server.await.unwrap()),
            "GET /predict?patient_id=Patient+1 HTTP/1.1"
        );
    }

    #[tokio::test]
    async fn server_errors_carry_backend_detail() {
        let body = br#"{"detail":"Unknown patient_id: patient999"}"#;
        let (base, _server) = serve_once("404 Not Found", "application/json", body).await;

        let err = ApiClient::new(base).run_inference("patient999").await.unwrap_err();

        assert_eq!(
            err,
            ApiError::Server {
                status: 404,
                detail: Some("Unknown patient_id: patient999".to_string()),
            }
        );
    }

    #[tokio::test]
    async fn malformed_success_body_is_a_decode_error() {
        let (base, _server) = serve_once("200 OK", "application/json", b"not json").await;

        let err = ApiClient::new(base).list_patients().await.unwrap_err();

        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn unreachable_service_is_a_connectivity_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let err = ApiClient::new(base).list_patients().await.unwrap_err();

        assert!(matches!(err, ApiError::Connectivity(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn missing_base_fails_without_a_request() {
        let err = ApiClient::new("").list_patients().await.unwrap_err();
        assert_eq!(err, ApiError::InvalidUrl(String::new()));
    }

    #[tokio::test]
    async fn overlays_are_fetched_as_raw_bytes() {
        let (base, server) = serve_once("200 OK", "image/png", &[0x89, b'P', b'N', b'G']).await;

        let bytes = ApiClient::new("")
            .fetch_overlay(&format!("{base}/outputs/patient101/ed_overlay.png"))
            .await
            .unwrap();

        assert_eq!(bytes, vec![0x89, b'P', b'N', b'G']);
        assert_eq!(
            request_line(&server.await.unwrap()),
            "GET /outputs/patient101/ed_overlay.png HTTP/1.1"
        );
    }
}
