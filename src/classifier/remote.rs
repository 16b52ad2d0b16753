use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::{ClassifyError, Classifier};
use crate::data::model::{FeatureVector, Label, Prediction};

#[derive(Serialize)]
struct PredictRequest<'a> {
    features: &'a [f64],
}

#[derive(Deserialize)]
struct PredictResponse {
    prediction: String,
}

/// Sends features to `POST {endpoint}/predict` and maps the returned code.
///
/// One attempt per call; failures are reported, never retried.
pub struct RemoteClassifier {
    agent: ureq::Agent,
    url: String,
}

impl RemoteClassifier {
    /// `timeout` of `None` leaves the request unbounded.
    pub fn new(endpoint: &str, timeout: Option<Duration>) -> Self {
        let mut builder = ureq::AgentBuilder::new();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Self {
            agent: builder.build(),
            url: format!("{}/predict", endpoint.trim_end_matches('/')),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Classifier for RemoteClassifier {
    fn name(&self) -> &str {
        "Remote model"
    }

    fn classify(&self, features: &FeatureVector) -> Result<Prediction, ClassifyError> {
        log::debug!("POST {} with {} features", self.url, features.len());
        let response = self
            .agent
            .post(&self.url)
            .send_json(PredictRequest {
                features: features.as_slice(),
            })
            .map_err(|err| match err {
                ureq::Error::Status(code, _) => {
                    ClassifyError::Network(format!("server returned HTTP {code}"))
                }
                ureq::Error::Transport(transport) => ClassifyError::Network(transport.to_string()),
            })?;

        let body: PredictResponse = response
            .into_json()
            .map_err(|err| ClassifyError::Response(err.to_string()))?;

        Ok(Prediction {
            label: Label::from_code(&body.prediction),
            confidence: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::parser::{parse_features, ValidationMode};
    use crate::data::samples::builtin_samples;
    use std::io::{BufRead, BufReader, Read, Write};
    use std::net::TcpListener;
    use std::sync::mpsc;
    use std::thread;

    /// Serve one HTTP response and hand back the raw request (head + body).
    fn serve_once(status: &str, body: &str) -> (String, mpsc::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            if let Ok((stream, _)) = listener.accept() {
                let mut reader = BufReader::new(stream);
                let mut request = String::new();
                let mut content_length = 0usize;
                loop {
                    let mut line = String::new();
                    if reader.read_line(&mut line).unwrap_or(0) == 0 {
                        break;
                    }
                    if let Some(value) = line.to_ascii_lowercase().strip_prefix("content-length:") {
                        content_length = value.trim().parse().unwrap_or(0);
                    }
                    let end_of_head = line == "\r\n";
                    request.push_str(&line);
                    if end_of_head {
                        break;
                    }
                }
                let mut body = vec![0u8; content_length];
                let _ = reader.read_exact(&mut body);
                request.push_str(&String::from_utf8_lossy(&body));
                let _ = reader.get_mut().write_all(response.as_bytes());
                let _ = tx.send(request);
            }
        });
        (format!("http://{addr}"), rx)
    }

    fn sample_vector(index: usize) -> FeatureVector {
        let samples = builtin_samples();
        parse_features(&samples[index].features, ValidationMode::Strict).unwrap()
    }

    #[test]
    fn m_code_is_mine() {
        let (url, requests) = serve_once("200 OK", r#"{"prediction":"M"}"#);
        let classifier = RemoteClassifier::new(&url, Some(Duration::from_secs(5)));
        let prediction = classifier.classify(&sample_vector(1)).unwrap();
        assert_eq!(prediction.label, Label::Mine);
        assert_eq!(prediction.confidence, None);

        let request = requests.recv().unwrap();
        assert!(request.starts_with("POST /predict "));
        let body = &request[request.find("\r\n\r\n").unwrap() + 4..];
        let json: serde_json::Value = serde_json::from_str(body).unwrap();
        assert_eq!(json["features"].as_array().unwrap().len(), 60);
        assert_eq!(json["features"][0].as_f64(), Some(0.0179));
    }

    #[test]
    fn other_codes_are_rock() {
        for code in ["R", "X", ""] {
            let (url, _requests) = serve_once("200 OK", &format!(r#"{{"prediction":"{code}"}}"#));
            let classifier = RemoteClassifier::new(&url, Some(Duration::from_secs(5)));
            let prediction = classifier.classify(&sample_vector(0)).unwrap();
            assert_eq!(prediction.label, Label::Rock, "code {code:?}");
        }
    }

    #[test]
    fn trailing_slash_on_endpoint_is_ignored() {
        let classifier = RemoteClassifier::new("http://localhost:8000/", None);
        assert_eq!(classifier.url(), "http://localhost:8000/predict");
    }

    #[test]
    fn missing_prediction_field_is_a_response_error() {
        let (url, _requests) = serve_once("200 OK", r#"{"result":1}"#);
        let classifier = RemoteClassifier::new(&url, Some(Duration::from_secs(5)));
        let err = classifier.classify(&sample_vector(0)).unwrap_err();
        assert!(matches!(err, ClassifyError::Response(_)), "{err:?}");
    }

    #[test]
    fn non_json_body_is_a_response_error() {
        let (url, _requests) = serve_once("200 OK", "<html>busy</html>");
        let classifier = RemoteClassifier::new(&url, Some(Duration::from_secs(5)));
        let err = classifier.classify(&sample_vector(0)).unwrap_err();
        assert!(matches!(err, ClassifyError::Response(_)), "{err:?}");
    }

    #[test]
    fn server_error_status_is_a_network_error() {
        let (url, _requests) = serve_once("500 Internal Server Error", "{}");
        let classifier = RemoteClassifier::new(&url, Some(Duration::from_secs(5)));
        let err = classifier.classify(&sample_vector(0)).unwrap_err();
        assert_eq!(err, ClassifyError::Network("server returned HTTP 500".into()));
    }

    #[test]
    fn unreachable_server_is_a_network_error() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let classifier = RemoteClassifier::new(&format!("http://{addr}"), Some(Duration::from_secs(5)));
        let err = classifier.classify(&sample_vector(0)).unwrap_err();
        assert!(matches!(err, ClassifyError::Network(_)), "{err:?}");
    }
}
