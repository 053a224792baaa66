// src/integrations/scoring/client_tests.rs
//
// HttpScoringClient against a one-shot local HTTP server.
//
// INVARIANTS TESTED:
// - Requests go to <base>/score-lor as multipart POST
// - Exactly one field is populated (file XOR lor_text)
// - Status and body are passed back untouched, error statuses included
// - An unreachable server is a transport error, not a response

#[cfg(test)]
mod http_client_tests {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    use crate::domain::FilePayload;
    use crate::integrations::scoring::{
        HttpScoringClient, ScoreRequest, ScoringTransport, TransportError,
    };

    const SCENARIO_B_BODY: &str = r#"{"patient_care":90,"medical_knowledge":85,"interpersonal":88,"professionalism":92,"scholarly":80,"author_credibility":95,"deductions":0,"final_score":88.3}"#;

    /// What the server saw
    struct Captured {
        head: String,
        body: String,
    }

    fn header_end(buf: &[u8]) -> Option<usize> {
        buf.windows(4).position(|w| w == b"\r\n\r\n").map(|i| i + 4)
    }

    fn content_length(head: &str) -> Option<usize> {
        head.lines().find_map(|line| {
            let (name, value) = line.split_once(':')?;
            if name.trim().eq_ignore_ascii_case("content-length") {
                value.trim().parse().ok()
            } else {
                None
            }
        })
    }

    /// Accept one connection, capture the request, answer with `status` and `reply`
    async fn serve_once(
        status: &'static str,
        reply: &'static str,
    ) -> (String, JoinHandle<Captured>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = Vec::new();
            let mut chunk = [0u8; 4096];

            let head_len = loop {
                let n = socket.read(&mut chunk).await.unwrap();
                assert!(n > 0, "connection closed before headers");
                buf.extend_from_slice(&chunk[..n]);
                if let Some(end) = header_end(&buf) {
                    break end;
                }
            };
            let head = String::from_utf8_lossy(&buf[..head_len]).to_string();

            match content_length(&head) {
                Some(len) => {
                    while buf.len() < head_len + len {
                        let n = socket.read(&mut chunk).await.unwrap();
                        assert!(n > 0, "connection closed mid-body");
                        buf.extend_from_slice(&chunk[..n]);
                    }
                }
                // chunked transfer
                None => {
                    while !buf.ends_with(b"0\r\n\r\n") {
                        let n = socket.read(&mut chunk).await.unwrap();
                        assert!(n > 0, "connection closed mid-body");
                        buf.extend_from_slice(&chunk[..n]);
                    }
                }
            }
            let body = String::from_utf8_lossy(&buf[head_len..]).to_string();

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                reply.len(),
                reply
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();

            Captured { head, body }
        });

        (base_url, handle)
    }

    #[tokio::test]
    async fn test_text_request_hits_endpoint_with_lor_text_field() {
        let (base_url, server) = serve_once("200 OK", SCENARIO_B_BODY).await;
        let client = HttpScoringClient::new(&base_url, None).unwrap();

        let response = client
            .send(ScoreRequest::Text("  Dr. Smith writes...".to_string()))
            .await
            .unwrap();

        assert_eq!(response.status, 200);
        assert!(response.is_success());
        assert_eq!(response.body, SCENARIO_B_BODY.as_bytes());

        let captured = server.await.unwrap();
        assert!(captured.head.starts_with("POST /score-lor HTTP/1.1"));
        assert!(captured
            .head
            .to_ascii_lowercase()
            .contains("content-type: multipart/form-data"));
        assert!(captured.body.contains("name=\"lor_text\""));
        assert!(!captured.body.contains("name=\"file\""));
        // sent untrimmed
        assert!(captured.body.contains("  Dr. Smith writes..."));
    }

    #[tokio::test]
    async fn test_file_request_carries_name_and_type() {
        let (base_url, server) = serve_once("200 OK", SCENARIO_B_BODY).await;
        let client = HttpScoringClient::new(&base_url, None).unwrap();
        let payload = FilePayload::new("letter.pdf", b"%PDF-1.7 letter".to_vec()).unwrap();

        let response = client.send(ScoreRequest::File(payload)).await.unwrap();
        assert_eq!(response.status, 200);

        let captured = server.await.unwrap();
        assert!(captured.body.contains("name=\"file\""));
        assert!(captured.body.contains("filename=\"letter.pdf\""));
        assert!(captured.body.contains("application/pdf"));
        assert!(captured.body.contains("%PDF-1.7 letter"));
        assert!(!captured.body.contains("name=\"lor_text\""));
    }

    #[tokio::test]
    async fn test_error_status_is_returned_not_raised() {
        let (base_url, server) =
            serve_once("500 Internal Server Error", r#"{"error":"Unsupported file format"}"#).await;
        let client = HttpScoringClient::new(&base_url, None).unwrap();

        let response = client
            .send(ScoreRequest::Text("letter".to_string()))
            .await
            .unwrap();

        assert_eq!(response.status, 500);
        assert!(!response.is_success());
        assert_eq!(response.body, br#"{"error":"Unsupported file format"}"#.to_vec());
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_unreachable_server_is_connection_error() {
        // bind then drop so the port is very likely closed
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let client = HttpScoringClient::new(&base_url, None).unwrap();
        let result = client.send(ScoreRequest::Text("letter".to_string())).await;

        assert!(matches!(result, Err(TransportError::Connection(_))));
    }
}
