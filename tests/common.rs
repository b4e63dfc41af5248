//! Common test utilities
//!
//! Record factories, an in-process mock source, and a tiny HTTP server that
//! serves canned JSON to the real source implementations.

use async_trait::async_trait;
use kyara::prelude::*;
use kyara::{Error, Result};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Nothing listens here, so every request fails to connect.
#[allow(dead_code)]
pub const UNREACHABLE_URL: &str = "http://127.0.0.1:9";

/// A record of `series` with native id `n`.
#[allow(dead_code)]
pub fn record(series: Series, n: usize) -> CharacterRecord {
    let details = match series {
        Series::DragonBall => SeriesDetails::DragonBall {
            ki: None,
            max_ki: None,
        },
        Series::OnePiece => SeriesDetails::OnePiece {
            crew: None,
            bounty: None,
        },
        Series::Naruto => SeriesDetails::Naruto {
            clan: None,
            rank: None,
            village: None,
        },
    };
    CharacterRecord::new(n, format!("{} #{}", series, n), "", details)
}

/// `count` records of `series`, numbered from zero.
#[allow(dead_code)]
pub fn records(series: Series, count: usize) -> Vec<CharacterRecord> {
    (0..count).map(|n| record(series, n)).collect()
}

/// A Dragon Ball record with the given power level and race.
#[allow(dead_code)]
pub fn fighter(n: usize, name: &str, ki: &str, race: &str) -> CharacterRecord {
    let mut record = CharacterRecord::new(
        n,
        name,
        format!("{} fights.", name),
        SeriesDetails::DragonBall {
            ki: Some(ki.to_string()),
            max_ki: None,
        },
    );
    record.race = Some(race.to_string());
    record.gender = Some("Male".to_string());
    record.affiliation = Some("Z Fighter".to_string());
    record
}

#[allow(dead_code)]
#[derive(Clone)]
pub enum Behavior {
    Ok(Vec<CharacterRecord>),
    Fail,
    Panic,
    Delayed(Duration, Vec<CharacterRecord>),
}

/// An in-process [`Source`] with scripted behavior.
#[allow(dead_code)]
pub struct MockSource {
    pub id: &'static str,
    pub series: Series,
    pub behavior: Behavior,
}

#[allow(dead_code)]
impl MockSource {
    pub fn ok(id: &'static str, series: Series, records: Vec<CharacterRecord>) -> Self {
        Self {
            id,
            series,
            behavior: Behavior::Ok(records),
        }
    }

    pub fn failing(id: &'static str, series: Series) -> Self {
        Self {
            id,
            series,
            behavior: Behavior::Fail,
        }
    }

    pub fn panicking(id: &'static str, series: Series) -> Self {
        Self {
            id,
            series,
            behavior: Behavior::Panic,
        }
    }

    pub fn delayed(
        id: &'static str,
        series: Series,
        delay: Duration,
        records: Vec<CharacterRecord>,
    ) -> Self {
        Self {
            id,
            series,
            behavior: Behavior::Delayed(delay, records),
        }
    }
}

#[async_trait]
impl Source for MockSource {
    fn id(&self) -> &'static str {
        self.id
    }

    fn name(&self) -> &'static str {
        "Mock"
    }

    fn series(&self) -> Series {
        self.series
    }

    fn base_url(&self) -> &str {
        "memory://"
    }

    async fn fetch_characters(&self) -> Result<Vec<CharacterRecord>> {
        match &self.behavior {
            Behavior::Ok(records) => Ok(records.clone()),
            Behavior::Fail => Err(Error::source(self.id, "upstream unavailable")),
            Behavior::Panic => panic!("mock source {} panicked", self.id),
            Behavior::Delayed(delay, records) => {
                tokio::time::sleep(*delay).await;
                Ok(records.clone())
            }
        }
    }
}

/// A local HTTP server answering every request with the same response.
#[allow(dead_code)]
pub struct JsonServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

#[allow(dead_code)]
impl JsonServer {
    /// Request lines received so far, e.g. `"GET /api/characters?limit=100 HTTP/1.1"`.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

/// Starts a server that answers with `status` and `body` until the test ends.
#[allow(dead_code)]
pub async fn serve_json(status: u16, body: impl Into<String>) -> JsonServer {
    let body = body.into();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let requests = Arc::new(Mutex::new(Vec::new()));
    let log = Arc::clone(&requests);

    tokio::spawn(async move {
        loop {
            let Ok((mut stream, _)) = listener.accept().await else {
                break;
            };
            let body = body.clone();
            let log = Arc::clone(&log);

            tokio::spawn(async move {
                let mut buf = Vec::new();
                let mut chunk = [0u8; 1024];
                while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
                    match stream.read(&mut chunk).await {
                        Ok(0) | Err(_) => break,
                        Ok(n) => buf.extend_from_slice(&chunk[..n]),
                    }
                }

                let request = String::from_utf8_lossy(&buf);
                if let Some(line) = request.lines().next() {
                    log.lock().unwrap().push(line.to_string());
                }

                let reason = if status < 400 { "OK" } else { "Error" };
                let response = format!(
                    "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    reason,
                    body.len(),
                    body
                );
                let _ = stream.write_all(response.as_bytes()).await;
                let _ = stream.shutdown().await;
            });
        }
    });

    JsonServer {
        base_url: format!("http://{}", addr),
        requests,
    }
}
