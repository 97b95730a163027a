//! Worker binary: one JSON search request per stdin line, one JSON reply
//! per stdout line. The protocol is strictly request/response, so the loop
//! is synchronous; a caller wanting cancellation discards the worker and
//! starts a new one.

use std::io::{self, BufRead};

use quince_chess::search::alpha_beta::AlphaBeta;
use quince_chess::search::evaluator::DefaultEvaluator;
use quince_chess::service::{answer_request, SearchRequest};

const SEARCH_DEPTH: i32 = 3;

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .init();

    let algorithm = AlphaBeta::new(DefaultEvaluator, SEARCH_DEPTH);
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match serde_json::from_str::<SearchRequest>(line) {
            Ok(request) => match answer_request(&request, &algorithm) {
                Ok(response) => {
                    println!("{}", serde_json::json!(response));
                }
                Err(err) => {
                    tracing::error!(%err, "search request failed");
                    println!("{}", serde_json::json!({ "error": err.to_string() }));
                }
            },
            Err(err) => {
                tracing::error!(%err, "unparseable request line");
                println!("{}", serde_json::json!({ "error": "malformed request" }));
            }
        }
    }
}
