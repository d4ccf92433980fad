use crate::rules;
use indexmap::IndexMap;
use serde::Serialize;

/// The single most requested endpoint and how often it was hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopEndpoint {
    pub path: String,
    pub count: usize,
}

/// The complete triage output for one run.
///
/// Maps iterate in first-appearance order. `top_endpoint` is `None` when no
/// line carried a recognizable request token.
#[derive(Debug, PartialEq, Serialize)]
pub struct TrafficSummary {
    pub requests_per_ip: IndexMap<String, usize>,
    pub top_endpoint: Option<TopEndpoint>,
    pub suspicious_ips: IndexMap<String, usize>,
    pub threshold: usize,
}

/// Run all three aggregations over the line sequence in a single pass.
///
/// Each line is tested against every rule independently, so one line can feed
/// several aggregates at once (a failed login with a well-formed request token
/// counts as a request, an endpoint hit, and a failure). Lines matching no
/// rule contribute nothing. Pure function of its input.
pub fn analyze(lines: &[String], threshold: usize) -> TrafficSummary {
    let mut requests_per_ip: IndexMap<String, usize> = IndexMap::new();
    let mut endpoint_counts: IndexMap<String, usize> = IndexMap::new();
    let mut failed_attempts: IndexMap<String, usize> = IndexMap::new();

    for line in lines {
        let address = rules::source_address(line);

        if let Some(ip) = address {
            *requests_per_ip.entry(ip.to_string()).or_insert(0) += 1;
        }

        if let Some(path) = rules::request_path(line) {
            *endpoint_counts.entry(path.to_string()).or_insert(0) += 1;
        }

        if rules::is_auth_failure(line) {
            if let Some(ip) = address {
                *failed_attempts.entry(ip.to_string()).or_insert(0) += 1;
            }
        }
    }

    // First-occurrence-wins on ties: insertion order is first-appearance
    // order, and only a strictly greater count displaces the current best.
    let mut top_endpoint: Option<TopEndpoint> = None;
    for (path, &count) in &endpoint_counts {
        if top_endpoint.as_ref().map_or(true, |best| count > best.count) {
            top_endpoint = Some(TopEndpoint {
                path: path.clone(),
                count,
            });
        }
    }

    // Strictly greater than the threshold; exactly `threshold` failures is
    // not suspicious.
    failed_attempts.retain(|_, count| *count > threshold);

    TrafficSummary {
        requests_per_ip,
        top_endpoint,
        suspicious_ips: failed_attempts,
        threshold,
    }
}
