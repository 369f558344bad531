use axum::http::Method;

// One line per completed request on stdout:
// <METHOD> <PATH> - <STATUS> (<DURATION>ms)
pub fn log_request(method: &Method, path: &str, status: u16, duration_ms: f64) {
    println!("{} {} - {} ({:.2}ms)", method, path, status, duration_ms);
}
