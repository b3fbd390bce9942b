const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Human-readable size with base-1024 units, at most 2 fractional digits,
/// trailing zeros stripped. `0` renders as "0 Bytes".
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let exponent = ((bytes as f64).ln() / 1024f64.ln()).floor() as usize;
    let exponent = exponent.min(UNITS.len() - 1);
    let scaled = bytes as f64 / 1024f64.powi(exponent as i32);

    // format with 2 decimals, then strip trailing zeros the way
    // JS parseFloat(x.toFixed(2)) does
    let mut rendered = format!("{:.2}", scaled);
    while rendered.ends_with('0') {
        rendered.pop();
    }
    if rendered.ends_with('.') {
        rendered.pop();
    }

    format!("{} {}", rendered, UNITS[exponent])
}
