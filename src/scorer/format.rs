/// Rounds to `decimals` places and trims trailing zeros (`6.840` -> `6.84`, `70.000` -> `70`).
pub fn format_score(value: f64, decimals: usize) -> String {
    let mut s = format!("{:.*}", decimals, value);
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(trimmed);
    }
    if s == "-0" {
        s = "0".to_string();
    }
    s
}
