//! Formatting utilities for file sizes, dates, and paths.

/// Format file size for display (e.g., "1.2K", "3.4M", "5.6G").
pub fn format_size(bytes: u64) -> String {
    if bytes >= 1_000_000_000 {
        format!("{:.1}G", bytes as f64 / 1_000_000_000.0)
    } else if bytes >= 1_000_000 {
        format!("{:.1}M", bytes as f64 / 1_000_000.0)
    } else if bytes >= 1_000 {
        format!("{:.1}K", bytes as f64 / 1_000.0)
    } else {
        format!("{}B", bytes)
    }
}

/// Format Unix timestamp as ISO date (YYYY-MM-DD).
///
/// Properly calculates year/month/day accounting for leap years.
pub fn format_date_iso(timestamp: u64) -> String {
    let days = timestamp / 86400;
    let mut year = 1970i64;
    let mut remaining_days = days as i64;

    loop {
        let days_in_year = if is_leap_year(year) { 366 } else { 365 };
        if remaining_days < days_in_year {
            break;
        }
        remaining_days -= days_in_year;
        year += 1;
    }

    let days_in_months: [i64; 12] = if is_leap_year(year) {
        [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31]
    } else {
        [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31]
    };

    let mut month = 1;
    for days_in_month in days_in_months.iter() {
        if remaining_days < *days_in_month {
            break;
        }
        remaining_days -= days_in_month;
        month += 1;
    }

    let day = remaining_days + 1;
    format!("{:04}-{:02}-{:02}", year, month, day)
}

/// Format Unix timestamp as ISO date and UTC time (YYYY-MM-DD HH:MM).
pub fn format_datetime(timestamp: u64) -> String {
    let hour = (timestamp % 86400) / 3600;
    let min = (timestamp % 3600) / 60;
    format!("{} {:02}:{:02}", format_date_iso(timestamp), hour, min)
}

/// Check if a year is a leap year.
fn is_leap_year(year: i64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Split a path into display segments, keeping the root as the first segment.
///
/// `/home/user` → `["/", "home", "user"]`, `C:\Users` → `["C:\", "Users"]`.
pub fn path_segments(path: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let rest = if let Some(rest) = path.strip_prefix('/') {
        segments.push("/".to_string());
        rest
    } else if let Some((drive, rest)) = path.split_once(":\\") {
        segments.push(format!("{}:\\", drive));
        rest
    } else {
        path
    };

    segments.extend(
        rest.split(['/', '\\'])
            .filter(|s| !s.is_empty())
            .map(str::to_string),
    );
    segments
}

/// Pair each path segment with the full path up to and including it.
///
/// `/home/user` → `[("/", "/"), ("home", "/home"), ("user", "/home/user")]`.
pub fn path_prefixes(path: &str) -> Vec<(String, String)> {
    let separator = if path.contains('\\') && !path.contains('/') {
        '\\'
    } else {
        '/'
    };

    let mut prefixes = Vec::new();
    let mut current = String::new();
    for segment in path_segments(path) {
        if !current.is_empty() && !current.ends_with(['/', '\\']) {
            current.push(separator);
        }
        current.push_str(&segment);
        prefixes.push((segment, current.clone()));
    }
    prefixes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0B");
        assert_eq!(format_size(500), "500B");
        assert_eq!(format_size(1500), "1.5K");
        assert_eq!(format_size(1_500_000), "1.5M");
        assert_eq!(format_size(2_340_000_000), "2.3G");
    }

    #[test]
    fn test_format_date_iso() {
        // Unix epoch
        assert_eq!(format_date_iso(0), "1970-01-01");
        // 2024-01-01 00:00:00 UTC = 1704067200
        assert_eq!(format_date_iso(1704067200), "2024-01-01");
        // Leap day
        assert_eq!(format_date_iso(1709164800), "2024-02-29");
    }

    #[test]
    fn test_format_datetime() {
        // 2023-11-14 22:13:20 UTC
        assert_eq!(format_datetime(1_700_000_000), "2023-11-14 22:13");
    }

    #[test]
    fn test_path_segments() {
        assert_eq!(path_segments("/home/user"), vec!["/", "home", "user"]);
        assert_eq!(path_segments("/"), vec!["/"]);
        assert_eq!(path_segments(r"C:\Users\me"), vec![r"C:\", "Users", "me"]);
        assert_eq!(path_segments("relative/dir"), vec!["relative", "dir"]);
    }

    #[test]
    fn test_path_prefixes() {
        let pairs = |v: &[(&str, &str)]| -> Vec<(String, String)> {
            v.iter()
                .map(|(a, b)| (a.to_string(), b.to_string()))
                .collect()
        };

        assert_eq!(
            path_prefixes("/home/user"),
            pairs(&[("/", "/"), ("home", "/home"), ("user", "/home/user")])
        );
        assert_eq!(
            path_prefixes(r"C:\Users\me"),
            pairs(&[(r"C:\", r"C:\"), ("Users", r"C:\Users"), ("me", r"C:\Users\me")])
        );
        assert_eq!(
            path_prefixes("data/docs"),
            pairs(&[("data", "data"), ("docs", "data/docs")])
        );
        assert!(path_prefixes("").is_empty());
    }
}
