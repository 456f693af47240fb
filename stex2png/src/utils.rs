const UNITS: [&str; 9] = ["Bytes", "KB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];

/// Human readable size using 1024 based units, trailing zeros of the fraction are dropped.
pub fn format_bytes(bytes: u64, precision: usize) -> String {
    if bytes == 0 {
        return "0 Bytes".to_owned();
    }

    let mut val = bytes as f64;
    let mut unit = 0;

    while val >= 1024.0 && unit < UNITS.len() - 1 {
        val /= 1024.0;
        unit += 1;
    }

    let val = format!("{:.precision$}", val, precision = precision);
    let val = if val.contains('.') {
        val.trim_end_matches('0').trim_end_matches('.')
    } else {
        &val
    };

    format!("{} {}", val, UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_sizes() {
        assert_eq!(format_bytes(0, 2), "0 Bytes");
        assert_eq!(format_bytes(4, 2), "4 Bytes");
        assert_eq!(format_bytes(1000, 2), "1000 Bytes");
        assert_eq!(format_bytes(1024, 2), "1 KB");
        assert_eq!(format_bytes(1536, 2), "1.5 KB");
        assert_eq!(format_bytes(1048576, 2), "1 MB");
        assert_eq!(format_bytes(1234567, 2), "1.18 MB");
        assert_eq!(format_bytes(1234567, 0), "1 MB");
    }
}
