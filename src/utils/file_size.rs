const KB: u64 = 1024;
const MB: u64 = 1024 * 1024;

/// Human-readable size for the file preview. Whole bytes below 1 KiB,
/// one decimal place above.
pub fn format_size(bytes: u64) -> String {
    if bytes < KB {
        format!("{} B", bytes)
    } else if bytes < MB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes_below_one_kilobyte() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(1023), "1023 B");
    }

    #[test]
    fn test_kilobyte_range_has_one_decimal() {
        assert_eq!(format_size(1024), "1.0 KB");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(10 * 1024), "10.0 KB");
    }

    #[test]
    fn test_just_below_megabyte_stays_in_kilobytes() {
        assert_eq!(format_size(MB - 1), "1024.0 KB");
    }

    #[test]
    fn test_megabyte_range() {
        assert_eq!(format_size(MB), "1.0 MB");
        assert_eq!(format_size(5_452_595), "5.2 MB");
        assert_eq!(format_size(150 * MB), "150.0 MB");
    }
}
