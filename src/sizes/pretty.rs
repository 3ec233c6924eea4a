//! Human-readable byte sizes.

use std::fmt;

const UNITS: &[&str] = &["Bytes", "kB", "MB", "GB", "TB", "PB", "EB"];

/// A byte count that displays as e.g. `"295.9 kB"`.
///
/// Ordering compares the underlying byte counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PrettySize(u64);

impl PrettySize {
    pub fn new(bytes: u64) -> Self {
        Self(bytes)
    }

    pub fn bytes(&self) -> u64 {
        self.0
    }
}

impl From<u64> for PrettySize {
    fn from(bytes: u64) -> Self {
        Self(bytes)
    }
}

impl From<usize> for PrettySize {
    fn from(bytes: usize) -> Self {
        Self(bytes as u64)
    }
}

impl fmt::Display for PrettySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0 {
            return write!(f, "0 {}", UNITS[0]);
        }

        // Largest unit not exceeding the size
        let mut unit = 0;
        let mut scale = 1u64;
        while unit + 1 < UNITS.len() && self.0 / scale >= 1024 {
            scale *= 1024;
            unit += 1;
        }

        let value = format!("{:.1}", self.0 as f64 / scale as f64);
        let value = value.strip_suffix(".0").unwrap_or(&value);
        write!(f, "{} {}", value, UNITS[unit])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes() {
        assert_eq!(PrettySize::new(0).to_string(), "0 Bytes");
        assert_eq!(PrettySize::new(1).to_string(), "1 Bytes");
        assert_eq!(PrettySize::new(1023).to_string(), "1023 Bytes");
    }

    #[test]
    fn test_kilobytes() {
        assert_eq!(PrettySize::new(1024).to_string(), "1 kB");
        assert_eq!(PrettySize::new(1536).to_string(), "1.5 kB");
        assert_eq!(PrettySize::new(303_002).to_string(), "295.9 kB");
    }

    #[test]
    fn test_megabytes() {
        assert_eq!(PrettySize::new(1024 * 1024).to_string(), "1 MB");
        assert_eq!(PrettySize::new(2_747_269).to_string(), "2.6 MB");
    }

    #[test]
    fn test_rounding_up_crosses_unit_boundary_in_value_only() {
        // 1023.96 kB rounds to "1024 kB", the unit stays kB
        assert_eq!(PrettySize::new(1024 * 1024 - 40).to_string(), "1024 kB");
    }

    #[test]
    fn test_ordering_follows_bytes() {
        let mut sizes = vec![
            PrettySize::new(2_000_000),
            PrettySize::new(500),
            PrettySize::new(4096),
        ];
        sizes.sort();

        assert_eq!(
            sizes.iter().map(|s| s.bytes()).collect::<Vec<_>>(),
            vec![500, 4096, 2_000_000]
        );
    }
}
