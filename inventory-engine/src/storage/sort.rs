//! Sort keys for reordering a store

use std::cmp::Ordering;

use super::record::Computer;

/// Field a store can be sorted on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Lexicographic byte order of the processor type
    ProcessorType,
    /// Ascending processor frequency
    ProcessorFrequency,
}

impl SortKey {
    /// Compare two records on this key
    pub fn compare(&self, a: &Computer, b: &Computer) -> Ordering {
        match self {
            // str ordering is byte-wise, same as strcmp on the stored slots
            SortKey::ProcessorType => a.processor_type.as_str().cmp(b.processor_type.as_str()),
            // IEEE total order: -NaN < -inf < ... < inf < NaN
            SortKey::ProcessorFrequency => a.processor_frequency.total_cmp(&b.processor_frequency),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SortKey::ProcessorType => "processor type",
            SortKey::ProcessorFrequency => "processor frequency",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_comparison_is_bytewise() {
        let key = SortKey::ProcessorType;
        let amd = Computer::new("AMD", 1.0, 0, 0, "");
        let intel = Computer::new("Intel", 1.0, 0, 0, "");
        let intel_core = Computer::new("Intel Core", 1.0, 0, 0, "");
        let lower = Computer::new("arm", 1.0, 0, 0, "");

        assert_eq!(key.compare(&amd, &intel), Ordering::Less);
        assert_eq!(key.compare(&intel, &intel_core), Ordering::Less);
        // Uppercase ASCII sorts before lowercase
        assert_eq!(key.compare(&lower, &intel), Ordering::Greater);
        assert_eq!(key.compare(&intel, &intel), Ordering::Equal);
    }

    #[test]
    fn test_frequency_comparison() {
        let key = SortKey::ProcessorFrequency;
        let slow = Computer::new("A", 1.5, 0, 0, "");
        let fast = Computer::new("B", 4.0, 0, 0, "");
        let nan = Computer::new("C", f64::NAN, 0, 0, "");

        assert_eq!(key.compare(&slow, &fast), Ordering::Less);
        assert_eq!(key.compare(&fast, &slow), Ordering::Greater);
        assert_eq!(key.compare(&fast, &nan), Ordering::Less);
    }
}
