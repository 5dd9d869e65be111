//! Function categories seen in practice. The `type` column is free text;
//! these are conventions, not an enforced set.

pub const DETECTOR: &str = "detector";
pub const INTERACTOR: &str = "interactor";
pub const REID: &str = "reid";
pub const TRACKER: &str = "tracker";

const KNOWN: &[&str] = &[DETECTOR, INTERACTOR, REID, TRACKER];

/// Whether `kind` is one of the conventional categories.
pub fn is_known(kind: &str) -> bool {
    KNOWN.contains(&kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_kinds() {
        assert!(is_known("detector"));
        assert!(is_known("interactor"));
        assert!(!is_known("Detector"));
        assert!(!is_known("segmenter"));
    }
}
