/// Display names of the prediction engines, keyed by normalized engine key.
pub const ENGINE_LABELS: &[(&str, &str)] = &[
    ("statistical", "통계 분석"),
    ("pattern", "패턴 분석"),
    ("timeseries", "시계열 분석"),
    ("lstm", "LSTM 딥러닝"),
    ("graph", "그래프 이론"),
    ("numerology", "수학적 분석"),
    ("ml", "머신러닝"),
    ("gap", "간격 분석"),
    ("advancedpattern", "심화 패턴 분석"),
    ("sequencecorrelation", "수열 상관관계 분석"),
    ("poisson", "포아송 분포"),
    ("fourier", "푸리에 분석"),
];

/// Lowercases the key and strips `_`, `-` and whitespace, so
/// "advanced_pattern", "AdvancedPattern" and "advanced-pattern" compare equal.
pub fn normalize_engine_key(key: &str) -> String {
    key.chars()
        .filter(|c| *c != '_' && *c != '-' && !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Display name for an engine key; unknown engines show the raw key.
pub fn engine_label(key: &str) -> &str {
    let normalized = normalize_engine_key(key);
    ENGINE_LABELS
        .iter()
        .find(|(k, _)| *k == normalized)
        .map(|(_, label)| *label)
        .unwrap_or(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_resolution_ignores_case_and_underscores() {
        assert_eq!(engine_label("advanced_pattern"), "심화 패턴 분석");
        assert_eq!(engine_label("AdvancedPattern"), "심화 패턴 분석");
        assert_eq!(
            engine_label("sequence_correlation"),
            engine_label("SequenceCorrelation")
        );
    }

    #[test]
    fn test_unknown_engine_falls_back_to_key() {
        assert_eq!(engine_label("quantum_oracle"), "quantum_oracle");
    }

    #[test]
    fn test_fallback_borrows_the_key() {
        let key = String::from("Quantum-Oracle");
        assert!(std::ptr::eq(engine_label(&key), key.as_str()));
    }

    #[test]
    fn test_table_keys_are_normalized() {
        for (key, _) in ENGINE_LABELS {
            assert_eq!(&normalize_engine_key(key), key);
        }
    }
}
