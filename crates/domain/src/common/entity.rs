use serde::{Deserialize, Serialize};

/// Threat category assigned to an alert by the feature extractor.
///
/// Closed set: categorization evaluates an ordered rule list and the first
/// matching rule wins, so exactly one category applies per alert. The
/// declaration order matches rule-evaluation order (`Other` is the
/// fallback), and the derived `Ord` follows it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum ThreatCategory {
    Malware,
    #[serde(rename = "Injection Attack")]
    InjectionAttack,
    Authentication,
    Phishing,
    #[serde(rename = "Unauthorized Access")]
    UnauthorizedAccess,
    Network,
    #[serde(rename = "Anomaly Detection")]
    AnomalyDetection,
    Other,
}

impl ThreatCategory {
    /// All categories in rule-evaluation order, fallback last.
    pub const ALL: [Self; 8] = [
        Self::Malware,
        Self::InjectionAttack,
        Self::Authentication,
        Self::Phishing,
        Self::UnauthorizedAccess,
        Self::Network,
        Self::AnomalyDetection,
        Self::Other,
    ];

    /// Human-readable label, identical to the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Malware => "Malware",
            Self::InjectionAttack => "Injection Attack",
            Self::Authentication => "Authentication",
            Self::Phishing => "Phishing",
            Self::UnauthorizedAccess => "Unauthorized Access",
            Self::Network => "Network",
            Self::AnomalyDetection => "Anomaly Detection",
            Self::Other => "Other",
        }
    }
}

impl std::fmt::Display for ThreatCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_lists_every_category_once() {
        assert_eq!(ThreatCategory::ALL.len(), 8);
        for (i, a) in ThreatCategory::ALL.iter().enumerate() {
            for b in &ThreatCategory::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn serialized_form_matches_label() {
        for category in ThreatCategory::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{category}\""));
        }
    }

    #[test]
    fn other_sorts_last() {
        let mut sorted = ThreatCategory::ALL;
        sorted.sort();
        assert_eq!(sorted[7], ThreatCategory::Other);
    }
}
