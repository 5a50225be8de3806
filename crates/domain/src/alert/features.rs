use std::collections::BTreeSet;

use crate::common::entity::ThreatCategory;

/// Fixed SOC vocabulary recognized by keyword extraction.
const KEYWORD_VOCABULARY: [&str; 32] = [
    "failed",
    "login",
    "attempt",
    "suspicious",
    "malware",
    "injection",
    "sql",
    "phishing",
    "email",
    "unauthorized",
    "admin",
    "access",
    "ssh",
    "host",
    "pc",
    "link",
    "detected",
    "multiple",
    "attempts",
    "download",
    "endpoint",
    "alert",
    "ip",
    "address",
    "user",
    "password",
    "breach",
    "vulnerability",
    "exploit",
    "attack",
    "threat",
    "incident",
];

/// Ordered categorization rules. First match wins, so the order is part of
/// the contract: "sql injection detected" is an injection attack, never
/// anything later in the list.
const CATEGORY_RULES: [(ThreatCategory, &[&str]); 7] = [
    (ThreatCategory::Malware, &["malware", "virus", "trojan"]),
    (ThreatCategory::InjectionAttack, &["sql", "injection", "xss"]),
    (
        ThreatCategory::Authentication,
        &["failed", "login", "password", "ssh"],
    ),
    (ThreatCategory::Phishing, &["phishing", "email", "link"]),
    (
        ThreatCategory::UnauthorizedAccess,
        &["unauthorized", "admin", "access"],
    ),
    (ThreatCategory::Network, &["network", "firewall", "port"]),
    (
        ThreatCategory::AnomalyDetection,
        &["anomaly", "unusual", "suspicious"],
    ),
];

/// Base confidence before any indicator hits.
const BASE_CONFIDENCE: f64 = 0.5;

/// Specific threat wording: +0.10 per distinct hit.
const THREAT_INDICATORS: [&str; 5] = ["malware", "attack", "breach", "exploit", "vulnerability"];

/// Urgency wording: +0.15 per distinct hit, the strongest signal.
const URGENCY_KEYWORDS: [&str; 4] = ["critical", "severe", "high", "immediate"];

/// Detection-source names: +0.10 per distinct hit.
const SOURCE_INDICATORS: [&str; 5] = ["firewall", "ids", "edr", "siem", "endpoint"];

/// Extract the vocabulary keywords present in a message.
///
/// Whitespace tokenization with non-word characters stripped per token; a
/// token counts only if it is in the vocabulary and longer than two
/// characters after stripping. Set semantics: duplicates collapse.
pub fn extract_keywords(message: &str) -> BTreeSet<String> {
    let lowered = message.to_lowercase();
    let mut keywords = BTreeSet::new();

    for word in lowered.split_whitespace() {
        let stripped: String = word
            .chars()
            .filter(|&c| c.is_alphanumeric() || c == '_')
            .collect();
        if stripped.len() > 2 && KEYWORD_VOCABULARY.contains(&stripped.as_str()) {
            keywords.insert(stripped);
        }
    }

    keywords
}

/// Assign the threat category via the ordered rule list; `Other` when no
/// rule matches. Substring matches on the lowercased message.
pub fn categorize(message: &str) -> ThreatCategory {
    let lowered = message.to_lowercase();

    for (category, triggers) in CATEGORY_RULES {
        if triggers.iter().any(|t| lowered.contains(t)) {
            return category;
        }
    }

    ThreatCategory::Other
}

/// Score how confidently the message describes a real threat.
///
/// Starts at the 0.5 base and accumulates a fixed increment per distinct
/// indicator found as a substring; the result is clamped at 1.0. A message
/// with no hits keeps the base score, so the range is [0.5, 1.0].
pub fn score_confidence(message: &str) -> f64 {
    let lowered = message.to_lowercase();
    let mut score = BASE_CONFIDENCE;

    for indicator in THREAT_INDICATORS {
        if lowered.contains(indicator) {
            score += 0.10;
        }
    }
    for keyword in URGENCY_KEYWORDS {
        if lowered.contains(keyword) {
            score += 0.15;
        }
    }
    for indicator in SOURCE_INDICATORS {
        if lowered.contains(indicator) {
            score += 0.10;
        }
    }

    score.min(1.0)
}
