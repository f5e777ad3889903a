//! Canned-response resolution for free-text questions.
//!
//! This is a lookup table, not an inference engine: an ordered list of
//! keyword rules is scanned top to bottom and the first rule whose keyword
//! appears in the lowercased query wins. Changing the matching policy is a
//! data change, not a control-flow change.

/// One matching rule: any keyword hit selects the response.
struct IntentRule {
    keywords: &'static [&'static str],
    response: &'static str,
}

/// Rules in priority order. Order is load-bearing: a query matching several
/// rules resolves to the earliest one.
const RULES: &[IntentRule] = &[
    IntentRule {
        keywords: &["kiến trúc", "hoạt động"],
        response: "GreenGuard vận hành trên 4 tầng: Device (ESP32+MPU6050) -> Connectivity \
                   (LoRaWAN/MQTT) -> AI Core (Anomaly Detection + LSTM) -> App Layer (Dashboard/Zalo).",
    },
    IntentRule {
        keywords: &["dự báo", "thời tiết"],
        response: "Mô hình LSTM kết hợp Weather API dự báo: Tăng cường giám sát lúc 16:00 - 17:00 \
                   do khả năng có gió giật cấp 7.",
    },
    IntentRule {
        keywords: &["1092", "nguyễn trãi"],
        response: "Cảnh báo cấp 1: Cây T-1092 tại Nguyễn Trãi đang có độ nghiêng vượt ngưỡng an \
                   toàn (15 độ). Đề nghị cử đội xử lý.",
    },
];

/// Reply when nothing matches, nudging toward supported topics.
pub const FALLBACK: &str =
    "Tôi chưa hiểu rõ câu hỏi. Bạn hãy thử hỏi về 'kiến trúc', 'dự báo' hoặc 'mã cây'.";

/// Resolve a query to its canned response.
///
/// Matching is case-insensitive substring search; unmatched queries get
/// [`FALLBACK`].
pub fn respond(query: &str) -> &'static str {
    let q = query.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|k| q.contains(k)))
        .map(|rule| rule.response)
        .unwrap_or(FALLBACK)
}
