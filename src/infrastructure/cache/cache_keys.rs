pub fn scope_summary_key(scope_id: &str) -> String {
    format!("scope_summary:{}", scope_id)
}
