/// Collapses whitespace and strips invisible marks so the same city typed
/// twice lands in the same group.
pub fn normalize_city(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}', '\u{200f}', '\u{200e}'], "");
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub(crate) fn normalize_header(value: &str) -> &str {
    value.trim_start_matches('\u{feff}').trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_city_collapses_whitespace_and_marks() {
        assert_eq!(normalize_city("\u{feff}  Tel   Aviv \u{200f}"), "Tel Aviv");
        assert_eq!(normalize_city("Haifa"), "Haifa");
    }

    #[test]
    fn normalize_header_strips_bom() {
        assert_eq!(normalize_header("\u{feff}Name "), "Name");
    }
}
