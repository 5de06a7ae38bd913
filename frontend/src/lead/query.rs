use url::form_urlencoded;

/// Ordered query parameters; `set` replaces an existing key in place.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `?a=1&b=two+words` style input the way `URLSearchParams` does.
    /// The leading `?` is optional.
    pub fn parse(search: &str) -> Self {
        let search = search.strip_prefix('?').unwrap_or(search);
        let pairs = form_urlencoded::parse(search.as_bytes())
            .into_owned()
            .collect();
        Self { pairs }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Like `get`, but treats an empty value as absent.
    pub fn get_non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.is_empty())
    }

    pub fn set(&mut self, key: &str, value: &str) {
        if let Some(pair) = self.pairs.iter_mut().find(|(k, _)| k == key) {
            pair.1 = value.to_string();
        } else {
            self.pairs.push((key.to_string(), value.to_string()));
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish()
    }

    pub fn append_to(&self, base: &str) -> String {
        format!("{}?{}", base, self.to_query_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_decodes_plus_and_percent() {
        let params = QueryParams::parse("?full_name=Ada+Lovelace&email=ada%40example.com&flag");
        assert_eq!(params.get("full_name"), Some("Ada Lovelace"));
        assert_eq!(params.get("email"), Some("ada@example.com"));
        assert_eq!(params.get("flag"), Some(""));
        assert_eq!(params.get_non_empty("flag"), None);
        assert_eq!(params.get("missing"), None);
    }

    #[test]
    fn first_occurrence_wins() {
        let params = QueryParams::parse("priority=high&priority=low");
        assert_eq!(params.get("priority"), Some("high"));
    }

    #[test]
    fn set_replaces_in_place() {
        let mut params = QueryParams::new();
        params.set("a", "1");
        params.set("b", "2");
        params.set("a", "3");
        assert_eq!(params.to_query_string(), "a=3&b=2");
    }

    #[test]
    fn encoded_values_survive_a_reparse() {
        let mut params = QueryParams::new();
        params.set("full_name", "José Ñúñez & Co");
        params.set("email", "jose+tax@example.com");
        let url = params.append_to("https://consultation.moontax.com/hp");
        let query = url.split_once('?').map(|(_, q)| q).unwrap_or_default();
        let reparsed = QueryParams::parse(query);
        assert_eq!(reparsed, params);
    }

    #[test]
    fn invalid_escapes_decode_like_the_browser() {
        let params = QueryParams::parse("full_name=Jos%E9&x=%zz&y=100%");
        assert_eq!(params.get("full_name"), Some("Jos\u{FFFD}"));
        assert_eq!(params.get("x"), Some("%zz"));
        assert_eq!(params.get("y"), Some("100%"));
    }

    #[test]
    fn spaces_encode_as_plus() {
        let mut params = QueryParams::new();
        params.set("full_name", "Ada King");
        params.set("email", "ada+tax@example.com");
        assert_eq!(
            params.to_query_string(),
            "full_name=Ada+King&email=ada%2Btax%40example.com"
        );
    }

    #[test]
    fn empty_search_has_no_pairs() {
        assert!(QueryParams::parse("").is_empty());
        assert!(QueryParams::parse("?").is_empty());
    }
}
