use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub type Tag = String;

/// OFDB category, serialized as the category id the API uses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, ToSchema)]
pub enum Category {
    #[serde(rename = "2cd00bebec0c48ba9db761da48678134")]
    Initiative,
    #[serde(rename = "77b3c33a92554bcf8e8c2c86cedd6f6f")]
    Company,
    #[serde(rename = "c2dc278a2d6a4b9b8a50cb606fc017ed")]
    Event,
}

/// A single `(tag, count)` pair of the popular tags response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TagCount(pub Tag, pub u64);

impl TagCount {
    pub fn tag(&self) -> &str {
        &self.0
    }

    pub fn count(&self) -> u64 {
        self.1
    }
}

/// Popular tags, most frequent first.
pub type TagsCount = Vec<TagCount>;

/// Query parameters of the popular tags endpoint.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct PopularTagsRequest {
    pub min_count: u32,
    pub max_count: u32,
    pub limit: u32,
    pub offset: u32,
}

impl PopularTagsRequest {
    pub fn query_pairs(&self) -> [(&'static str, String); 4] {
        [
            ("min_count", self.min_count.to_string()),
            ("max_count", self.max_count.to_string()),
            ("limit", self.limit.to_string()),
            ("offset", self.offset.to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_uses_ofdb_ids() {
        let json = serde_json::to_string(&Category::Event).unwrap();
        assert_eq!(json, r#""c2dc278a2d6a4b9b8a50cb606fc017ed""#);
        let parsed: Category = serde_json::from_str(r#""77b3c33a92554bcf8e8c2c86cedd6f6f""#).unwrap();
        assert_eq!(parsed, Category::Company);
    }

    #[test]
    fn test_tags_count_keeps_order() {
        let tags: TagsCount = serde_json::from_str(r#"[["organic", 12], ["bike", 7]]"#).unwrap();
        assert_eq!(tags.len(), 2);
        assert_eq!(tags[0].tag(), "organic");
        assert_eq!(tags[0].count(), 12);
        assert_eq!(tags[1].tag(), "bike");
    }

    #[test]
    fn test_popular_tags_query_pairs() {
        let request = PopularTagsRequest {
            min_count: 1,
            max_count: 10,
            limit: 5,
            offset: 0,
        };
        let pairs = request.query_pairs();
        assert_eq!(pairs[0], ("min_count", "1".to_string()));
        assert_eq!(pairs[1], ("max_count", "10".to_string()));
        assert_eq!(pairs[2], ("limit", "5".to_string()));
        assert_eq!(pairs[3], ("offset", "0".to_string()));
    }
}
