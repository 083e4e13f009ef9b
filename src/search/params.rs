//! Filter sets for image and video searches
//!
//! Every field has the default documented by the Pixabay API. Values are sent
//! as given; the service is the authority on what it accepts. [`ImageSearch::validate`]
//! and [`VideoSearch::validate`] check the documented limits locally for callers
//! who want to fail before the request.

use crate::error::PixabayError;
use crate::network::QueryParams;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default search term
pub const DEFAULT_QUERY: &str = "yellow flower";

/// Longest accepted search term, in characters
pub const MAX_QUERY_LEN: usize = 100;

/// Accepted `per_page` range
pub const PER_PAGE_RANGE: std::ops::RangeInclusive<u32> = 3..=200;

/// Language codes the API searches in
pub const LANGUAGES: &[&str] = &[
    "cs", "da", "de", "en", "es", "fr", "id", "it", "hu", "nl", "no", "pl", "pt", "ro", "sk",
    "fi", "sv", "tr", "vi", "th", "bg", "ru", "el", "ja", "ko", "zh",
];

/// Categories results can be filtered by
pub const CATEGORIES: &[&str] = &[
    "fashion",
    "nature",
    "backgrounds",
    "science",
    "education",
    "people",
    "feelings",
    "religion",
    "health",
    "places",
    "animals",
    "industry",
    "food",
    "computer",
    "sports",
    "transportation",
    "travel",
    "buildings",
    "business",
    "music",
];

/// Compact details or high resolution image payloads
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseGroup {
    #[default]
    ImageDetails,
    /// Requires approved full API access
    HighResolution,
}

impl ResponseGroup {
    /// Value as sent on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseGroup::ImageDetails => "image_details",
            ResponseGroup::HighResolution => "high_resolution",
        }
    }
}

impl fmt::Display for ResponseGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of image to return
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageType {
    #[default]
    All,
    Photo,
    Illustration,
    Vector,
}

impl ImageType {
    /// Value as sent on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageType::All => "all",
            ImageType::Photo => "photo",
            ImageType::Illustration => "illustration",
            ImageType::Vector => "vector",
        }
    }
}

impl fmt::Display for ImageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    #[default]
    All,
    /// Wider than tall
    Horizontal,
    /// Taller than wide
    Vertical,
}

impl Orientation {
    /// Value as sent on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::All => "all",
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of video to return
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VideoType {
    #[default]
    All,
    Film,
    Animation,
}

impl VideoType {
    /// Value as sent on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            VideoType::All => "all",
            VideoType::Film => "film",
            VideoType::Animation => "animation",
        }
    }
}

impl fmt::Display for VideoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result ordering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Order {
    #[default]
    Popular,
    Latest,
}

impl Order {
    /// Value as sent on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Order::Popular => "popular",
            Order::Latest => "latest",
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn flag(value: bool) -> String {
    let flag = if value { "true" } else { "false" };
    flag.to_string()
}

/// Image search filters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageSearch {
    /// Search term, at most 100 characters
    pub query: String,
    /// Language code, one of [`LANGUAGES`]
    pub lang: String,
    /// ID, hash ID, or comma separated list of either
    pub id: String,
    pub response_group: ResponseGroup,
    pub image_type: ImageType,
    pub orientation: Orientation,
    /// Empty or one of [`CATEGORIES`]
    pub category: String,
    pub min_width: u32,
    pub min_height: u32,
    pub editors_choice: bool,
    pub safesearch: bool,
    pub order: Order,
    /// Page number, starting at 1
    pub page: u32,
    /// Results per page, 3 to 200
    pub per_page: u32,
    /// JSONP callback name
    pub callback: String,
    /// Indent the JSON output; not meant for production
    pub pretty: bool,
}

impl Default for ImageSearch {
    fn default() -> Self {
        Self {
            query: DEFAULT_QUERY.to_string(),
            lang: "en".to_string(),
            id: String::new(),
            response_group: ResponseGroup::default(),
            image_type: ImageType::default(),
            orientation: Orientation::default(),
            category: String::new(),
            min_width: 0,
            min_height: 0,
            editors_choice: false,
            safesearch: false,
            order: Order::default(),
            page: 1,
            per_page: 20,
            callback: String::new(),
            pretty: false,
        }
    }
}

/// Video search filters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoSearch {
    pub query: String,
    pub lang: String,
    pub id: String,
    pub video_type: VideoType,
    pub category: String,
    pub min_width: u32,
    pub min_height: u32,
    pub editors_choice: bool,
    pub safesearch: bool,
    pub order: Order,
    pub page: u32,
    pub per_page: u32,
    pub callback: String,
    pub pretty: bool,
}

impl Default for VideoSearch {
    fn default() -> Self {
        Self {
            query: DEFAULT_QUERY.to_string(),
            lang: "en".to_string(),
            id: String::new(),
            video_type: VideoType::default(),
            category: String::new(),
            min_width: 0,
            min_height: 0,
            editors_choice: false,
            safesearch: false,
            order: Order::default(),
            page: 1,
            per_page: 20,
            callback: String::new(),
            pretty: false,
        }
    }
}

impl ImageSearch {
    /// Create a search with the API defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search term
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Set the language code
    pub fn lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    /// Fetch specific items by ID or hash ID
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Filter by category
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn response_group(mut self, response_group: ResponseGroup) -> Self {
        self.response_group = response_group;
        self
    }

    pub fn image_type(mut self, image_type: ImageType) -> Self {
        self.image_type = image_type;
        self
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn min_width(mut self, min_width: u32) -> Self {
        self.min_width = min_width;
        self
    }

    pub fn min_height(mut self, min_height: u32) -> Self {
        self.min_height = min_height;
        self
    }

    /// Only return Editor's Choice awards
    pub fn editors_choice(mut self, editors_choice: bool) -> Self {
        self.editors_choice = editors_choice;
        self
    }

    /// Only return results suitable for all ages
    pub fn safesearch(mut self, safesearch: bool) -> Self {
        self.safesearch = safesearch;
        self
    }

    pub fn order(mut self, order: Order) -> Self {
        self.order = order;
        self
    }

    /// Select the result page
    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Set the number of results per page
    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }

    /// Wrap the response in a JSONP callback
    pub fn callback(mut self, callback: impl Into<String>) -> Self {
        self.callback = callback.into();
        self
    }

    /// Indent the JSON output
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Check the documented limits without contacting the API
    pub fn validate(&self) -> Result<(), PixabayError> {
        validate_common(&self.query, &self.lang, &self.category, self.per_page)
    }

    /// Query parameters for this search, key first
    pub fn to_params(&self, api_key: &str) -> QueryParams {
        vec![
            ("key".to_string(), api_key.to_string()),
            ("q".to_string(), self.query.clone()),
            ("lang".to_string(), self.lang.clone()),
            ("id".to_string(), self.id.clone()),
            ("response_group".to_string(), self.response_group.to_string()),
            ("image_type".to_string(), self.image_type.to_string()),
            ("orientation".to_string(), self.orientation.to_string()),
            ("category".to_string(), self.category.clone()),
            ("min_width".to_string(), self.min_width.to_string()),
            ("min_height".to_string(), self.min_height.to_string()),
            ("editors_choice".to_string(), flag(self.editors_choice)),
            ("safesearch".to_string(), flag(self.safesearch)),
            ("order".to_string(), self.order.to_string()),
            ("page".to_string(), self.page.to_string()),
            ("per_page".to_string(), self.per_page.to_string()),
            ("callback".to_string(), self.callback.clone()),
            ("pretty".to_string(), flag(self.pretty)),
        ]
    }
}

impl VideoSearch {
    /// Create a search with the API defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search term
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Set the language code
    pub fn lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    /// Fetch specific items by ID or hash ID
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Filter by category
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn video_type(mut self, video_type: VideoType) -> Self {
        self.video_type = video_type;
        self
    }

    pub fn min_width(mut self, min_width: u32) -> Self {
        self.min_width = min_width;
        self
    }

    pub fn min_height(mut self, min_height: u32) -> Self {
        self.min_height = min_height;
        self
    }

    /// Only return Editor's Choice awards
    pub fn editors_choice(mut self, editors_choice: bool) -> Self {
        self.editors_choice = editors_choice;
        self
    }

    /// Only return results suitable for all ages
    pub fn safesearch(mut self, safesearch: bool) -> Self {
        self.safesearch = safesearch;
        self
    }

    pub fn order(mut self, order: Order) -> Self {
        self.order = order;
        self
    }

    /// Select the result page
    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Set the number of results per page
    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }

    /// Wrap the response in a JSONP callback
    pub fn callback(mut self, callback: impl Into<String>) -> Self {
        self.callback = callback.into();
        self
    }

    /// Indent the JSON output
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Check the documented limits without contacting the API
    pub fn validate(&self) -> Result<(), PixabayError> {
        validate_common(&self.query, &self.lang, &self.category, self.per_page)
    }

    /// Query parameters for this search, key first
    pub fn to_params(&self, api_key: &str) -> QueryParams {
        vec![
            ("key".to_string(), api_key.to_string()),
            ("q".to_string(), self.query.clone()),
            ("lang".to_string(), self.lang.clone()),
            ("id".to_string(), self.id.clone()),
            ("video_type".to_string(), self.video_type.to_string()),
            ("category".to_string(), self.category.clone()),
            ("min_width".to_string(), self.min_width.to_string()),
            ("min_height".to_string(), self.min_height.to_string()),
            ("editors_choice".to_string(), flag(self.editors_choice)),
            ("safesearch".to_string(), flag(self.safesearch)),
            ("order".to_string(), self.order.to_string()),
            ("page".to_string(), self.page.to_string()),
            ("per_page".to_string(), self.per_page.to_string()),
            ("callback".to_string(), self.callback.clone()),
            ("pretty".to_string(), flag(self.pretty)),
        ]
    }
}

fn validate_common(
    query: &str,
    lang: &str,
    category: &str,
    per_page: u32,
) -> Result<(), PixabayError> {
    let query_len = query.chars().count();
    if query_len > MAX_QUERY_LEN {
        return Err(PixabayError::InvalidParameter {
            field: "q",
            reason: format!("at most {} characters allowed, got {}", MAX_QUERY_LEN, query_len),
        });
    }
    if !LANGUAGES.contains(&lang) {
        return Err(PixabayError::InvalidParameter {
            field: "lang",
            reason: format!("unsupported language code {:?}", lang),
        });
    }
    if !category.is_empty() && !CATEGORIES.contains(&category) {
        return Err(PixabayError::InvalidParameter {
            field: "category",
            reason: format!("unknown category {:?}", category),
        });
    }
    if !PER_PAGE_RANGE.contains(&per_page) {
        return Err(PixabayError::InvalidParameter {
            field: "per_page",
            reason: format!(
                "must be between {} and {}, got {}",
                PER_PAGE_RANGE.start(),
                PER_PAGE_RANGE.end(),
                per_page
            ),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(params: &QueryParams) -> Vec<(&str, &str)> {
        params
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect()
    }

    #[test]
    fn test_image_defaults() {
        let params = ImageSearch::new().to_params("secret");
        assert_eq!(
            pairs(&params),
            vec![
                ("key", "secret"),
                ("q", "yellow flower"),
                ("lang", "en"),
                ("id", ""),
                ("response_group", "image_details"),
                ("image_type", "all"),
                ("orientation", "all"),
                ("category", ""),
                ("min_width", "0"),
                ("min_height", "0"),
                ("editors_choice", "false"),
                ("safesearch", "false"),
                ("order", "popular"),
                ("page", "1"),
                ("per_page", "20"),
                ("callback", ""),
                ("pretty", "false"),
            ]
        );
    }

    #[test]
    fn test_video_defaults() {
        let params = VideoSearch::new().to_params("secret");
        assert_eq!(
            pairs(&params),
            vec![
                ("key", "secret"),
                ("q", "yellow flower"),
                ("lang", "en"),
                ("id", ""),
                ("video_type", "all"),
                ("category", ""),
                ("min_width", "0"),
                ("min_height", "0"),
                ("editors_choice", "false"),
                ("safesearch", "false"),
                ("order", "popular"),
                ("page", "1"),
                ("per_page", "20"),
                ("callback", ""),
                ("pretty", "false"),
            ]
        );
    }

    #[test]
    fn test_image_values_pass_through() {
        let search = ImageSearch::new()
            .query("  Cat & Dog  ")
            .lang("de")
            .id("195893,73424")
            .response_group(ResponseGroup::HighResolution)
            .image_type(ImageType::Vector)
            .orientation(Orientation::Vertical)
            .category("animals")
            .min_width(640)
            .min_height(480)
            .editors_choice(true)
            .safesearch(true)
            .order(Order::Latest)
            .page(7)
            .per_page(500)
            .callback("handle")
            .pretty(true);

        assert_eq!(
            pairs(&search.to_params("k")),
            vec![
                ("key", "k"),
                ("q", "  Cat & Dog  "),
                ("lang", "de"),
                ("id", "195893,73424"),
                ("response_group", "high_resolution"),
                ("image_type", "vector"),
                ("orientation", "vertical"),
                ("category", "animals"),
                ("min_width", "640"),
                ("min_height", "480"),
                ("editors_choice", "true"),
                ("safesearch", "true"),
                ("order", "latest"),
                ("page", "7"),
                ("per_page", "500"),
                ("callback", "handle"),
                ("pretty", "true"),
            ]
        );
    }

    #[test]
    fn test_video_values_pass_through() {
        let search = VideoSearch::new()
            .query("surf at dawn")
            .lang("ja")
            .id("1,2")
            .video_type(VideoType::Film)
            .category("music")
            .min_width(11)
            .min_height(22)
            .editors_choice(true)
            .safesearch(true)
            .order(Order::Latest)
            .page(3)
            .per_page(2)
            .callback("cb")
            .pretty(true);

        assert_eq!(
            pairs(&search.to_params("k")),
            vec![
                ("key", "k"),
                ("q", "surf at dawn"),
                ("lang", "ja"),
                ("id", "1,2"),
                ("video_type", "film"),
                ("category", "music"),
                ("min_width", "11"),
                ("min_height", "22"),
                ("editors_choice", "true"),
                ("safesearch", "true"),
                ("order", "latest"),
                ("page", "3"),
                ("per_page", "2"),
                ("callback", "cb"),
                ("pretty", "true"),
            ]
        );
    }

    #[test]
    fn test_video_type_values() {
        let params = VideoSearch::new()
            .video_type(VideoType::Animation)
            .to_params("k");
        assert!(pairs(&params).contains(&("video_type", "animation")));
        assert!(!params.iter().any(|(k, _)| k == "image_type"));
        assert!(!params.iter().any(|(k, _)| k == "response_group"));
    }

    #[test]
    fn test_partial_deserialize_uses_defaults() {
        let search: VideoSearch =
            serde_json::from_str(r#"{"query": "ocean", "video_type": "film"}"#).unwrap();
        assert_eq!(search.query, "ocean");
        assert_eq!(search.video_type, VideoType::Film);
        assert_eq!(search.per_page, 20);
        assert_eq!(search.order, Order::Popular);
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(ImageSearch::new().validate().is_ok());
        assert!(VideoSearch::new().category("music").validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let err = ImageSearch::new().per_page(2).validate().unwrap_err();
        assert!(matches!(
            err,
            PixabayError::InvalidParameter { field: "per_page", .. }
        ));

        let err = VideoSearch::new().per_page(201).validate().unwrap_err();
        assert!(matches!(
            err,
            PixabayError::InvalidParameter { field: "per_page", .. }
        ));

        assert!(ImageSearch::new().per_page(200).validate().is_ok());
        assert!(ImageSearch::new().per_page(3).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_long_query() {
        let err = ImageSearch::new()
            .query("x".repeat(101))
            .validate()
            .unwrap_err();
        assert!(matches!(err, PixabayError::InvalidParameter { field: "q", .. }));
        assert!(ImageSearch::new().query("x".repeat(100)).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_unknown_lang_and_category() {
        let err = ImageSearch::new().lang("xx").validate().unwrap_err();
        assert!(matches!(err, PixabayError::InvalidParameter { field: "lang", .. }));

        let err = VideoSearch::new().category("cars").validate().unwrap_err();
        assert!(matches!(
            err,
            PixabayError::InvalidParameter { field: "category", .. }
        ));
    }

    #[test]
    fn test_enum_display_matches_serde() {
        assert_eq!(
            serde_json::to_string(&ResponseGroup::HighResolution).unwrap(),
            format!("\"{}\"", ResponseGroup::HighResolution)
        );
        assert_eq!(Order::Latest.as_str(), "latest");
        assert_eq!(ImageType::Illustration.to_string(), "illustration");
    }
}
