use crate::models::api::{
    CategoryFilter, FormData, FormFields, PaginationData, SearchData, SearchRequest, StringValue,
};

/// Search filters sent with every page request
#[derive(Debug, Clone)]
pub struct SearchParams {
    /// Upstream city identifiers
    pub city_ids: Vec<String>,
    /// Category slug
    pub category: String,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            city_ids: vec!["1".to_string()],
            category: "apartment-rent".to_string(),
        }
    }
}

impl SearchParams {
    /// Request body for the given page index
    pub fn request(&self, page: u32) -> SearchRequest {
        SearchRequest {
            city_ids: self.city_ids.clone(),
            disable_recommendation: true,
            search_data: SearchData {
                form_data: FormData {
                    data: FormFields {
                        category: CategoryFilter {
                            string: StringValue {
                                value: self.category.clone(),
                            },
                        },
                    },
                },
            },
            pagination_data: PaginationData {
                layer_page: page,
                page,
                type_url: "type.googleapis.com/post_list.PaginationData".to_string(),
            },
        }
    }
}

/// Upstream endpoint locations
#[derive(Debug, Clone)]
pub struct Endpoints {
    pub search_url: String,
    /// Detail URL prefix; the token is appended
    pub detail_base_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::with_base("https://api.divar.ir")
    }
}

impl Endpoints {
    pub fn with_base(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            search_url: format!("{}/v8/postlist/w/search", base),
            detail_base_url: format!("{}/v8/posts-v2/web/", base),
        }
    }

    pub fn detail_url(&self, token: &str) -> String {
        format!("{}{}", self.detail_base_url, token)
    }
}
