//! Wire types for the upstream search and detail endpoints.

use serde::{Deserialize, Deserializer, Serialize};

/// Response of the search endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WidgetList {
    #[serde(default, deserialize_with = "null_as_default")]
    pub list_widgets: Vec<Widget>,
}

/// One self-describing UI unit: a type tag plus a loosely typed payload
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Widget {
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: WidgetData,
    #[serde(default, deserialize_with = "null_as_default")]
    pub widget_type: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WidgetData {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub value: String,
    #[serde(deserialize_with = "null_as_default")]
    pub top_description_text: String,
    #[serde(deserialize_with = "null_as_default")]
    pub middle_description_text: String,
    #[serde(deserialize_with = "null_as_default")]
    pub bottom_description_text: String,
    #[serde(deserialize_with = "null_as_default")]
    pub token: String,
    #[serde(deserialize_with = "null_as_default")]
    pub items: Vec<WidgetDataItem>,
    pub credit: Option<SliderValue>,
    pub rent: Option<SliderValue>,
}

/// Row inside a grouped widget (feature rows and info rows)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WidgetDataItem {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub available: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub value: String,
}

/// Rent slider amount as a plain number string
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SliderValue {
    #[serde(deserialize_with = "null_as_default")]
    pub value: String,
}

/// Named group of widgets in a detail document
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Section {
    #[serde(default, deserialize_with = "null_as_default")]
    pub section_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub widgets: Vec<Widget>,
}

/// Response of the detail endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostDetailResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub sections: Vec<Section>,
}

/// Upstream sends `null` where a field is empty; read it as the default value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body posted to the search endpoint
#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest {
    pub city_ids: Vec<String>,
    pub disable_recommendation: bool,
    pub search_data: SearchData,
    pub pagination_data: PaginationData,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchData {
    pub form_data: FormData,
}

#[derive(Debug, Clone, Serialize)]
pub struct FormData {
    pub data: FormFields,
}

#[derive(Debug, Clone, Serialize)]
pub struct FormFields {
    pub category: CategoryFilter,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryFilter {
    #[serde(rename = "str")]
    pub string: StringValue,
}

#[derive(Debug, Clone, Serialize)]
pub struct StringValue {
    pub value: String,
}

/// The API wants the page index twice, once per pagination layer
#[derive(Debug, Clone, Serialize)]
pub struct PaginationData {
    pub layer_page: u32,
    pub page: u32,
    #[serde(rename = "@type")]
    pub type_url: String,
}
