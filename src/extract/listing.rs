use crate::models::api::Widget;
use crate::models::Listing;

/// Title phrases for co-living, shared rooms and dormitories
const EXCLUDED_PHRASES: [&str; 3] = ["همخونه", "هم خانه", "خوابگاه"];

/// True when the title advertises something other than a whole apartment
pub fn is_excluded(title: &str) -> bool {
    EXCLUDED_PHRASES.iter().any(|phrase| title.contains(phrase))
}

/// Convert a search result widget into a listing, or `None` if its title is excluded.
pub fn listing_from_widget(widget: &Widget) -> Option<Listing> {
    let data = &widget.data;
    if is_excluded(&data.title) {
        return None;
    }

    Some(Listing {
        token: data.token.clone(),
        title: data.title.clone(),
        top_description_text: data.top_description_text.clone(),
        middle_description_text: data.middle_description_text.clone(),
        bottom_description_text: data.bottom_description_text.clone(),
    })
}
