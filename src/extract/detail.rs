use std::collections::HashMap;

use tracing::warn;

use super::numbers::{parse_currency, parse_decimal, parse_localized_decimal, parse_localized_int};
use super::{derive_region, ExtractError};
use crate::models::api::{PostDetailResponse, Section, Widget, WidgetData};
use crate::models::{Listing, ListingDetail, FREE, NEGOTIABLE};

const LIST_DATA: &str = "LIST_DATA";
const GROUP_FEATURE_ROW: &str = "GROUP_FEATURE_ROW";
const GROUP_INFO_ROW: &str = "GROUP_INFO_ROW";
const RENT_SLIDER: &str = "RENT_SLIDER";

const MONTHLY_RENT: &str = "اجارهٔ ماهانه";
const DEPOSIT: &str = "ودیعه";
const FREE_WORD: &str = "مجانی";
const NEGOTIABLE_WORD: &str = "توافقی";

const ELEVATOR: &str = "آسانسور";
const PARKING: &str = "پارکینگ";
const WAREHOUSE: &str = "انباری";

const METERAGE: &str = "متراژ";
const CONSTRUCTION_YEAR: &str = "ساخت";
const ROOMS: &str = "اتاق";
const NO_ROOMS: &str = "بدون اتاق";

/// Result of reading a detail document
#[derive(Debug, Clone, PartialEq)]
pub enum DetailOutcome {
    /// The document has no sections; the listing is gone upstream
    Removed,
    Detail(ListingDetail),
}

/// Build the detail record for `listing` from its detail document.
///
/// Widgets of `LIST_DATA` are indexed by type with the last duplicate winning.
/// Price rows are read from every widget, feature and info rows from the indexed
/// `GROUP_FEATURE_ROW` and `GROUP_INFO_ROW`, and when both prices are still zero
/// the `RENT_SLIDER` amounts are used instead.
pub fn extract_detail(
    listing: &Listing,
    document: &PostDetailResponse,
) -> Result<DetailOutcome, ExtractError> {
    if document.sections.is_empty() {
        return Ok(DetailOutcome::Removed);
    }

    let sections: HashMap<&str, &Section> = document
        .sections
        .iter()
        .map(|section| (section.section_name.as_str(), section))
        .collect();

    let mut detail = ListingDetail {
        token: listing.token.clone(),
        title: listing.title.clone(),
        region: derive_region(&listing.bottom_description_text).to_string(),
        ..ListingDetail::default()
    };

    let widgets = sections
        .get(LIST_DATA)
        .map(|section| section.widgets.as_slice())
        .unwrap_or_default();

    let mut by_type: HashMap<&str, &Widget> = HashMap::new();
    for widget in widgets {
        by_type.insert(widget.widget_type.as_str(), widget);
        apply_price_row(&mut detail, &widget.data)?;
    }

    if let Some(features) = by_type.get(GROUP_FEATURE_ROW) {
        apply_feature_row(&mut detail, &features.data);
    }

    if let Some(info) = by_type.get(GROUP_INFO_ROW) {
        apply_info_row(&mut detail, &info.data)?;
    }

    if detail.mortgage.is_zero() && detail.rent.is_zero() {
        match by_type.get(RENT_SLIDER) {
            Some(slider) => apply_rent_slider(&mut detail, &slider.data)?,
            None => warn!(token = %detail.token, "no rent or credit found"),
        }
    }

    Ok(DetailOutcome::Detail(detail))
}

fn apply_price_row(detail: &mut ListingDetail, data: &WidgetData) -> Result<(), ExtractError> {
    match data.title.as_str() {
        MONTHLY_RENT => match data.value.as_str() {
            FREE_WORD => detail.rent = FREE,
            // Negotiable monthly rent lands in the mortgage column.
            NEGOTIABLE_WORD => detail.mortgage = NEGOTIABLE,
            value => detail.rent = parse_currency("rent", value)?,
        },
        DEPOSIT => match data.value.as_str() {
            FREE_WORD => detail.mortgage = FREE,
            NEGOTIABLE_WORD => detail.mortgage = NEGOTIABLE,
            value => detail.mortgage = parse_currency("mortgage", value)?,
        },
        _ => {}
    }
    Ok(())
}

fn apply_feature_row(detail: &mut ListingDetail, data: &WidgetData) {
    for item in &data.items {
        if item.title.contains(ELEVATOR) {
            detail.elevator = item.available;
        }
        if item.title.contains(PARKING) {
            detail.parking = item.available;
        }
        if item.title.contains(WAREHOUSE) {
            detail.warehouse = item.available;
        }
    }
}

fn apply_info_row(detail: &mut ListingDetail, data: &WidgetData) -> Result<(), ExtractError> {
    for item in &data.items {
        if item.title.contains(METERAGE) {
            detail.meterage = parse_localized_decimal("meterage", &item.value)?;
        }
        if item.title.contains(CONSTRUCTION_YEAR) {
            detail.construction_year = parse_localized_int("construction_year", &item.value)?;
        }
        if item.title.contains(ROOMS) {
            detail.rooms = if item.value == NO_ROOMS {
                0
            } else {
                parse_localized_int("rooms", &item.value)?
            };
        }
    }
    Ok(())
}

fn apply_rent_slider(detail: &mut ListingDetail, data: &WidgetData) -> Result<(), ExtractError> {
    if let Some(credit) = data.credit.as_ref().filter(|c| !c.value.is_empty()) {
        detail.mortgage = parse_decimal("credit", &credit.value)?;
    }
    if let Some(rent) = data.rent.as_ref().filter(|r| !r.value.is_empty()) {
        detail.rent = parse_decimal("rent", &rent.value)?;
    }
    Ok(())
}
