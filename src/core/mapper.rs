//! Catalog row → eBay listing field derivation

use crate::config::CatalogConstants;
use crate::core::capacity::format_capacity;
use crate::core::description::render_description;
use crate::core::validator::{check_required_columns, DESCRIPTION_COLUMN, IMAGE_COLUMN_PREFIX};
use crate::error::FeedResult;
use crate::types::{CellValue, Field, InputRow, InputTable, Listing};

/// Separator eBay expects between photo URLs
pub const PHOTO_URL_SEPARATOR: &str = "|";

/// Derives listings from catalog rows
pub struct ListingMapper {
    constants: CatalogConstants,
}

impl Default for ListingMapper {
    fn default() -> Self {
        Self::new(CatalogConstants::default())
    }
}

impl ListingMapper {
    pub fn new(constants: CatalogConstants) -> Self {
        Self { constants }
    }

    /// Map every row of a validated table, preserving row order
    pub fn map_table(&self, table: &InputTable) -> FeedResult<Vec<Listing>> {
        check_required_columns(table.columns())?;

        let image_columns = table.columns_with_prefix(IMAGE_COLUMN_PREFIX);
        Ok(table
            .rows()
            .map(|row| self.map_row(&row, &image_columns))
            .collect())
    }

    /// Derive one listing. `image_columns` are positions of the `img*` columns.
    pub fn map_row(&self, row: &InputRow<'_>, image_columns: &[usize]) -> Listing {
        let listing_defaults = &self.constants.listing;
        let manufacturer = &self.constants.manufacturer;
        let responsible = &self.constants.responsible_person;

        let mut listing = Listing::new();
        let title = build_title(row);
        let description_text = row.get(DESCRIPTION_COLUMN).to_string();
        let description = render_description(&title, Some(description_text.as_str()));

        listing.set(Field::Action, listing_defaults.action.as_str());
        listing.set(Field::CustomLabel, row.get("sku").clone());
        listing.set(Field::Title, title);

        // Price
        let price = row.get("prezzo marketplace");
        listing.set(Field::StartPrice, price.clone());
        listing.set(Field::BuyItNowPrice, price.clone());
        listing.set(Field::Quantity, f64::from(listing_defaults.quantity));

        listing.set(Field::PhotoUrl, join_photo_urls(row, image_columns));
        listing.set(Field::Description, description);

        // Fixed listing terms
        listing.set(Field::Format, listing_defaults.format.as_str());
        listing.set(Field::Duration, listing_defaults.duration.as_str());
        listing.set(Field::VatPercent, listing_defaults.vat_percent);
        listing.set(Field::Location, listing_defaults.location.as_str());
        listing.set(Field::ReturnsWithin, listing_defaults.returns_within.as_str());
        listing.set(
            Field::ReturnShippingPaidBy,
            listing_defaults.return_shipping_paid_by.as_str(),
        );

        // Item specifics
        listing.set(Field::Brand, row.get("marca").clone());
        listing.set(Field::Mpn, row.get("codice prodotto").clone());
        listing.set(Field::Viscosity, row.get("viscosita").clone());
        listing.set(Field::VehicleBrand, listing_defaults.vehicle_brand.as_str());
        listing.set(Field::Capacity, format_capacity(row.get("formato (l)")));
        listing.set(Field::Usage, row.get("utilizzo").clone());
        listing.set(Field::Kind, row.get("tipologia").clone());

        // GPSR compliance
        listing.set(Field::ManufacturerName, manufacturer.name.as_str());
        listing.set(Field::ManufacturerAddress, manufacturer.address_line1.as_str());
        listing.set(Field::ManufacturerCity, manufacturer.city.as_str());
        listing.set(Field::ManufacturerCountry, manufacturer.country.as_str());
        listing.set(Field::ManufacturerPostalCode, manufacturer.postal_code.as_str());
        listing.set(Field::ManufacturerEmail, manufacturer.email.as_str());
        listing.set(Field::ResponsiblePerson, responsible.name.as_str());
        listing.set(Field::ResponsiblePersonType, responsible.kind.as_str());
        listing.set(Field::ResponsiblePersonCity, responsible.city.as_str());
        listing.set(Field::ResponsiblePersonCountry, responsible.country.as_str());
        listing.set(
            Field::ResponsiblePersonPostalCode,
            responsible.postal_code.as_str(),
        );

        listing
    }
}

/// `Olio Motore Auto <size> L di <name> <viscosity> <type> <acea> <brand>`
pub fn build_title(row: &InputRow<'_>) -> String {
    format!(
        "Olio Motore Auto {} L di {} {} {} {} {}",
        row.get("formato (l)"),
        row.get("nome olio"),
        row.get("viscosita"),
        row.get("tipologia"),
        row.get("acea"),
        row.get("marca"),
    )
}

/// Non-empty photo cells joined with `|`, in column order
pub fn join_photo_urls(row: &InputRow<'_>, image_columns: &[usize]) -> String {
    image_columns
        .iter()
        .map(|&pos| row.at(pos))
        .filter(|cell| !cell.is_missing())
        .map(CellValue::to_string)
        .collect::<Vec<_>>()
        .join(PHOTO_URL_SEPARATOR)
}
