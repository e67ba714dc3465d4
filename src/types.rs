use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

//==============================================================================
// Cell values
//==============================================================================

/// A single spreadsheet cell, reduced to the kinds the feed cares about
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    #[default]
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
}

static EMPTY_CELL: CellValue = CellValue::Empty;

impl CellValue {
    /// Empty cells and whitespace-only text both count as missing
    pub fn is_missing(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// Numeric interpretation (text is trimmed and parsed, TRUE/FALSE are 1/0)
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            CellValue::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            CellValue::Text(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Text(s) => f.write_str(s),
            CellValue::Number(n) => write!(f, "{}", format_number(*n)),
            CellValue::Bool(b) => write!(f, "{}", if *b { "TRUE" } else { "FALSE" }),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

/// Render a number the way a catalog author typed it: `5.0` → `5`, `1.5` → `1.5`
pub fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

//==============================================================================
// Input table
//==============================================================================

/// Catalog sheet after header normalization
#[derive(Debug, Clone, Default)]
pub struct InputTable {
    columns: Vec<String>,
    /// First position of each column name (duplicates resolve to the first)
    index: HashMap<String, usize>,
    rows: Vec<Vec<CellValue>>,
}

impl InputTable {
    pub fn new(columns: Vec<String>) -> Self {
        let mut index = HashMap::new();
        for (pos, name) in columns.iter().enumerate() {
            index.entry(name.clone()).or_insert(pos);
        }
        Self {
            columns,
            index,
            rows: Vec::new(),
        }
    }

    /// Append a data row, padding or truncating it to the header width
    pub fn push_row(&mut self, mut cells: Vec<CellValue>) {
        cells.resize(self.columns.len(), CellValue::Empty);
        self.rows.push(cells);
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Positions of every column whose name starts with `prefix`, in sheet order
    pub fn columns_with_prefix(&self, prefix: &str) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .filter(|(_, name)| name.starts_with(prefix))
            .map(|(pos, _)| pos)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, idx: usize) -> Option<InputRow<'_>> {
        self.rows.get(idx).map(|cells| InputRow { table: self, cells })
    }

    pub fn rows(&self) -> impl Iterator<Item = InputRow<'_>> {
        self.rows.iter().map(move |cells| InputRow { table: self, cells })
    }
}

/// Borrowed view over one catalog row
#[derive(Debug, Clone, Copy)]
pub struct InputRow<'a> {
    table: &'a InputTable,
    cells: &'a [CellValue],
}

impl<'a> InputRow<'a> {
    /// Cell under a normalized column name; unknown columns read as empty
    pub fn get(&self, column: &str) -> &'a CellValue {
        self.table
            .index
            .get(column)
            .and_then(|&pos| self.cells.get(pos))
            .unwrap_or(&EMPTY_CELL)
    }

    pub fn at(&self, pos: usize) -> &'a CellValue {
        self.cells.get(pos).unwrap_or(&EMPTY_CELL)
    }
}

//==============================================================================
// eBay fields and templates
//==============================================================================

/// Every column the eBay bulk-listing template knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Action,
    CustomLabel,
    Title,
    StartPrice,
    Quantity,
    PhotoUrl,
    Description,
    Format,
    Duration,
    BuyItNowPrice,
    VatPercent,
    Location,
    ReturnsWithin,
    ReturnShippingPaidBy,
    Brand,
    Mpn,
    Viscosity,
    VehicleBrand,
    Capacity,
    Usage,
    Kind,
    ManufacturerName,
    ManufacturerAddress,
    ManufacturerCity,
    ManufacturerCountry,
    ManufacturerPostalCode,
    ManufacturerEmail,
    ResponsiblePerson,
    ResponsiblePersonType,
    ResponsiblePersonCity,
    ResponsiblePersonCountry,
    ResponsiblePersonPostalCode,
}

impl Field {
    pub const COUNT: usize = 32;

    /// All fields in full-template order
    pub const ALL: [Field; Field::COUNT] = [
        Field::Action,
        Field::CustomLabel,
        Field::Title,
        Field::StartPrice,
        Field::Quantity,
        Field::PhotoUrl,
        Field::Description,
        Field::Format,
        Field::Duration,
        Field::BuyItNowPrice,
        Field::VatPercent,
        Field::Location,
        Field::ReturnsWithin,
        Field::ReturnShippingPaidBy,
        Field::Brand,
        Field::Mpn,
        Field::Viscosity,
        Field::VehicleBrand,
        Field::Capacity,
        Field::Usage,
        Field::Kind,
        Field::ManufacturerName,
        Field::ManufacturerAddress,
        Field::ManufacturerCity,
        Field::ManufacturerCountry,
        Field::ManufacturerPostalCode,
        Field::ManufacturerEmail,
        Field::ResponsiblePerson,
        Field::ResponsiblePersonType,
        Field::ResponsiblePersonCity,
        Field::ResponsiblePersonCountry,
        Field::ResponsiblePersonPostalCode,
    ];

    /// Column header as eBay's File Exchange expects it
    pub fn header(self) -> &'static str {
        match self {
            Field::Action => "Action(SiteID=Italy|Country=IT|Currency=EUR|Version=1193)",
            Field::CustomLabel => "Custom label (SKU)",
            Field::Title => "Title",
            Field::StartPrice => "Start price",
            Field::Quantity => "Quantity",
            Field::PhotoUrl => "Item photo URL",
            Field::Description => "Description",
            Field::Format => "Format",
            Field::Duration => "Duration",
            Field::BuyItNowPrice => "Buy It Now price",
            Field::VatPercent => "VAT%",
            Field::Location => "Location",
            Field::ReturnsWithin => "Returns within option",
            Field::ReturnShippingPaidBy => "Return shipping cost paid by",
            Field::Brand => "C:Marca",
            Field::Mpn => "C:MPN",
            Field::Viscosity => "C:Viscosità SAE",
            Field::VehicleBrand => "C:Marca veicolo",
            Field::Capacity => "C:Capienza",
            Field::Usage => "C:Utilizzo",
            Field::Kind => "C:Tipologia",
            Field::ManufacturerName => "Manufacturer Name",
            Field::ManufacturerAddress => "Manufacturer AddressLine1",
            Field::ManufacturerCity => "Manufacturer City",
            Field::ManufacturerCountry => "Manufacturer Country",
            Field::ManufacturerPostalCode => "Manufacturer PostalCode",
            Field::ManufacturerEmail => "Manufacturer Email",
            Field::ResponsiblePerson => "Responsible Person 1",
            Field::ResponsiblePersonType => "Responsible Person 1 Type",
            Field::ResponsiblePersonCity => "Responsible Person 1 City",
            Field::ResponsiblePersonCountry => "Responsible Person 1 Country",
            Field::ResponsiblePersonPostalCode => "Responsible Person 1 PostalCode",
        }
    }

    fn slot(self) -> usize {
        self as usize
    }
}

const MINIMAL_FIELDS: [Field; 17] = [
    Field::Action,
    Field::CustomLabel,
    Field::Title,
    Field::StartPrice,
    Field::Quantity,
    Field::Description,
    Field::Format,
    Field::Duration,
    Field::BuyItNowPrice,
    Field::VatPercent,
    Field::Location,
    Field::ReturnsWithin,
    Field::ReturnShippingPaidBy,
    Field::Brand,
    Field::Mpn,
    Field::Viscosity,
    Field::Capacity,
];

/// Output column set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Template {
    /// Full marketplace-submission template (photos, item specifics, GPSR blocks)
    #[default]
    Full,
    /// Core listing columns only, no photos or manufacturer data
    Minimal,
}

impl Template {
    pub fn fields(self) -> &'static [Field] {
        match self {
            Template::Full => &Field::ALL,
            Template::Minimal => &MINIMAL_FIELDS,
        }
    }

    pub fn headers(self) -> Vec<&'static str> {
        self.fields().iter().map(|f| f.header()).collect()
    }

    pub fn name(self) -> &'static str {
        match self {
            Template::Full => "full",
            Template::Minimal => "minimal",
        }
    }
}

impl FromStr for Template {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "full" => Ok(Template::Full),
            "minimal" => Ok(Template::Minimal),
            other => Err(format!(
                "Unknown template '{}' (expected 'full' or 'minimal')",
                other
            )),
        }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

//==============================================================================
// Output
//==============================================================================

/// One fully derived eBay listing (every field of the full template)
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    cells: Vec<CellValue>,
}

impl Default for Listing {
    fn default() -> Self {
        Self {
            cells: vec![CellValue::Empty; Field::COUNT],
        }
    }
}

impl Listing {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field: Field, value: impl Into<CellValue>) {
        self.cells[field.slot()] = value.into();
    }

    pub fn get(&self, field: Field) -> &CellValue {
        &self.cells[field.slot()]
    }

    /// Text of a field, empty when the cell is not text
    pub fn text(&self, field: Field) -> &str {
        self.get(field).as_text().unwrap_or("")
    }
}

/// Derived feed: listings projected through a template
#[derive(Debug, Clone, PartialEq)]
pub struct OutputTable {
    pub template: Template,
    pub listings: Vec<Listing>,
}

impl OutputTable {
    pub fn new(template: Template, listings: Vec<Listing>) -> Self {
        Self { template, listings }
    }

    pub fn headers(&self) -> Vec<&'static str> {
        self.template.headers()
    }

    /// Row cells in template order
    pub fn row(&self, idx: usize) -> Option<Vec<&CellValue>> {
        self.listings.get(idx).map(|listing| {
            self.template
                .fields()
                .iter()
                .map(|field| listing.get(*field))
                .collect()
        })
    }

    /// Rendered HTML descriptions, one per listing
    pub fn descriptions(&self) -> Vec<String> {
        self.listings
            .iter()
            .map(|l| l.text(Field::Description).to_string())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}
