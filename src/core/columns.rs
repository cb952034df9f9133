use csv::StringRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Category,
    Price,
    Discount,
    Image,
}

/// A mapped field's cell in one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell<'r> {
    /// No header matched the field.
    Unmapped,
    /// The header matched but the row is too short to reach the column.
    Missing,
    Value(&'r str),
}

/// Header keywords per field, English and Azerbaijani. Order is priority:
/// a header belongs to the first field whose keyword it contains.
const FIELD_KEYWORDS: [(Field, &[&str]); 5] = [
    (Field::Name, &["name", "məhsul", "ad"]),
    (Field::Category, &["category", "kateqoriya"]),
    (Field::Price, &["price", "qiymət", "qiymet"]),
    (Field::Discount, &["discount", "endirim"]),
    (Field::Image, &["image", "şəkil", "sekil"]),
];

pub fn classify_header(header: &str) -> Option<Field> {
    let lower = header.to_lowercase();

    FIELD_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(field, _)| *field)
}

/// Column index per field, resolved once from the header row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnMap {
    pub name: Option<usize>,
    pub category: Option<usize>,
    pub price: Option<usize>,
    pub discount: Option<usize>,
    pub image: Option<usize>,
}

impl ColumnMap {
    /// When several headers map to one field the right-most column wins.
    pub fn from_headers(headers: &StringRecord) -> Self {
        let mut map = ColumnMap::default();

        for (idx, header) in headers.iter().enumerate() {
            let slot = match classify_header(header) {
                Some(Field::Name) => &mut map.name,
                Some(Field::Category) => &mut map.category,
                Some(Field::Price) => &mut map.price,
                Some(Field::Discount) => &mut map.discount,
                Some(Field::Image) => &mut map.image,
                None => continue,
            };
            *slot = Some(idx);
        }

        map
    }

    pub fn index(&self, field: Field) -> Option<usize> {
        match field {
            Field::Name => self.name,
            Field::Category => self.category,
            Field::Price => self.price,
            Field::Discount => self.discount,
            Field::Image => self.image,
        }
    }

    pub fn get<'r>(&self, field: Field, record: &'r StringRecord) -> Option<&'r str> {
        record.get(self.index(field)?)
    }

    pub fn cell<'r>(&self, field: Field, record: &'r StringRecord) -> Cell<'r> {
        match self.index(field) {
            None => Cell::Unmapped,
            Some(idx) => record.get(idx).map_or(Cell::Missing, Cell::Value),
        }
    }
}
