use indexmap::IndexMap;

/// One CSV record: column name to raw string value, in file column order.
pub type RawRow = IndexMap<String, String>;

/// Output record fields, emitted in insertion order.
pub type FieldMap = IndexMap<String, String>;

/// Distinguished index column present in every data table.
pub const ROW_INDEX: &str = "_Id";

/// Index value marking a placeholder row that is skipped everywhere.
pub const PLACEHOLDER_ID: &str = "0";

/// Returns true when the row's index column carries the placeholder value.
pub fn is_placeholder(row: &RawRow) -> bool {
    row.get(ROW_INDEX).is_some_and(|id| id == PLACEHOLDER_ID)
}

/// Body of a normalized output record.
///
/// Most categories build named fields; mission-style categories emit a
/// bare value sequence with no field names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordBody {
    Fields(FieldMap),
    Values(Vec<String>),
}

impl RecordBody {
    /// Field values in emission order, regardless of body shape.
    pub fn values(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        match self {
            RecordBody::Fields(fields) => Box::new(fields.values().map(String::as_str)),
            RecordBody::Values(values) => Box::new(values.iter().map(String::as_str)),
        }
    }

    /// Named fields, when this body has them.
    pub fn fields(&self) -> Option<&FieldMap> {
        match self {
            RecordBody::Fields(fields) => Some(fields),
            RecordBody::Values(_) => None,
        }
    }

    pub fn fields_mut(&mut self) -> Option<&mut FieldMap> {
        match self {
            RecordBody::Fields(fields) => Some(fields),
            RecordBody::Values(_) => None,
        }
    }
}

/// Output markup shape, fixed per category at registration time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// `{{Template|field=value|...}}`, multi-line when a display name exists.
    Block,
    /// A markup table row of cell values.
    TableRow,
    /// `{{Template|value|value|...}}` with no field names.
    PositionalRow,
}

impl Layout {
    pub fn as_str(self) -> &'static str {
        match self {
            Layout::Block => "block",
            Layout::TableRow => "table row",
            Layout::PositionalRow => "positional row",
        }
    }
}
