use crate::types::db::item;

/// Text columns the filter engine can match against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextField {
    Name,
    Description,
    Category,
    Thickness,
    Side,
    Lamination,
    Size,
}

impl TextField {
    pub fn column(self) -> item::Column {
        match self {
            TextField::Name => item::Column::Name,
            TextField::Description => item::Column::Description,
            TextField::Category => item::Column::Category,
            TextField::Thickness => item::Column::Thickness,
            TextField::Side => item::Column::Side,
            TextField::Lamination => item::Column::Lamination,
            TextField::Size => item::Column::Size,
        }
    }

    /// Field name as it appears in API payloads
    pub fn api_name(self) -> &'static str {
        match self {
            TextField::Name => "name",
            TextField::Description => "description",
            TextField::Category => "category",
            TextField::Thickness => "thickness",
            TextField::Side => "side",
            TextField::Lamination => "lamination",
            TextField::Size => "size",
        }
    }
}

/// Fields holding a comma-joined list of atomic option values
///
/// These are the fields whose option universe is derived from existing items
/// and which accept a single-option filter on listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionField {
    Category,
    Thickness,
    Side,
    Lamination,
    Size,
}

impl OptionField {
    pub const ALL: [OptionField; 5] = [
        OptionField::Category,
        OptionField::Thickness,
        OptionField::Side,
        OptionField::Lamination,
        OptionField::Size,
    ];

    pub fn text_field(self) -> TextField {
        match self {
            OptionField::Category => TextField::Category,
            OptionField::Thickness => TextField::Thickness,
            OptionField::Side => TextField::Side,
            OptionField::Lamination => TextField::Lamination,
            OptionField::Size => TextField::Size,
        }
    }

    pub fn column(self) -> item::Column {
        self.text_field().column()
    }

    pub fn api_name(self) -> &'static str {
        self.text_field().api_name()
    }
}
