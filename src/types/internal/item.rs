use std::fmt;

/// The four business fields of an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ItemField {
    Name,
    Description,
    Category,
    Price,
}

impl ItemField {
    /// All fields in form order
    pub const ALL: [ItemField; 4] = [
        ItemField::Name,
        ItemField::Description,
        ItemField::Category,
        ItemField::Price,
    ];

    /// Wire name of the field
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemField::Name => "name",
            ItemField::Description => "description",
            ItemField::Category => "category",
            ItemField::Price => "price",
        }
    }

    /// Human-readable label used in messages and forms
    pub fn label(&self) -> &'static str {
        match self {
            ItemField::Name => "Name",
            ItemField::Description => "Description",
            ItemField::Category => "Category",
            ItemField::Price => "Price",
        }
    }
}

impl fmt::Display for ItemField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field values for a new item, before the store assigns id and timestamp
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: f64,
}

/// A partial update. `None` means "leave unchanged".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
}

impl ItemChanges {
    /// True when no field is supplied
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.category.is_none()
            && self.price.is_none()
    }
}

impl From<NewItem> for ItemChanges {
    fn from(item: NewItem) -> Self {
        Self {
            name: Some(item.name),
            description: Some(item.description),
            category: Some(item.category),
            price: Some(item.price),
        }
    }
}
