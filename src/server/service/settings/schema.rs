//! Typed settings schema.
//!
//! Every setting is declared once in [`SETTINGS_SCHEMA`] with its storage key, kind and
//! default. Stored strings are parsed by the declared kind, never by their shape, so a text
//! setting holding `"123"` reads back as text.

use std::cmp::Ordering;

use entity::sea_orm_active_enums::BottleSize;
use sea_orm::ActiveEnum;

use crate::{model::settings::SettingsDto, server::model::db::WineModel};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SettingKey {
    DefaultBottleSize,
    Currency,
    LowQuantityThreshold,
    SortBy,
    ViewStyle,
    ShowPrices,
    ShowDrinkingWindow,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettingKind {
    Bool,
    Number,
    Text,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SettingValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

pub struct SettingSchema {
    pub key: SettingKey,
    /// Name used by the HTTP API.
    pub name: &'static str,
    /// Key of the row in the `setting` table.
    pub storage_key: &'static str,
    pub kind: SettingKind,
    /// Default in stored string form, always valid for `kind`.
    pub default: &'static str,
}

pub const SETTINGS_SCHEMA: [SettingSchema; 7] = [
    SettingSchema {
        key: SettingKey::DefaultBottleSize,
        name: "default_bottle_size",
        storage_key: "settings_default_bottle_size",
        kind: SettingKind::Text,
        default: "STANDARD",
    },
    SettingSchema {
        key: SettingKey::Currency,
        name: "currency",
        storage_key: "settings_currency",
        kind: SettingKind::Text,
        default: "USD",
    },
    SettingSchema {
        key: SettingKey::LowQuantityThreshold,
        name: "low_quantity_threshold",
        storage_key: "settings_low_quantity_threshold",
        kind: SettingKind::Number,
        default: "2",
    },
    SettingSchema {
        key: SettingKey::SortBy,
        name: "sort_by",
        storage_key: "settings_sort_by",
        kind: SettingKind::Text,
        default: "name",
    },
    SettingSchema {
        key: SettingKey::ViewStyle,
        name: "view_style",
        storage_key: "settings_view_style",
        kind: SettingKind::Text,
        default: "list",
    },
    SettingSchema {
        key: SettingKey::ShowPrices,
        name: "show_prices",
        storage_key: "settings_show_prices",
        kind: SettingKind::Bool,
        default: "true",
    },
    SettingSchema {
        key: SettingKey::ShowDrinkingWindow,
        name: "show_drinking_window",
        storage_key: "settings_show_drinking_window",
        kind: SettingKind::Bool,
        default: "true",
    },
];

impl SettingKey {
    pub const ALL: [SettingKey; 7] = [
        SettingKey::DefaultBottleSize,
        SettingKey::Currency,
        SettingKey::LowQuantityThreshold,
        SettingKey::SortBy,
        SettingKey::ViewStyle,
        SettingKey::ShowPrices,
        SettingKey::ShowDrinkingWindow,
    ];

    pub fn schema(self) -> &'static SettingSchema {
        // Declared in the same order as the enum
        &SETTINGS_SCHEMA[self as usize]
    }

    pub fn storage_key(self) -> &'static str {
        self.schema().storage_key
    }

    pub fn kind(self) -> SettingKind {
        self.schema().kind
    }

    pub fn name(self) -> &'static str {
        self.schema().name
    }

    /// Default value, parsed from the schema.
    pub fn default_value(self) -> SettingValue {
        let schema = self.schema();

        schema
            .kind
            .parse(schema.default)
            .unwrap_or_else(|| SettingValue::Text(schema.default.to_string()))
    }

    /// Looks up a key by its API name or its storage key.
    pub fn from_name(name: &str) -> Option<Self> {
        SETTINGS_SCHEMA
            .iter()
            .find(|schema| schema.name == name || schema.storage_key == name)
            .map(|schema| schema.key)
    }
}

impl SettingKind {
    /// Parses a stored string, `None` if it isn't valid for this kind.
    ///
    /// Booleans are only the literals `true` and `false`, numbers must be finite.
    pub fn parse(self, raw: &str) -> Option<SettingValue> {
        match self {
            SettingKind::Bool => match raw {
                "true" => Some(SettingValue::Bool(true)),
                "false" => Some(SettingValue::Bool(false)),
                _ => None,
            },
            SettingKind::Number => raw
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .map(SettingValue::Number),
            SettingKind::Text => Some(SettingValue::Text(raw.to_string())),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SettingKind::Bool => "a boolean (true or false)",
            SettingKind::Number => "a number",
            SettingKind::Text => "text",
        }
    }
}

impl SettingValue {
    pub fn kind(&self) -> SettingKind {
        match self {
            SettingValue::Bool(_) => SettingKind::Bool,
            SettingValue::Number(_) => SettingKind::Number,
            SettingValue::Text(_) => SettingKind::Text,
        }
    }

    /// The string stored in the `setting` table.
    pub fn to_storage_string(&self) -> String {
        match self {
            SettingValue::Bool(value) => value.to_string(),
            SettingValue::Number(value) => value.to_string(),
            SettingValue::Text(value) => value.clone(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewStyle {
    List,
    Grid,
    Table,
}

/// Comparator ordering two wines.
pub type WineComparator = fn(&WineModel, &WineModel) -> Ordering;

/// Snapshot of every setting, stored values merged over defaults.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub default_bottle_size: String,
    pub currency: String,
    pub low_quantity_threshold: f64,
    pub sort_by: String,
    pub view_style: String,
    pub show_prices: bool,
    pub show_drinking_window: bool,
}

impl Default for Settings {
    fn default() -> Self {
        let mut settings = Self {
            default_bottle_size: String::new(),
            currency: String::new(),
            low_quantity_threshold: 0.0,
            sort_by: String::new(),
            view_style: String::new(),
            show_prices: false,
            show_drinking_window: false,
        };

        for key in SettingKey::ALL {
            settings.apply(key, key.default_value());
        }

        settings
    }
}

impl Settings {
    /// Sets one field, ignoring a value whose kind doesn't match the key.
    pub fn apply(&mut self, key: SettingKey, value: SettingValue) {
        match (key, value) {
            (SettingKey::DefaultBottleSize, SettingValue::Text(v)) => self.default_bottle_size = v,
            (SettingKey::Currency, SettingValue::Text(v)) => self.currency = v,
            (SettingKey::LowQuantityThreshold, SettingValue::Number(v)) => {
                self.low_quantity_threshold = v
            }
            (SettingKey::SortBy, SettingValue::Text(v)) => self.sort_by = v,
            (SettingKey::ViewStyle, SettingValue::Text(v)) => self.view_style = v,
            (SettingKey::ShowPrices, SettingValue::Bool(v)) => self.show_prices = v,
            (SettingKey::ShowDrinkingWindow, SettingValue::Bool(v)) => {
                self.show_drinking_window = v
            }
            (key, value) => {
                tracing::warn!("Ignoring {:?} value for setting {}", value, key.name())
            }
        }
    }

    /// Bottle size for new wines, `STANDARD` if the stored value isn't a bottle size.
    pub fn default_bottle_size(&self) -> BottleSize {
        BottleSize::try_from_value(&self.default_bottle_size).unwrap_or_default()
    }

    /// Symbol for the configured currency, unknown currencies are shown by their code.
    pub fn currency_symbol(&self) -> &str {
        match self.currency.as_str() {
            "USD" => "$",
            "EUR" => "€",
            "GBP" => "£",
            "JPY" => "¥",
            "AUD" => "A$",
            "CAD" => "C$",
            "CHF" => "CHF ",
            other => other,
        }
    }

    pub fn format_price(&self, amount: f64) -> String {
        match self.currency.as_str() {
            "JPY" => format!("{}{:.0}", self.currency_symbol(), amount),
            _ => format!("{}{:.2}", self.currency_symbol(), amount),
        }
    }

    pub fn is_quantity_low(&self, quantity: i32) -> bool {
        f64::from(quantity) <= self.low_quantity_threshold
    }

    /// Comparator for the configured sort order, by name if the order is unknown.
    pub fn sort_function(&self) -> WineComparator {
        match self.sort_by.as_str() {
            "vintage" => |a, b| b.vintage.cmp(&a.vintage),
            "price" => |a, b| {
                b.purchase_price
                    .partial_cmp(&a.purchase_price)
                    .unwrap_or(Ordering::Equal)
            },
            "rating" => |a, b| b.personal_rating.cmp(&a.personal_rating),
            "drink_from" => |a, b| a.drink_from.cmp(&b.drink_from),
            "quantity" => |a, b| b.quantity.cmp(&a.quantity),
            "recently_added" => |a, b| b.created_at.cmp(&a.created_at),
            _ => |a, b| a.name.cmp(&b.name),
        }
    }

    pub fn view_style(&self) -> ViewStyle {
        match self.view_style.as_str() {
            "grid" => ViewStyle::Grid,
            "table" => ViewStyle::Table,
            _ => ViewStyle::List,
        }
    }
}

impl From<Settings> for SettingsDto {
    fn from(settings: Settings) -> Self {
        Self {
            currency_symbol: settings.currency_symbol().to_string(),
            default_bottle_size: settings.default_bottle_size,
            currency: settings.currency,
            low_quantity_threshold: settings.low_quantity_threshold,
            sort_by: settings.sort_by,
            view_style: settings.view_style,
            show_prices: settings.show_prices,
            show_drinking_window: settings.show_drinking_window,
        }
    }
}
