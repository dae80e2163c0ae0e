use egui::Color32;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Font size in pixels, written as `"15px"` in JSON
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FontSize(f32);

#[derive(Debug, Error, Clone, PartialEq)]
#[error("Invalid font size {0:?}, expected a value like \"15px\"")]
pub struct ParseFontSizeError(String);

impl FontSize {
    pub const fn px(pixels: f32) -> Self {
        Self(pixels)
    }

    pub fn pixels(self) -> f32 {
        self.0
    }
}

impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.0)
    }
}

impl FromStr for FontSize {
    type Err = ParseFontSizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .strip_suffix("px")
            .and_then(|pixels| pixels.trim().parse::<f32>().ok())
            .map(FontSize)
            .ok_or_else(|| ParseFontSizeError(s.to_owned()))
    }
}

impl TryFrom<String> for FontSize {
    type Error = ParseFontSizeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FontSize> for String {
    fn from(size: FontSize) -> Self {
        size.to_string()
    }
}

/// Sizes offered by the toolbar, in display order
pub const FONT_SIZE_OPTIONS: [FontSize; 6] = [
    FontSize::px(15.0),
    FontSize::px(25.0),
    FontSize::px(50.0),
    FontSize::px(100.0),
    FontSize::px(150.0),
    FontSize::px(200.0),
];

/// Font families offered by the toolbar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FontFamily {
    #[default]
    #[serde(rename = "Times New Roman")]
    TimesNewRoman,
    #[serde(rename = "Courier New")]
    CourierNew,
    Verdana,
    Georgia,
    #[serde(rename = "Comic Sans MS")]
    ComicSansMs,
    Helvetica,
    Impact,
    #[serde(rename = "Trebuchet MS")]
    TrebuchetMs,
    Palatino,
    #[serde(rename = "Lucida Console")]
    LucidaConsole,
    Cursive,
    Fantasy,
    Monospace,
    #[serde(rename = "Brush Script MT")]
    BrushScriptMt,
    Copperplate,
    Garamond,
}

impl FontFamily {
    /// Every family, in toolbar order
    pub const ALL: [FontFamily; 16] = [
        FontFamily::TimesNewRoman,
        FontFamily::CourierNew,
        FontFamily::Verdana,
        FontFamily::Georgia,
        FontFamily::ComicSansMs,
        FontFamily::Helvetica,
        FontFamily::Impact,
        FontFamily::TrebuchetMs,
        FontFamily::Palatino,
        FontFamily::LucidaConsole,
        FontFamily::Cursive,
        FontFamily::Fantasy,
        FontFamily::Monospace,
        FontFamily::BrushScriptMt,
        FontFamily::Copperplate,
        FontFamily::Garamond,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FontFamily::TimesNewRoman => "Times New Roman",
            FontFamily::CourierNew => "Courier New",
            FontFamily::Verdana => "Verdana",
            FontFamily::Georgia => "Georgia",
            FontFamily::ComicSansMs => "Comic Sans MS",
            FontFamily::Helvetica => "Helvetica",
            FontFamily::Impact => "Impact",
            FontFamily::TrebuchetMs => "Trebuchet MS",
            FontFamily::Palatino => "Palatino",
            FontFamily::LucidaConsole => "Lucida Console",
            FontFamily::Cursive => "Cursive",
            FontFamily::Fantasy => "Fantasy",
            FontFamily::Monospace => "Monospace",
            FontFamily::BrushScriptMt => "Brush Script MT",
            FontFamily::Copperplate => "Copperplate",
            FontFamily::Garamond => "Garamond",
        }
    }

    /// Whether the family is fixed-width
    pub fn is_monospace(self) -> bool {
        matches!(
            self,
            FontFamily::CourierNew | FontFamily::LucidaConsole | FontFamily::Monospace
        )
    }
}

impl fmt::Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Visual style of a text element.
///
/// New elements copy the toolbar's style at the moment they are added, so
/// later toolbar changes never reach existing elements except through an
/// explicit restyle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextStyle {
    pub font_size: FontSize,
    pub color: Color32,
    pub font_family: FontFamily,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_size: FONT_SIZE_OPTIONS[0],
            color: Color32::BLACK,
            font_family: FontFamily::default(),
        }
    }
}

/// A single style key together with its new value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum StyleProperty {
    FontSize(FontSize),
    Color(Color32),
    FontFamily(FontFamily),
}

impl StyleProperty {
    pub fn name(&self) -> &'static str {
        match self {
            StyleProperty::FontSize(_) => "fontSize",
            StyleProperty::Color(_) => "color",
            StyleProperty::FontFamily(_) => "fontFamily",
        }
    }
}

impl TextStyle {
    /// Copy of this style with one key replaced
    pub fn with(self, property: StyleProperty) -> Self {
        match property {
            StyleProperty::FontSize(font_size) => Self { font_size, ..self },
            StyleProperty::Color(color) => Self { color, ..self },
            StyleProperty::FontFamily(font_family) => Self {
                font_family,
                ..self
            },
        }
    }

    /// Whether `property` already holds its value in this style
    pub fn has(&self, property: StyleProperty) -> bool {
        match property {
            StyleProperty::FontSize(font_size) => self.font_size == font_size,
            StyleProperty::Color(color) => self.color == color,
            StyleProperty::FontFamily(font_family) => self.font_family == font_family,
        }
    }
}

/// Format a color as `#rrggbb`, ignoring alpha
pub fn hex(color: Color32) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}
