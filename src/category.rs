use serde::{Deserialize, Serialize};

/// 다루는 변환 카테고리를 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Length,
    Temperature,
    Area,
    Volume,
    Weight,
    Time,
}

/// 선택 UI에 표시하는 순서 그대로의 전체 카테고리 목록.
pub const ALL: [Category; 6] = [
    Category::Length,
    Category::Temperature,
    Category::Area,
    Category::Volume,
    Category::Weight,
    Category::Time,
];

impl Category {
    /// 카테고리 이름의 번역 키.
    pub fn label_key(self) -> &'static str {
        match self {
            Category::Length => "category.length",
            Category::Temperature => "category.temperature",
            Category::Area => "category.area",
            Category::Volume => "category.volume",
            Category::Weight => "category.weight",
            Category::Time => "category.time",
        }
    }
}

/// 카테고리별 (표시 라벨, 단위 식별자) 목록. 선택 UI와 파서가 같은 식별자를 쓴다.
pub fn unit_options(category: Category) -> &'static [(&'static str, &'static str)] {
    match category {
        Category::Length => &[
            ("meter (m)", "meter"),
            ("kilometer (km)", "kilometer"),
            ("centimeter (cm)", "centimeter"),
            ("millimeter (mm)", "millimeter"),
            ("micrometer (µm)", "micrometer"),
            ("nanometer (nm)", "nanometer"),
            ("mile (mi)", "mile"),
            ("yard (yd)", "yard"),
            ("foot (ft)", "foot"),
            ("inch (in)", "inch"),
            ("light year (ly)", "light_year"),
        ],
        Category::Temperature => &[
            ("Celsius (°C)", "celsius"),
            ("Fahrenheit (°F)", "fahrenheit"),
            ("Kelvin (K)", "kelvin"),
        ],
        Category::Area => &[
            ("square meter (m²)", "square_meter"),
            ("square kilometer (km²)", "square_kilometer"),
            ("square centimeter (cm²)", "square_centimeter"),
            ("square millimeter (mm²)", "square_millimeter"),
            ("square mile (mi²)", "square_mile"),
            ("square yard (yd²)", "square_yard"),
            ("square foot (ft²)", "square_foot"),
            ("square inch (in²)", "square_inch"),
        ],
        Category::Volume => &[
            ("liter (L)", "liter"),
            ("milliliter (mL)", "milliliter"),
            ("cubic meter (m³)", "cubic_meter"),
            ("cubic centimeter (cm³)", "cubic_centimeter"),
            ("cubic millimeter (mm³)", "cubic_millimeter"),
            ("gallon (gal)", "gallon"),
            ("quart (qt)", "quart"),
            ("pint (pt)", "pint"),
            ("cup", "cup"),
            ("fluid ounce (fl oz)", "fluid_ounce"),
        ],
        Category::Weight => &[
            ("gram (g)", "gram"),
            ("kilogram (kg)", "kilogram"),
            ("milligram (mg)", "milligram"),
            ("microgram (µg)", "microgram"),
            ("ton (t)", "ton"),
            ("pound (lb)", "pound"),
            ("ounce (oz)", "ounce"),
        ],
        Category::Time => &[
            ("second (s)", "second"),
            ("minute (min)", "minute"),
            ("hour (h)", "hour"),
            ("day", "day"),
            ("week", "week"),
            ("month", "month"),
            ("year", "year"),
        ],
    }
}

/// 카테고리 선택 직후 사용할 기본 (입력, 변환) 단위 쌍.
pub fn default_units(category: Category) -> (&'static str, &'static str) {
    match category {
        Category::Length => ("meter", "kilometer"),
        Category::Temperature => ("celsius", "fahrenheit"),
        Category::Area => ("square_meter", "square_foot"),
        Category::Volume => ("liter", "gallon"),
        Category::Weight => ("kilogram", "pound"),
        Category::Time => ("minute", "second"),
    }
}

/// 식별자에 해당하는 표시 라벨을 찾는다. 모르는 식별자는 그대로 돌려준다.
pub fn unit_label(code: &str, category: Category) -> String {
    for (label, c) in unit_options(category) {
        if code.eq_ignore_ascii_case(c) {
            return label.to_string();
        }
    }
    code.to_string()
}
