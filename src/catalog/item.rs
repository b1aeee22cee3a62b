use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One stocked material, normalized from the sheet's transport record.
///
/// Which descriptive fields are present depends on the deployed variant's
/// column set; absent columns stay `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    /// Stable integer identity assigned by the sheet script.
    pub id: i64,
    /// Display name (textbook title).
    pub name: String,
    pub publisher: Option<String>,
    pub isbn: Option<String>,
    pub location: Option<String>,
    pub subject: Option<String>,
    pub grade: Option<String>,
    /// Unit cost in yen, where the variant carries one.
    pub cost: Option<i64>,
    /// Sheet-computed monetary total, where the variant carries one.
    pub total: Option<i64>,
    /// Current stock count. Negative values are a data-entry anomaly on the
    /// sheet side; this crate never produces them.
    pub stock: i64,
    /// Reorder threshold.
    pub alert: i64,
    /// Zero-based position in the most recent fetch. Recomputed wholesale
    /// on every reload, never mutated incrementally.
    pub origin_rank: usize,
}

impl Item {
    pub fn from_raw(raw: RawItem, origin_rank: usize) -> Self {
        Self {
            id: raw.id,
            name: raw.name,
            publisher: raw.publisher,
            isbn: raw.isbn,
            location: raw.location,
            subject: raw.subject,
            grade: raw.grade,
            cost: raw.cost,
            total: raw.total,
            stock: raw.stock,
            alert: raw.alert,
            origin_rank,
        }
    }

    /// Low-stock flag: at or below the reorder threshold.
    pub fn is_low(&self) -> bool {
        self.stock <= self.alert
    }

    /// Categorical tags that participate in the search filter, in addition
    /// to the display name. ISBN is deliberately not searched.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        [
            self.publisher.as_deref(),
            self.subject.as_deref(),
            self.grade.as_deref(),
            self.location.as_deref(),
        ]
        .into_iter()
        .flatten()
    }

    /// Primary categorical tag for the category sort mode: the subject
    /// where the variant has one, otherwise the publisher.
    pub fn category_key(&self) -> &str {
        self.subject
            .as_deref()
            .or(self.publisher.as_deref())
            .unwrap_or("")
    }

    pub fn grade_key(&self) -> &str {
        self.grade.as_deref().unwrap_or("")
    }
}

/// Transport record as delivered by `GET ?action=get`.
///
/// Field names are the sheet's Japanese column headers. Numeric columns may
/// arrive as JSON strings (the sheet script is loosely typed) and are
/// coerced on the way in.
#[derive(Debug, Clone, Deserialize)]
pub struct RawItem {
    #[serde(rename = "商品ID", deserialize_with = "flexible_i64")]
    pub id: i64,
    #[serde(rename = "教科書名", default)]
    pub name: String,
    #[serde(rename = "出版社", default, deserialize_with = "flexible_opt_string")]
    pub publisher: Option<String>,
    #[serde(rename = "ISBNコード", default, deserialize_with = "flexible_opt_string")]
    pub isbn: Option<String>,
    #[serde(rename = "保管場所", default, deserialize_with = "flexible_opt_string")]
    pub location: Option<String>,
    #[serde(rename = "教科", default, deserialize_with = "flexible_opt_string")]
    pub subject: Option<String>,
    #[serde(rename = "学年", default, deserialize_with = "flexible_opt_string")]
    pub grade: Option<String>,
    #[serde(rename = "単価", default, deserialize_with = "flexible_opt_i64")]
    pub cost: Option<i64>,
    #[serde(rename = "合計金額", default, deserialize_with = "flexible_opt_i64")]
    pub total: Option<i64>,
    #[serde(rename = "現在在庫数", default, deserialize_with = "flexible_i64")]
    pub stock: i64,
    #[serde(rename = "発注点", default, deserialize_with = "flexible_i64")]
    pub alert: i64,
}

fn coerce_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Some(0)
            } else {
                trimmed
                    .parse::<i64>()
                    .ok()
                    .or_else(|| trimmed.parse::<f64>().ok().map(|f| f as i64))
            }
        }
        Value::Null => Some(0),
        _ => None,
    }
}

fn flexible_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    coerce_i64(&value)
        .ok_or_else(|| D::Error::custom(format!("expected an integer-like value, got {value}")))
}

fn flexible_opt_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match &value {
        Value::Null => Ok(None),
        Value::String(s) if s.trim().is_empty() => Ok(None),
        other => coerce_i64(other).map(Some).ok_or_else(|| {
            D::Error::custom(format!("expected an integer-like value, got {value}"))
        }),
    }
}

fn flexible_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::String(s) => {
            if s.trim().is_empty() {
                Ok(None)
            } else {
                Ok(Some(s))
            }
        }
        // Sheets deliver bare ISBNs and grades as numbers now and then.
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Null => Ok(None),
        other => Err(D::Error::custom(format!(
            "expected a string-like value, got {other}"
        ))),
    }
}
