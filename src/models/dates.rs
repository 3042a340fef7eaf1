use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date descriptor of a stage, tagged by the `tipo_fecha` wire field.
///
/// Two kinds exist in calendar data:
/// - `fecha_unica`: a single milestone date. Either bound may be absent;
///   the activation rules treat a start-only and an end-only spec
///   differently (see `activation`).
/// - `periodo`: a date window. `start` is required for the stage to ever
///   activate; `end` is optional and leaves the window open-ended.
///
/// Any other tag is rejected at load time so typos surface immediately
/// instead of producing a stage that is silently never active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "tipo_fecha")]
pub enum DateSpec {
    #[serde(rename = "fecha_unica")]
    Single {
        #[serde(rename = "fecha_inicio", default, with = "fecha_dmy")]
        start: Option<NaiveDate>,
        #[serde(rename = "fecha_fin", default, with = "fecha_dmy")]
        end: Option<NaiveDate>,
    },
    #[serde(rename = "periodo")]
    Period {
        #[serde(rename = "fecha_inicio", default, with = "fecha_dmy")]
        start: Option<NaiveDate>,
        #[serde(rename = "fecha_fin", default, with = "fecha_dmy")]
        end: Option<NaiveDate>,
    },
}

impl DateSpec {
    pub fn start(&self) -> Option<NaiveDate> {
        match self {
            DateSpec::Single { start, .. } | DateSpec::Period { start, .. } => *start,
        }
    }

    pub fn end(&self) -> Option<NaiveDate> {
        match self {
            DateSpec::Single { end, .. } | DateSpec::Period { end, .. } => *end,
        }
    }

    pub fn is_period(&self) -> bool {
        matches!(self, DateSpec::Period { .. })
    }

    /// Date shown on a single-date stage card: the start if present,
    /// otherwise the end.
    pub fn display_date(&self) -> Option<NaiveDate> {
        self.start().or(self.end())
    }
}

/// Serde codec for the `DD-MM-YYYY` wire dates.
///
/// The empty string and an absent field both decode to `None`; any other
/// unparseable value is an error. `None` encodes back as the empty string,
/// matching the source files.
pub(crate) mod fecha_dmy {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%d-%m-%Y";

    pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(d) => serializer.serialize_str(&d.format(FORMAT).to_string()),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw.as_deref() {
            None | Some("") => Ok(None),
            Some(s) => NaiveDate::parse_from_str(s, FORMAT).map(Some).map_err(|_| {
                serde::de::Error::custom(format!("invalid date '{s}', expected DD-MM-YYYY"))
            }),
        }
    }
}
