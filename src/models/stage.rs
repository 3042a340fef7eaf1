use serde::{Deserialize, Deserializer, Serialize};

use crate::models::dates::DateSpec;

/// One stage of the convocatoria calendar.
///
/// Field names follow the code; the serde renames keep the Spanish wire
/// keys of the published data files. Link fields normalize the empty
/// string to `None` so "no link" has a single representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stage {
    /// Position in the flow. Stage 0 is the pre-announcement entry: it
    /// never appears in the rendered list but can own the hero banner.
    #[serde(rename = "orden_en_flujo")]
    pub order: u32,

    #[serde(rename = "nombre_etapa")]
    pub name: String,

    #[serde(rename = "fecha", default)]
    pub dates: Option<DateSpec>,

    /// Target of the stage card's "Consultar" link. The link renders
    /// disabled when this is absent or the stage is inactive.
    #[serde(
        rename = "enlace_documento",
        default,
        deserialize_with = "empty_string_opt"
    )]
    pub document_link: Option<String>,

    #[serde(rename = "seccion_destacada", default)]
    pub featured: Option<FeaturedSection>,
}

impl Stage {
    /// Whether the stage asks to be considered for the hero banner.
    pub fn opts_into_banner(&self) -> bool {
        self.featured.as_ref().is_some_and(|f| f.show_in_banner)
    }
}

/// Hero-banner descriptor of a stage (`seccion_destacada`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeaturedSection {
    #[serde(rename = "mostrar_en_seccion_destacada", default)]
    pub show_in_banner: bool,

    #[serde(rename = "contiene_boton", default)]
    pub has_button: bool,

    #[serde(
        rename = "enlace_seccion_destacada",
        default,
        deserialize_with = "empty_string_opt"
    )]
    pub button_link: Option<String>,

    #[serde(
        rename = "texto_boton_destacado",
        default,
        deserialize_with = "empty_string_opt"
    )]
    pub button_text: Option<String>,

    #[serde(
        rename = "texto_seccion_destacada",
        default,
        deserialize_with = "empty_string_opt"
    )]
    pub text: Option<String>,
}

fn empty_string_opt<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|s| !s.is_empty()))
}
