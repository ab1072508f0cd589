use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Number;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "disponivel", default)]
    pub available: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CargoType {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "descricao", default)]
    pub description: String,
    #[serde(
        rename = "limitacoes",
        default,
        deserialize_with = "non_empty_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub limitations: Option<String>,
}

/// Prices keep the number exactly as the document wrote it, so `2` is shown
/// as "2" and `1.0` as "1.0".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasePrice {
    #[serde(rename = "por_kg")]
    pub per_kg: Number,
    #[serde(rename = "por_m3")]
    pub per_m3: Number,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitTimeEntry {
    #[serde(rename = "destino")]
    pub destination: String,
    #[serde(rename = "tipo_carga")]
    pub cargo_type: String,
    #[serde(rename = "tempo_estimado_dias")]
    pub estimated_days: String,
}

/// The knowledge-base document as it is stored on disk.
///
/// Price and surcharge tables are keyed by display name, exactly as the
/// destinations and cargo types spell them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(rename = "destinos", default)]
    pub destinations: Vec<Destination>,
    #[serde(rename = "tipos_carga", default)]
    pub cargo_types: Vec<CargoType>,
    #[serde(rename = "precos_base", default)]
    pub base_prices: HashMap<String, BasePrice>,
    #[serde(rename = "sobretaxas", default)]
    pub surcharges: HashMap<String, f64>,
    #[serde(rename = "tempos_transito", default)]
    pub transit_times: Vec<TransitTimeEntry>,
}

/// Entities found in a single inquiry, in catalog order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchResult<'kb> {
    pub destinations: Vec<&'kb Destination>,
    pub cargo_types: Vec<&'kb CargoType>,
}

impl MatchResult<'_> {
    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty() && self.cargo_types.is_empty()
    }

    pub fn destination_names(&self) -> Vec<&str> {
        self.destinations.iter().map(|d| d.name.as_str()).collect()
    }

    pub fn cargo_type_names(&self) -> Vec<&str> {
        self.cargo_types.iter().map(|c| c.name.as_str()).collect()
    }
}

fn non_empty_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|v| !v.trim().is_empty()))
}
