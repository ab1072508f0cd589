//! Customer-facing response texts (Portuguese).

use crate::models::BasePrice;

pub const CATALOG_UNAVAILABLE: &str =
    "Lamentamos, mas de momento não conseguimos aceder à nossa base de dados de serviços.";

pub const PRICING_NEEDS_DETAILS: &str = "Para cotações, por favor indique o destino e o tipo de carga. Os nossos preços base variam consoante o destino (ex: Lisboa 0.5€/kg, Madrid 1.2€/kg) e tipo de carga.";

pub const PRICING_ASK_DESTINATION: &str = "Para que destino seria a cotação?";

pub const PRICING_ASK_CARGO_TYPE: &str =
    "Que tipo de carga pretende transportar para lhe darmos uma cotação?";

pub const TRANSIT_GENERIC: &str = "Os nossos tempos de trânsito variam consoante o destino e o tipo de carga. Por exemplo, Lisboa para paletes demora 1-2 dias úteis. Pode especificar o seu pedido?";

pub const SERVICE_OVERVIEW: &str = "Oferecemos serviços de transporte de carga para vários destinos, incluindo paletes, contentores, carga refrigerada e mercadorias perigosas. Como podemos ajudar?";

pub const NOTHING_FOUND: &str = "Lamentamos, mas não encontrámos informação específica para o seu pedido. Poderia reformular a sua questão ou perguntar sobre destinos, tipos de carga, preços ou tempos de trânsito?";

pub fn destination_available(name: &str) -> String {
    format!("Sim, fazemos transportes para {name}.")
}

pub fn destination_unavailable(name: &str) -> String {
    format!("De momento, não temos serviço disponível para {name}.")
}

pub fn base_price(name: &str, price: &BasePrice) -> String {
    format!(
        "O preço base para {name} é de {}€/kg ou {}€/m³.",
        price.per_kg, price.per_m3
    )
}

pub fn cargo_description(name: &str, description: &str) -> String {
    format!("Relativamente a {name}: {description}")
}

pub fn cargo_limitations(name: &str, limitations: &str) -> String {
    format!("Limitações para {name}: {limitations}")
}

/// `multiplier` of 1.15 reads as a 15% surcharge. Exact halves round to even.
pub fn cargo_surcharge(name: &str, multiplier: f64) -> String {
    let percent = (multiplier - 1.0) * 100.0;
    format!("Existe uma sobretaxa de {percent:.0}% para {name}.")
}

pub fn transit_time(cargo_type: &str, destination: &str, estimated_days: &str) -> String {
    format!(
        "O tempo de trânsito estimado para {cargo_type} para {destination} é de {estimated_days}."
    )
}

pub fn transit_unknown_pair(cargo_types: &[&str], destinations: &[&str]) -> String {
    format!(
        "Para obter o tempo de trânsito exato para {} para {}, por favor contacte-nos ou consulte a nossa tabela detalhada.",
        cargo_types.join(", "),
        destinations.join(", ")
    )
}

pub fn transit_ask_cargo_type(destinations: &[&str]) -> String {
    format!(
        "Os tempos de trânsito para {} variam. Por exemplo, para Lisboa é geralmente 1-2 dias úteis para paletes. Qual o tipo de carga?",
        destinations.join(", ")
    )
}

pub fn transit_ask_destination(cargo_types: &[&str]) -> String {
    format!(
        "Os tempos de trânsito para {} variam consoante o destino. Para que destino seria?",
        cargo_types.join(", ")
    )
}
