use std::path::PathBuf;
use std::sync::Arc;
use std::thread;

use freight_core::{messages, resolve_inquiry, KeywordSets, KnowledgeBase};
use freight_desk::{DeskConfig, FreightDesk};
use freight_observability::DeskMetrics;
use proptest::prelude::*;

fn catalog_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../catalog/simulated_data.json")
}

fn desk() -> FreightDesk {
    let kb = freight_catalog::load_from_path(catalog_path()).expect("sample catalog should load");
    FreightDesk::new(Arc::new(kb), KeywordSets::default(), DeskMetrics::shared())
}

#[test]
fn sample_catalog_loads_through_config() {
    let desk = FreightDesk::from_config(&DeskConfig {
        catalog_path: catalog_path(),
        ..DeskConfig::default()
    });
    assert!(!desk.knowledge_base().is_degraded());
    assert_eq!(desk.knowledge_base().destinations().map(<[_]>::len), Some(7));
}

#[test]
fn availability_is_followed_by_price() {
    assert_eq!(
        desk().resolve_inquiry("Olá, fazem transporte para Lisboa?"),
        vec![
            "Sim, fazemos transportes para Lisboa.",
            "O preço base para Lisboa é de 0.5€/kg ou 1.0€/m³.",
        ]
    );
}

#[test]
fn pricing_question_about_a_destination_answers_with_its_price() {
    assert_eq!(
        desk().resolve_inquiry("Qual o preço para Madrid?"),
        vec![
            "Sim, fazemos transportes para Madrid.",
            "O preço base para Madrid é de 1.2€/kg ou 2.5€/m³.",
        ]
    );
    assert_eq!(
        desk().resolve_inquiry("Quanto custa levar umas caixas para o Porto?"),
        vec![
            "Sim, fazemos transportes para Porto.",
            "O preço base para Porto é de 0.6€/kg ou 1.2€/m³.",
        ]
    );
}

#[test]
fn hazardous_cargo_to_porto() {
    assert_eq!(
        desk().resolve_inquiry("E mercadorias perigosas para o Porto?"),
        vec![
            "Sim, fazemos transportes para Porto.",
            "O preço base para Porto é de 0.6€/kg ou 1.2€/m³.",
            "Relativamente a mercadorias perigosas: Transporte de mercadorias classificadas ADR.",
            "Limitações para mercadorias perigosas: Necessária documentação ADR completa e embalagem homologada.",
            "Existe uma sobretaxa de 50% para mercadorias perigosas.",
        ]
    );
}

#[test]
fn price_and_cargo_question_skips_the_generic_pricing_prompt() {
    let lines = desk().resolve_inquiry("qual o preco para paletes para lisboa");
    assert_eq!(
        lines,
        vec![
            "Sim, fazemos transportes para Lisboa.",
            "O preço base para Lisboa é de 0.5€/kg ou 1.0€/m³.",
            "Relativamente a paletes: Transporte de paletes standard (120x80cm) até 1000kg por palete.",
        ]
    );
    assert!(!lines.contains(&messages::PRICING_NEEDS_DETAILS.to_string()));
}

#[test]
fn transit_for_unserved_destination_asks_for_cargo_type() {
    assert_eq!(
        desk().resolve_inquiry("Tempo de trânsito para Faro"),
        vec![
            "De momento, não temos serviço disponível para Faro.".to_string(),
            messages::transit_ask_cargo_type(&["Faro"]),
        ]
    );
}

#[test]
fn exact_transit_pair_is_reported_once() {
    let lines = desk().resolve_inquiry("Quanto tempo demora para Paris com carga refrigerada?");
    let transit = lines
        .iter()
        .filter(|line| line.contains("tempo de trânsito estimado"))
        .collect::<Vec<_>>();
    assert_eq!(
        transit,
        vec!["O tempo de trânsito estimado para carga refrigerada para Paris é de 4-5 dias úteis."]
    );
}

#[test]
fn unknown_items_fall_back() {
    let desk = desk();
    assert_eq!(
        desk.resolve_inquiry("Transportam pianos?"),
        vec![messages::NOTHING_FOUND]
    );
    assert_eq!(desk.metrics().fallback_total, 1);
}

#[test]
fn degraded_catalog_only_apologises() {
    let desk = FreightDesk::from_config(&DeskConfig {
        catalog_path: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("missing.json"),
        ..DeskConfig::default()
    });
    for inquiry in ["", "Serviços", "qual o preco para paletes para lisboa"] {
        assert_eq!(
            desk.resolve_inquiry(inquiry),
            vec![messages::CATALOG_UNAVAILABLE]
        );
    }
}

#[test]
fn concurrent_readers_share_one_knowledge_base() {
    let kb = Arc::new(
        freight_catalog::load_from_path(catalog_path()).expect("sample catalog should load"),
    );
    let inquiries = [
        "fazem transporte para Lisboa?",
        "prazo para madrid com contentores",
        "Serviços",
        "Transportam pianos?",
    ];
    let expected = inquiries
        .iter()
        .map(|inquiry| resolve_inquiry(&kb, &KeywordSets::default(), inquiry))
        .collect::<Vec<_>>();

    let handles = (0..8)
        .map(|_| {
            let kb = Arc::clone(&kb);
            thread::spawn(move || {
                let keywords = KeywordSets::default();
                inquiries
                    .iter()
                    .map(|inquiry| resolve_inquiry(&kb, &keywords, inquiry))
                    .collect::<Vec<_>>()
            })
        })
        .collect::<Vec<_>>();

    for handle in handles {
        assert_eq!(handle.join().expect("reader thread panicked"), expected);
    }
}

#[test]
fn synthetic_catalog_can_be_injected() {
    let kb: KnowledgeBase = freight_catalog::load_from_str(
        &serde_json::json!({
            "destinos": [{ "nome": "Ponta Delgada", "disponivel": true }],
            "precos_base": { "Ponta Delgada": { "por_kg": 2, "por_m3": 4.75 } }
        })
        .to_string(),
    )
    .expect("synthetic catalog");

    assert_eq!(
        resolve_inquiry(&kb, &KeywordSets::default(), "Enviam para PONTA DELGADA?"),
        vec![
            "Sim, fazemos transportes para Ponta Delgada.",
            "O preço base para Ponta Delgada é de 2€/kg ou 4.75€/m³.",
        ]
    );
}

proptest! {
    #[test]
    fn responses_are_never_empty_and_never_repeat(inquiry in "\\PC{0,60}") {
        let lines = desk().resolve_inquiry(&inquiry);
        prop_assert!(!lines.is_empty());
        for (i, line) in lines.iter().enumerate() {
            prop_assert!(!lines[i + 1..].contains(line));
        }
    }
}
