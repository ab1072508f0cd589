use serde_json::json;

use crate::knowledge::KnowledgeBase;
use crate::models::Catalog;

pub(crate) fn sample_kb() -> KnowledgeBase {
    let catalog: Catalog = serde_json::from_value(json!({
        "destinos": [
            { "nome": "Lisboa", "disponivel": true },
            { "nome": "Porto", "disponivel": true },
            { "nome": "Madrid", "disponivel": true },
            { "nome": "Paris", "disponivel": true },
            { "nome": "Braga", "disponivel": true },
            { "nome": "Faro", "disponivel": false }
        ],
        "tipos_carga": [
            { "nome": "paletes", "descricao": "Paletes standard (120x80cm) até 1000kg." },
            {
                "nome": "contentores",
                "descricao": "Contentores de 20 e 40 pés.",
                "limitacoes": "Apenas para destinos com terminal de contentores."
            },
            {
                "nome": "carga refrigerada",
                "descricao": "Transporte com temperatura controlada entre -25ºC e 8ºC.",
                "limitacoes": "Requer reserva com 48h de antecedência."
            },
            {
                "nome": "mercadorias perigosas",
                "descricao": "Mercadorias classificadas ADR.",
                "limitacoes": "Documentação ADR completa obrigatória."
            },
            { "nome": "granel", "descricao": "Carga a granel em big bags." }
        ],
        "precos_base": {
            "Lisboa": { "por_kg": 0.5, "por_m3": 1.0 },
            "Porto": { "por_kg": 0.6, "por_m3": 1.2 },
            "Madrid": { "por_kg": 1.2, "por_m3": 2.5 },
            "Paris": { "por_kg": 1.8, "por_m3": 3.5 }
        },
        "sobretaxas": {
            "carga refrigerada": 1.25,
            "mercadorias perigosas": 1.5
        },
        "tempos_transito": [
            { "destino": "Lisboa", "tipo_carga": "paletes", "tempo_estimado_dias": "1-2 dias úteis" },
            { "destino": "Porto", "tipo_carga": "paletes", "tempo_estimado_dias": "1-2 dias úteis" },
            { "destino": "Madrid", "tipo_carga": "paletes", "tempo_estimado_dias": "2-3 dias úteis" },
            { "destino": "Madrid", "tipo_carga": "contentores", "tempo_estimado_dias": "3-4 dias úteis" },
            { "destino": "Paris", "tipo_carga": "carga refrigerada", "tempo_estimado_dias": "4-5 dias úteis" },
            { "destino": "Lisboa", "tipo_carga": "mercadorias perigosas", "tempo_estimado_dias": "2-3 dias úteis" }
        ]
    }))
    .expect("fixture catalog is valid");

    KnowledgeBase::new(catalog)
}
