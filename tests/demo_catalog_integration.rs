/// Recorrido de extremo a extremo sobre el catálogo de demostración: el mismo
/// camino que usa el CLI (cargar, normalizar, recomendar, combinar).
use std::sync::atomic::AtomicBool;

use rand::SeedableRng;
use rand::rngs::StdRng;
use sugang::algorithm::combos::{CombinationRequest, find_combinations};
use sugang::algorithm::recommend;
use sugang::algorithm::search::find_by_title;
use sugang::models::{Catalog, EngineConfig};

fn catalogo_demo() -> Catalog {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/lectures.json");
    Catalog::load_json(path).expect("el catálogo de demo debe cargar")
}

#[test]
fn test_listas_sobre_el_catalogo_demo() {
    let catalog = catalogo_demo();
    let cfg = EngineConfig::default();
    let mut rng = StdRng::seed_from_u64(42);

    let populares = recommend::popular(&catalog, &cfg, &mut rng);
    assert_eq!(populares.len(), cfg.list_size);

    let faciles = recommend::easy(&catalog, &cfg, &mut rng);
    assert!(!faciles.is_empty());
    assert!(faciles.iter().all(|s| s.category == "교양"));

    for grade in 1..=4 {
        // nunca entra una sección de carrera a la lista de electivos culturales
        let picks = recommend::liberal_for_grade(&catalog, grade, &cfg);
        assert!(picks.iter().all(|s| s.category == "교양"));
    }
}

#[test]
fn test_similares_sobre_el_catalogo_demo() {
    let catalog = catalogo_demo();
    let cfg = EngineConfig::default();
    let base = find_by_title(&catalog, "데이터베이스").expect("existe en el demo");
    let similares = recommend::similar_to(&catalog, base, &cfg);
    for s in &similares {
        assert_eq!(s.category, base.category);
        assert_eq!(s.credit, base.credit);
        assert!(s.slots.intersection(&base.slots).next().is_none());
    }
}

#[test]
fn test_combinaciones_sobre_el_catalogo_demo() {
    let catalog = catalogo_demo();
    let cfg = EngineConfig::default();
    let cancel = AtomicBool::new(false);
    let req = CombinationRequest { target_credits: 6, desired_titles: vec![] };

    let out = find_combinations(&catalog, &req, &cfg, &cancel);
    assert!(!out.combinations.is_empty());
    for combo in &out.combinations {
        assert_eq!(combo.credits(), 6);
        assert!(combo.courses.iter().all(|c| c.category_kind.is_combinable()));
    }
    // el ranking viene ordenado de mayor a menor
    for pair in out.combinations.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
}
