/// Tests de las listas Popular / Fácil / por año y de la consulta de similares.
use std::collections::BTreeSet;

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::{Value, json};
use sugang::algorithm::recommend;
use sugang::models::{Catalog, EngineConfig};

fn rec(
    title: &str,
    professor: &str,
    credit: u32,
    category: &str,
    time: &str,
    capacity: u32,
    enrolled: u32,
    notes: &str,
) -> Value {
    json!({
        "수강반번호": "01",
        "과목명": title,
        "담당교수": professor,
        "학점": credit,
        "이수구분": category,
        "강의실 및 시간": time,
        "정원": capacity,
        "담은 인원": enrolled,
        "비고": notes,
        "학년": 0
    })
}

fn catalogo_popular() -> Catalog {
    // 15 secciones con inscritos todos distintos: el top-10 queda bien definido
    let records: Vec<Value> = (0..15)
        .map(|i| {
            rec(
                &format!("과목{i:02}"),
                "홍길동",
                3,
                "전선",
                "월1",
                100,
                10 * (i + 1) as u32,
                "",
            )
        })
        .collect();
    Catalog::from_records(&records)
}

#[test]
fn test_popular_misma_semilla_mismo_orden() {
    let catalog = catalogo_popular();
    let cfg = EngineConfig::default();
    let a: Vec<&str> = recommend::popular(&catalog, &cfg, &mut StdRng::seed_from_u64(7))
        .iter()
        .map(|s| s.title.as_str())
        .collect();
    let b: Vec<&str> = recommend::popular(&catalog, &cfg, &mut StdRng::seed_from_u64(7))
        .iter()
        .map(|s| s.title.as_str())
        .collect();
    assert_eq!(a, b);
}

#[test]
fn test_popular_preseleccion_independiente_de_la_semilla() {
    let catalog = catalogo_popular();
    let cfg = EngineConfig::default();
    // top-10 por inscritos: 과목05..과목14
    let top10: BTreeSet<String> = (5..15).map(|i| format!("과목{i:02}")).collect();
    for seed in 0..10 {
        let picks = recommend::popular(&catalog, &cfg, &mut StdRng::seed_from_u64(seed));
        assert_eq!(picks.len(), cfg.list_size);
        for s in picks {
            assert!(
                top10.contains(&s.title),
                "{} no pertenece a la preselección top-10",
                s.title
            );
        }
    }
}

#[test]
fn test_facil_solo_devuelve_electivos_culturales() {
    let mut records = vec![
        rec("전공과목", "홍길동", 3, "전필", "월1", 50, 50, ""),
        rec("일선과목", "홍길동", 2, "일반선택", "월2", 50, 10, ""),
    ];
    for i in 0..12 {
        records.push(rec(
            &format!("교양{i:02}"),
            "홍길동",
            2,
            "교양",
            &format!("화{}", i % 9 + 1),
            50,
            i as u32,
            if i % 3 == 0 { "S/U 평가" } else { "" },
        ));
    }
    let catalog = Catalog::from_records(&records);
    let cfg = EngineConfig::default();
    let picks = recommend::easy(&catalog, &cfg, &mut StdRng::seed_from_u64(1));
    assert_eq!(picks.len(), cfg.list_size);
    assert!(picks.iter().all(|s| s.category == "교양"));
}

#[test]
fn test_recomendacion_por_anio_es_determinista() {
    let records = vec![
        rec("요가", "한지우", 1, "교양", "수1", 40, 4, "S/U 평가"),
        rec("글쓰기", "최윤아", 3, "교양", "월1,2", 50, 45, ""),
        rec("세계영화", "최윤아", 2, "교양", "화7", 90, 36, ""),
        rec("전공과목", "홍길동", 3, "전필", "월5", 50, 50, ""),
    ];
    // "글쓰기" solo para 1er año
    let mut records = records;
    records[1]["학년"] = json!(1);
    let catalog = Catalog::from_records(&records);
    let cfg = EngineConfig::default();

    let grade1: Vec<&str> = recommend::liberal_for_grade(&catalog, 1, &cfg)
        .iter()
        .map(|s| s.title.as_str())
        .collect();
    // orden de facilidad: S/U primero, luego por llenado ascendente
    assert_eq!(grade1, vec!["요가", "세계영화", "글쓰기"]);

    // para 2º año la sección de 1er año no entra; las de "cualquier año" sí
    let grade2: Vec<&str> = recommend::liberal_for_grade(&catalog, 2, &cfg)
        .iter()
        .map(|s| s.title.as_str())
        .collect();
    assert_eq!(grade2, vec!["요가", "세계영화"]);

    // sin barajado: dos llamadas son idénticas
    let again: Vec<&str> = recommend::liberal_for_grade(&catalog, 1, &cfg)
        .iter()
        .map(|s| s.title.as_str())
        .collect();
    assert_eq!(grade1, again);
}

#[test]
fn test_similares_filtros_y_ranking() {
    let records = vec![
        // base: llena (ease 0)
        rec("세계 영화 산책", "김교수", 2, "교양", "화7,8", 50, 50, ""),
        // candidato fuerte: comparte palabras, otro profesor, sección vacía
        rec("세계 영화 기행", "박교수", 2, "교양", "수1", 50, 0, ""),
        // mismo puntaje de rasgos más alto pero repite profesor: penalizado
        rec("세계 영화 여행", "김교수", 2, "교양", "목1", 50, 0, ""),
        // choca con el horario de la base: excluido
        rec("세계 영화 감상", "이교수", 2, "교양", "화7", 50, 0, ""),
        // créditos distintos: excluido
        rec("세계 영화 연구", "이교수", 3, "교양", "금1", 50, 0, ""),
        // categoría distinta: excluido
        rec("세계 영화 공학", "이교수", 2, "전선", "금2", 50, 0, ""),
    ];
    let catalog = Catalog::from_records(&records);
    let cfg = EngineConfig::default();
    let base = &catalog.sections[0];

    let titles: Vec<&str> = recommend::similar_to(&catalog, base, &cfg)
        .iter()
        .map(|s| s.title.as_str())
        .collect();
    assert_eq!(titles, vec!["세계 영화 기행", "세계 영화 여행"]);
}

#[test]
fn test_similares_excluye_la_base_y_respeta_el_tope() {
    let mut records = vec![rec("공통 과목", "김교수", 2, "교양", "월1", 50, 25, "")];
    for i in 0..8 {
        records.push(rec(
            &format!("공통 과목 {i}"),
            "박교수",
            2,
            "교양",
            &format!("화{}", i + 1),
            50,
            i as u32,
            "",
        ));
    }
    let catalog = Catalog::from_records(&records);
    let cfg = EngineConfig::default();
    let base = &catalog.sections[0];

    let similares = recommend::similar_to(&catalog, base, &cfg);
    assert_eq!(similares.len(), cfg.similar_cap);
    assert!(similares.iter().all(|s| !std::ptr::eq(*s, base)));
}
