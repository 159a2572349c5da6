// Listas de recomendación: populares, fáciles, similares y por año de carrera.

use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::algorithm::conflict::conflict_with_policy;
use crate::algorithm::scoring::combined_score;
use crate::models::{Catalog, CategoryKind, CourseSection, EngineConfig};

/// Orden "fácil primero": S/U antes que nota, menos llenas antes, y a igualdad
/// las más populares. Orden estable: empates conservan el orden del catálogo.
pub fn ease_ordering(a: &CourseSection, b: &CourseSection) -> std::cmp::Ordering {
    b.pass_fail
        .cmp(&a.pass_fail)
        .then(a.crowding_ratio().total_cmp(&b.crowding_ratio()))
        .then(b.enrolled.cmp(&a.enrolled))
}

/// Paso de presentación compartido por Popular y Fácil: preseleccionar los
/// mejores 2N (acotado a [10,20]), barajar esa preselección y cortar a N.
/// Qué secciones entran a la preselección es determinista; solo el orden final
/// depende del Rng inyectado, así los tests fijan una semilla.
fn shortlist_then_shuffle<'a, R: Rng>(
    mut ordered: Vec<&'a CourseSection>,
    cfg: &EngineConfig,
    rng: &mut R,
) -> Vec<&'a CourseSection> {
    let shortlist = (cfg.list_size * 2).clamp(10, 20).min(ordered.len());
    ordered.truncate(shortlist);
    ordered.shuffle(rng);
    ordered.truncate(cfg.list_size);
    ordered
}

/// Lista "인기강의": todo el catálogo ordenado por inscritos descendente.
pub fn popular<'a, R: Rng>(
    catalog: &'a Catalog,
    cfg: &EngineConfig,
    rng: &mut R,
) -> Vec<&'a CourseSection> {
    let mut ordered: Vec<&CourseSection> = catalog.sections.iter().collect();
    ordered.sort_by(|a, b| b.enrolled.cmp(&a.enrolled));
    shortlist_then_shuffle(ordered, cfg, rng)
}

/// Lista "꿀강의": solo electivos culturales, ordenados por facilidad.
pub fn easy<'a, R: Rng>(
    catalog: &'a Catalog,
    cfg: &EngineConfig,
    rng: &mut R,
) -> Vec<&'a CourseSection> {
    let mut ordered: Vec<&CourseSection> = catalog
        .sections
        .iter()
        .filter(|s| s.category_kind == CategoryKind::Liberal)
        .collect();
    ordered.sort_by(|a, b| ease_ordering(a, b));
    shortlist_then_shuffle(ordered, cfg, rng)
}

/// Recomendación de electivos culturales por año de carrera ("학년별 추천 교양").
/// Entran las secciones del año pedido y las de "cualquier año" (0).
/// Determinista: sin barajado.
pub fn liberal_for_grade<'a>(
    catalog: &'a Catalog,
    grade_year: u32,
    cfg: &EngineConfig,
) -> Vec<&'a CourseSection> {
    let mut ordered: Vec<&CourseSection> = catalog
        .sections
        .iter()
        .filter(|s| s.category_kind == CategoryKind::Liberal)
        .filter(|s| s.grade_year == 0 || s.grade_year == grade_year)
        .collect();
    ordered.sort_by(|a, b| ease_ordering(a, b));
    ordered.truncate(cfg.list_size);
    ordered
}

/// Consulta "유사과목": candidatos de la misma categoría normalizada y mismos
/// créditos que el curso base, excluyendo el propio base y los que chocan con
/// su horario; ranking por `combined_score` descendente (estable).
pub fn similar_to<'a>(
    catalog: &'a Catalog,
    base: &CourseSection,
    cfg: &EngineConfig,
) -> Vec<&'a CourseSection> {
    let mut scored: Vec<(&CourseSection, f64)> = catalog
        .sections
        .iter()
        .filter(|c| !std::ptr::eq(*c, base))
        .filter(|c| c.category == base.category && c.credit == base.credit)
        .filter(|c| !conflict_with_policy(&c.slots, &base.slots, cfg.unparsed_policy))
        .map(|c| (c, combined_score(base, c)))
        .collect();
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
    debug!(
        "similares a '{}': {} candidatos tras filtros",
        base.title,
        scored.len()
    );
    scored
        .into_iter()
        .take(cfg.similar_cap)
        .map(|(c, _)| c)
        .collect()
}
